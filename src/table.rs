//! Truth tables.
//!
//! [`TruthTable::build`] evaluates a list of expressions on every assignment
//! of their combined variables. The result can be inspected row by row or
//! rendered as a Markdown-style text table:
//!
//! ```text
//! | A | B | (A ∧ B) |
//! |:---:|:---:|:---:|
//! | T | T | T |
//! | T | F | F |
//! | F | T | F |
//! | F | F | F |
//! ```
//!
//! Columns are the variables in first-seen order across the expression list,
//! followed by one column per expression. Rows follow the order of
//! [`enumerate`][crate::enumerate::enumerate].

use std::fmt;

use log::debug;

use crate::enumerate::enumerate;
use crate::error::Result;
use crate::expr::Expr;
use crate::types::{Var, VarSet};

/// Alignment marker used in the separator row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    fn marker(self) -> &'static str {
        match self {
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        }
    }
}

/// Configuration options for rendering a [`TruthTable`].
///
/// `TableConfig::default()` produces the standard `T`/`F` centered layout.
///
/// ```
/// use truth_table::expr::Expr;
/// use truth_table::table::{Alignment, TableConfig, TruthTable};
///
/// let table = TruthTable::build(&[Expr::not("A")]).unwrap();
/// let config = TableConfig {
///     true_symbol: "1",
///     false_symbol: "0",
///     alignment: Alignment::Right,
/// };
/// assert_eq!(
///     table.render_with_config(&config),
///     "| A | ¬A |\n|---:|---:|\n| 1 | 0 |\n| 0 | 1 |"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Symbol for a true cell (default: "T")
    pub true_symbol: &'static str,
    /// Symbol for a false cell (default: "F")
    pub false_symbol: &'static str,
    /// Column alignment marker (default: centered)
    pub alignment: Alignment,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            true_symbol: "T",
            false_symbol: "F",
            alignment: Alignment::Center,
        }
    }
}

impl TableConfig {
    fn symbol(&self, value: bool) -> &'static str {
        if value {
            self.true_symbol
        } else {
            self.false_symbol
        }
    }
}

/// One assignment and the value of every expression under it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Variable values, in column order.
    pub values: Vec<bool>,
    /// Expression results, in input order.
    pub results: Vec<bool>,
}

/// A computed truth table.
#[derive(Debug, Clone)]
pub struct TruthTable {
    vars: Vec<Var>,
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Evaluates `exprs` on every assignment of their combined variables.
    ///
    /// An empty expression list gives an empty table (no columns, no rows),
    /// which renders as an empty string.
    pub fn build(exprs: &[Expr]) -> Result<Self> {
        if exprs.is_empty() {
            debug!("build: no expressions, empty table");
            return Ok(Self {
                vars: Vec::new(),
                headers: Vec::new(),
                rows: Vec::new(),
            });
        }

        let mut vars = VarSet::new();
        for expr in exprs {
            expr.collect_variables(&mut vars);
        }
        let assignments = enumerate(&vars)?;
        debug!(
            "build: {} expressions over {} variables, {} rows",
            exprs.len(),
            vars.len(),
            assignments.total()
        );

        let mut rows = Vec::new();
        for env in assignments {
            let values = vars.iter().map(|var| env.lookup(var)).collect::<Result<Vec<_>>>()?;
            let results = exprs.iter().map(|expr| expr.eval(&env)).collect::<Result<Vec<_>>>()?;
            rows.push(Row { values, results });
        }

        Ok(Self {
            vars: vars.into_vec(),
            headers: exprs.iter().map(|expr| expr.to_string()).collect(),
            rows,
        })
    }

    /// Variable columns, in order.
    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    /// Rendered expressions heading the result columns.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.vars.len() + self.headers.len()
    }

    /// Renders the table with the default configuration.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Renders the table with the given configuration.
    pub fn render_with_config(&self, config: &TableConfig) -> String {
        TableDisplay { table: self, config }.to_string()
    }

    fn write_to(&self, f: &mut fmt::Formatter<'_>, config: &TableConfig) -> fmt::Result {
        if self.num_columns() == 0 {
            return Ok(());
        }

        // Header
        write!(f, "|")?;
        for var in &self.vars {
            write!(f, " {} |", var)?;
        }
        for header in &self.headers {
            write!(f, " {} |", header)?;
        }

        // Separator
        write!(f, "\n|")?;
        for _ in 0..self.num_columns() {
            write!(f, "{}|", config.alignment.marker())?;
        }

        // Rows
        for row in &self.rows {
            write!(f, "\n|")?;
            for &value in row.values.iter().chain(row.results.iter()) {
                write!(f, " {} |", config.symbol(value))?;
            }
        }

        Ok(())
    }
}

struct TableDisplay<'a> {
    table: &'a TruthTable,
    config: &'a TableConfig,
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table.write_to(f, self.config)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, &TableConfig::default())
    }
}

/// Builds and renders the truth table of `exprs` with the default configuration.
pub fn build_table(exprs: &[Expr]) -> Result<String> {
    Ok(TruthTable::build(exprs)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_render_and() {
        let table = build_table(&[Expr::and("A", "B")]).unwrap();
        let expected = "\
| A | B | (A ∧ B) |
|:---:|:---:|:---:|
| T | T | T |
| T | F | F |
| F | T | F |
| F | F | F |";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_empty() {
        let table = TruthTable::build(&[]).unwrap();
        assert_eq!(table.num_columns(), 0);
        assert!(table.rows().is_empty());
        assert_eq!(build_table(&[]).unwrap(), "");
    }

    #[test]
    fn test_columns_shared_and_ordered() {
        let exprs = [Expr::or("B", "A"), Expr::and("A", "C"), Expr::not("B")];
        let table = TruthTable::build(&exprs).unwrap();
        let names: Vec<&str> = table.vars().iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(table.headers(), &["(B ∨ A)", "(A ∧ C)", "¬B"]);
        assert_eq!(table.rows().len(), 8);
        assert_eq!(table.num_columns(), 6);
    }

    #[test]
    fn test_rows_consistent() {
        let f = Expr::and(Expr::or("A", "C"), Expr::not("B"));
        let table = TruthTable::build(&[f]).unwrap();
        assert_eq!(table.rows().len(), 8);
        for row in table.rows() {
            let (a, c, b) = (row.values[0], row.values[1], row.values[2]);
            assert_eq!(row.results, vec![(a || c) && !b]);
        }
    }

    fn cell_count(line: &str) -> usize {
        line.matches('|').count() - 1
    }

    #[test]
    fn test_connective_headers_keep_shape() {
        let exprs = [
            Expr::nand("A", "B"),
            Expr::nor("A", "B"),
            Expr::set_difference("A", "B"),
            Expr::symmetric_difference("A", "B"),
        ];
        let text = build_table(&exprs).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "| A | B | (A ↑ B) | (A ↓ B) | (A \\ B) | (A ⊖ B) |");
        assert_eq!(lines.len(), 2 + 4);
        for line in &lines {
            assert_eq!(cell_count(line), 6, "line {:?}", line);
        }
    }

    #[test]
    fn test_single_variable() {
        let table = build_table(&[Expr::var("A")]).unwrap();
        assert_eq!(table, "| A | A |\n|:---:|:---:|\n| T | T |\n| F | F |");
    }

    #[test]
    fn test_render_with_config() {
        let table = TruthTable::build(&[Expr::implies("P", "Q")]).unwrap();
        let config = TableConfig {
            true_symbol: "1",
            false_symbol: "0",
            alignment: Alignment::Left,
        };
        let expected = "\
| P | Q | (P ⇒ Q) |
|:---|:---|:---|
| 1 | 1 | 1 |
| 1 | 0 | 0 |
| 0 | 1 | 1 |
| 0 | 0 | 1 |";
        assert_eq!(table.render_with_config(&config), expected);
        assert_eq!(table.render(), table.to_string());
    }
}
