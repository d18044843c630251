//! Equivalence checking by exhaustive enumeration.
//!
//! Expressions are equivalent iff they evaluate to the same value under every
//! assignment of their *combined* variables: a variable that occurs in only
//! one of them still ranges over both truth values.
//!
//! ```
//! use truth_table::equiv::are_equivalent;
//! use truth_table::expr::Expr;
//!
//! let f = Expr::implies("A", "B");
//! let g = Expr::or(Expr::not("A"), "B");
//! assert!(are_equivalent(&[f, g]).unwrap());
//!
//! let f = Expr::and("A", "C");
//! let g = Expr::or("A", "C");
//! assert!(!are_equivalent(&[f, g]).unwrap());
//! ```

use log::debug;

use crate::enumerate::enumerate;
use crate::env::Env;
use crate::error::Result;
use crate::expr::Expr;
use crate::types::VarSet;

/// An assignment on which a list of expressions disagree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Counterexample {
    pub env: Env,
    /// Value of each expression under `env`, in input order.
    pub results: Vec<bool>,
}

/// Checks whether all `exprs` are pairwise logically equivalent.
///
/// Empty and singleton lists are trivially equivalent.
pub fn are_equivalent(exprs: &[Expr]) -> Result<bool> {
    let refs: Vec<&Expr> = exprs.iter().collect();
    are_equivalent_refs(&refs)
}

pub(crate) fn are_equivalent_refs(exprs: &[&Expr]) -> Result<bool> {
    Ok(counterexample_refs(exprs)?.is_none())
}

/// Returns the first assignment (in enumeration order) on which `exprs`
/// disagree, or `None` if they are equivalent.
pub fn find_counterexample(exprs: &[Expr]) -> Result<Option<Counterexample>> {
    let refs: Vec<&Expr> = exprs.iter().collect();
    counterexample_refs(&refs)
}

fn counterexample_refs(exprs: &[&Expr]) -> Result<Option<Counterexample>> {
    if exprs.len() < 2 {
        return Ok(None);
    }

    let vars = combined_variables(exprs);
    debug!("equivalence: {} expressions over {} variables", exprs.len(), vars.len());

    for env in enumerate(&vars)? {
        let results = exprs.iter().map(|expr| expr.eval(&env)).collect::<Result<Vec<bool>>>()?;
        if results.iter().any(|&r| r != results[0]) {
            debug!("equivalence: disagreement on {}: {:?}", env, results);
            return Ok(Some(Counterexample { env, results }));
        }
    }

    Ok(None)
}

fn combined_variables(exprs: &[&Expr]) -> VarSet {
    let mut vars = VarSet::new();
    for expr in exprs {
        expr.collect_variables(&mut vars);
    }
    vars
}

/// Number of assignments of the expression's own variables that satisfy it.
pub fn count_models(expr: &Expr) -> Result<u64> {
    let vars = expr.variables();
    debug!("count_models: {} variables", vars.len());
    let mut count = 0;
    for env in enumerate(&vars)? {
        if expr.eval(&env)? {
            count += 1;
        }
    }
    Ok(count)
}

/// Returns the first satisfying assignment, if any.
pub fn find_model(expr: &Expr) -> Result<Option<Env>> {
    for env in enumerate(&expr.variables())? {
        if expr.eval(&env)? {
            return Ok(Some(env));
        }
    }
    Ok(None)
}

pub fn is_satisfiable(expr: &Expr) -> Result<bool> {
    Ok(find_model(expr)?.is_some())
}

/// True iff the expression holds under every assignment.
pub fn is_tautology(expr: &Expr) -> Result<bool> {
    Ok(!is_satisfiable(&Expr::not(expr))?)
}

/// True iff no assignment satisfies the expression.
pub fn is_contradiction(expr: &Expr) -> Result<bool> {
    Ok(!is_satisfiable(expr)?)
}
