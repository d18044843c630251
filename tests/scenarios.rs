use test_log::test;

use truth_table::env::Env;
use truth_table::equiv::{are_equivalent, find_counterexample};
use truth_table::error::Error;
use truth_table::expr::Expr;
use truth_table::table::{build_table, TruthTable};
use truth_table::types::Var;

#[test]
fn test_implies_vs_or_not() {
    let f = Expr::implies("A", "B");
    let g = Expr::or(Expr::not("A"), "B");
    assert!(are_equivalent(&[f, g]).unwrap());
}

#[test]
fn test_and_vs_or() {
    let f = Expr::and("A", "C");
    let g = Expr::or("A", "C");
    assert!(!are_equivalent(&[f.clone(), g.clone()]).unwrap());

    let cex = find_counterexample(&[f, g]).unwrap().unwrap();
    assert_eq!(cex.env.get(&Var::new("A")), Some(true));
    assert_eq!(cex.env.get(&Var::new("C")), Some(false));
}

#[test]
fn test_table_three_variables() {
    let f = Expr::and(Expr::or("A", "C"), Expr::not("B"));
    let text = build_table(&[f]).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2 + 8);
    assert_eq!(lines[0], "| A | C | B | ((A ∨ C) ∧ ¬B) |");
    assert_eq!(lines[1], "|:---:|:---:|:---:|:---:|");

    for line in &lines[2..] {
        let cells: Vec<bool> = line
            .trim_matches('|')
            .split('|')
            .map(|cell| match cell.trim() {
                "T" => true,
                "F" => false,
                other => panic!("unexpected cell {:?}", other),
            })
            .collect();
        assert_eq!(cells.len(), 4);
        let (a, c, b, result) = (cells[0], cells[1], cells[2], cells[3]);
        assert_eq!(result, (a || c) && !b, "row {}", line);
    }

    let distinct: std::collections::HashSet<&&str> = lines[2..].iter().collect();
    assert_eq!(distinct.len(), 8);
}

#[test]
fn test_eval_unbound_variable() {
    let f = Expr::and("A", "B");
    let env = Env::new().with("A", true);
    assert_eq!(f.eval(&env), Err(Error::UnboundVariable(Var::new("B"))));
}

#[test]
fn test_normalized_forms_in_one_table() {
    let exprs = [
        Expr::xor("A", "B"),
        Expr::xor("A", "B").normalize(),
        Expr::symmetric_difference("A", "B").normalize(),
    ];
    let table = TruthTable::build(&exprs).unwrap();
    assert_eq!(table.vars().len(), 2);
    for row in table.rows() {
        assert_eq!(row.results[0], row.results[1]);
        assert_eq!(row.results[0], row.results[2]);
    }
}

#[test]
fn test_classic_laws() {
    let laws = [
        // Contraposition
        (Expr::implies("A", "B"), Expr::implies(Expr::not("B"), Expr::not("A"))),
        // Distributivity
        (
            Expr::and("A", Expr::or("B", "C")),
            Expr::or(Expr::and("A", "B"), Expr::and("A", "C")),
        ),
        // Absorption
        (Expr::or("A", Expr::and("A", "B")), Expr::var("A")),
        // Double negation
        (Expr::not(Expr::not("A")), Expr::var("A")),
        // Set difference via implication
        (Expr::set_difference("A", "B"), Expr::not(Expr::implies("A", "B"))),
        // Exportation
        (
            Expr::implies(Expr::and("A", "B"), "C"),
            Expr::implies("A", Expr::implies("B", "C")),
        ),
    ];
    for (lhs, rhs) in laws {
        assert!(lhs.equivalent(&rhs).unwrap(), "{} should be equivalent to {}", lhs, rhs);
    }
}

#[test]
fn test_not_laws() {
    // Implication is not symmetric.
    let f = Expr::implies("A", "B");
    let g = Expr::implies("B", "A");
    assert!(!f.equivalent(&g).unwrap());

    // Xor is not Or.
    assert!(!Expr::xor("A", "B").equivalent(&Expr::or("A", "B")).unwrap());
}
