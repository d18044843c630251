//! # truth-table: propositional logic by brute force
//!
//! **`truth-table`** models propositional expressions over named boolean
//! variables, evaluates them under explicit assignments, renders truth tables
//! and checks logical equivalence by exhaustive enumeration.
//!
//! ## Key Features
//!
//! - **Immutable expression trees**: an [`Expr`][crate::expr::Expr] is built by composition and never mutated.
//!   Variables carry no value; every evaluation receives its own [`Env`][crate::env::Env].
//! - **Nine connectives**: Not, And, Or, Nand, Nor, Xor, SetDifference, SymmetricDifference, Implies.
//! - **Normalization**: [`Expr::normalize`][crate::expr::Expr::normalize] rewrites any tree into And/Or/Not only.
//! - **Truth tables**: [`TruthTable`][crate::table::TruthTable] over the union of the expressions' variables.
//! - **Equivalence**: [`are_equivalent`][crate::equiv::are_equivalent] checks agreement on every assignment.
//!
//! Enumeration visits `2^k` assignments for `k` variables, so everything here
//! is exponential in the number of distinct variables.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::equiv::are_equivalent;
//! use truth_table::expr::Expr;
//! use truth_table::table::build_table;
//!
//! let a = Expr::var("A");
//! let b = Expr::var("B");
//!
//! // (A ⇒ B) is equivalent to (¬A ∨ B)
//! let f = Expr::implies(&a, &b);
//! let g = !&a | &b;
//! assert!(are_equivalent(&[f.clone(), g.clone()]).unwrap());
//!
//! let table = build_table(&[f, g]).unwrap();
//! assert_eq!(
//!     table,
//!     "| A | B | (A ⇒ B) | (¬A ∨ B) |\n\
//!      |:---:|:---:|:---:|:---:|\n\
//!      | T | T | T | T |\n\
//!      | T | F | F | F |\n\
//!      | F | T | T | T |\n\
//!      | F | F | T | T |"
//! );
//! ```

pub mod enumerate;
pub mod env;
pub mod equiv;
pub mod error;
pub mod expr;
pub mod ops;
pub mod table;
pub mod types;
