//! Propositional expression trees.
//!
//! An [`Expr`] is a closed, finite tree built by composition: leaves are
//! [`Var`]iables, internal nodes are negation or one of the binary
//! [`Connective`]s. Trees are never mutated after construction.
//!
//! # Example
//!
//! ```
//! use truth_table::env::Env;
//! use truth_table::expr::Expr;
//!
//! // (A ⇒ B)
//! let f = Expr::implies("A", "B");
//! assert_eq!(f.to_string(), "(A ⇒ B)");
//!
//! let env = Env::new().with("A", true).with("B", false);
//! assert_eq!(f.eval(&env), Ok(false));
//!
//! // Normalization rewrites into AND/OR/NOT only.
//! let g = f.normalize();
//! assert_eq!(g.to_string(), "(¬A ∨ B)");
//! assert!(g.is_canonical());
//! ```
//!
//! # Limits
//!
//! Evaluation, normalization, rendering and dropping all recurse over the
//! tree, so stack usage grows with [`Expr::depth`]. Extremely deep trees (for
//! example a chain of hundreds of thousands of negations) overflow the stack.

use std::fmt;

use crate::env::Env;
use crate::error::Result;
use crate::types::{Var, VarSet};

/// Rendering symbol for negation (prefix).
pub const NOT_SYMBOL: &str = "¬";

/// A binary connective.
///
/// Negation, the only unary connective, is represented by [`Expr::Not`] directly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    SetDifference,
    SymmetricDifference,
    Implies,
}

impl Connective {
    pub const ALL: [Connective; 8] = [
        Connective::And,
        Connective::Or,
        Connective::Nand,
        Connective::Nor,
        Connective::Xor,
        Connective::SetDifference,
        Connective::SymmetricDifference,
        Connective::Implies,
    ];

    /// Infix symbol used when rendering, including the surrounding spaces.
    pub fn symbol(self) -> &'static str {
        match self {
            Connective::And => " ∧ ",
            Connective::Or => " ∨ ",
            Connective::Nand => " ↑ ",
            Connective::Nor => " ↓ ",
            Connective::Xor => " + ",
            Connective::SetDifference => " \\ ",
            Connective::SymmetricDifference => " ⊖ ",
            Connective::Implies => " ⇒ ",
        }
    }

    /// Truth function of the connective.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Connective::And => a && b,
            Connective::Or => a || b,
            Connective::Nand => !(a && b),
            Connective::Nor => !(a || b),
            Connective::Xor => a ^ b,
            Connective::SetDifference => a && !b,
            Connective::SymmetricDifference => (a && !b) || (b && !a),
            Connective::Implies => !a || b,
        }
    }

    /// Whether the connective belongs to the canonical AND/OR basis.
    pub fn is_canonical(self) -> bool {
        matches!(self, Connective::And | Connective::Or)
    }
}

/// A propositional expression.
///
/// The derived `PartialEq` is *structural* equality. Logical equivalence is a
/// separate question answered by [`Expr::equivalent`] and
/// [`are_equivalent`][crate::equiv::are_equivalent].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(Var),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Nand(Box<Expr>, Box<Expr>),
    Nor(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    SetDifference(Box<Expr>, Box<Expr>),
    SymmetricDifference(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
}

/// Borrowed, connective-level view of a single [`Expr`] node.
#[derive(Debug, Copy, Clone)]
pub enum Node<'a> {
    Var(&'a Var),
    Not(&'a Expr),
    Binary(Connective, &'a Expr, &'a Expr),
}

impl Expr {
    pub fn var(var: impl Into<Var>) -> Self {
        Expr::Var(var.into())
    }

    pub fn not(operand: impl Into<Expr>) -> Self {
        Expr::Not(Box::new(operand.into()))
    }

    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary(Connective::And, lhs, rhs)
    }

    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary(Connective::Or, lhs, rhs)
    }

    pub fn nand(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary(Connective::Nand, lhs, rhs)
    }

    pub fn nor(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary(Connective::Nor, lhs, rhs)
    }

    pub fn xor(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary(Connective::Xor, lhs, rhs)
    }

    pub fn set_difference(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary(Connective::SetDifference, lhs, rhs)
    }

    pub fn symmetric_difference(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary(Connective::SymmetricDifference, lhs, rhs)
    }

    pub fn implies(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::binary(Connective::Implies, lhs, rhs)
    }

    /// Builds the node for an arbitrary binary connective.
    pub fn binary(op: Connective, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        let a = Box::new(lhs.into());
        let b = Box::new(rhs.into());
        match op {
            Connective::And => Expr::And(a, b),
            Connective::Or => Expr::Or(a, b),
            Connective::Nand => Expr::Nand(a, b),
            Connective::Nor => Expr::Nor(a, b),
            Connective::Xor => Expr::Xor(a, b),
            Connective::SetDifference => Expr::SetDifference(a, b),
            Connective::SymmetricDifference => Expr::SymmetricDifference(a, b),
            Connective::Implies => Expr::Implies(a, b),
        }
    }

    /// Returns the connective-level view of this node.
    pub fn node(&self) -> Node<'_> {
        match self {
            Expr::Var(var) => Node::Var(var),
            Expr::Not(a) => Node::Not(a),
            Expr::And(a, b) => Node::Binary(Connective::And, a, b),
            Expr::Or(a, b) => Node::Binary(Connective::Or, a, b),
            Expr::Nand(a, b) => Node::Binary(Connective::Nand, a, b),
            Expr::Nor(a, b) => Node::Binary(Connective::Nor, a, b),
            Expr::Xor(a, b) => Node::Binary(Connective::Xor, a, b),
            Expr::SetDifference(a, b) => Node::Binary(Connective::SetDifference, a, b),
            Expr::SymmetricDifference(a, b) => Node::Binary(Connective::SymmetricDifference, a, b),
            Expr::Implies(a, b) => Node::Binary(Connective::Implies, a, b),
        }
    }

    /// Distinct variables referenced by this expression, in first-seen
    /// (left-to-right) order.
    pub fn variables(&self) -> VarSet {
        let mut vars = VarSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Adds the variables of this expression to `vars`, keeping first-seen order.
    pub fn collect_variables(&self, vars: &mut VarSet) {
        match self.node() {
            Node::Var(var) => {
                vars.insert(var.clone());
            }
            Node::Not(a) => a.collect_variables(vars),
            Node::Binary(_, a, b) => {
                a.collect_variables(vars);
                b.collect_variables(vars);
            }
        }
    }

    /// Evaluates the expression under `env`.
    ///
    /// Both operands of a binary node are always evaluated, so a variable
    /// missing from `env` is reported as [`UnboundVariable`] no matter what
    /// the other operand evaluates to.
    ///
    /// [`UnboundVariable`]: crate::error::Error::UnboundVariable
    pub fn eval(&self, env: &Env) -> Result<bool> {
        match self.node() {
            Node::Var(var) => env.lookup(var),
            Node::Not(a) => Ok(!a.eval(env)?),
            Node::Binary(op, a, b) => {
                let a = a.eval(env)?;
                let b = b.eval(env)?;
                Ok(op.apply(a, b))
            }
        }
    }

    /// Rewrites the expression using only And, Or and Not.
    ///
    /// Children are normalized first, so no non-canonical connective remains
    /// anywhere in the result. Canonical nodes are rebuilt unchanged.
    pub fn normalize(&self) -> Expr {
        match self.node() {
            Node::Var(_) => self.clone(),
            Node::Not(a) => Expr::not(a.normalize()),
            Node::Binary(op, a, b) => {
                let a = a.normalize();
                let b = b.normalize();
                match op {
                    Connective::And => Expr::and(a, b),
                    Connective::Or => Expr::or(a, b),
                    Connective::Nand => Expr::not(Expr::and(a, b)),
                    Connective::Nor => Expr::and(Expr::not(a), Expr::not(b)),
                    Connective::Xor => Expr::and(Expr::or(a.clone(), b.clone()), Expr::not(Expr::and(a, b))),
                    Connective::SetDifference => Expr::and(a, Expr::not(b)),
                    Connective::SymmetricDifference => Expr::or(
                        Expr::and(a.clone(), Expr::not(b.clone())),
                        Expr::and(b, Expr::not(a)),
                    ),
                    Connective::Implies => Expr::or(Expr::not(a), b),
                }
            }
        }
    }

    /// Whether the whole tree uses only And, Or and Not.
    pub fn is_canonical(&self) -> bool {
        match self.node() {
            Node::Var(_) => true,
            Node::Not(a) => a.is_canonical(),
            Node::Binary(op, a, b) => op.is_canonical() && a.is_canonical() && b.is_canonical(),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self.node() {
            Node::Var(_) => 1,
            Node::Not(a) => 1 + a.size(),
            Node::Binary(_, a, b) => 1 + a.size() + b.size(),
        }
    }

    /// Depth of the tree (0 for a variable).
    pub fn depth(&self) -> usize {
        match self.node() {
            Node::Var(_) => 0,
            Node::Not(a) => 1 + a.depth(),
            Node::Binary(_, a, b) => 1 + a.depth().max(b.depth()),
        }
    }

    /// Checks whether `self` and `other` agree on every assignment of their
    /// combined variables.
    pub fn equivalent(&self, other: &Expr) -> Result<bool> {
        crate::equiv::are_equivalent_refs(&[self, other])
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::var(name)
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Var(var) => write!(f, "{}", var),
            Node::Not(a) => write!(f, "{}{}", NOT_SYMBOL, a),
            Node::Binary(op, a, b) => write!(f, "({}{}{})", a, op.symbol(), b),
        }
    }
}
