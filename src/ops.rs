//! Operator sugar for building expressions.
//!
//! `!a`, `a & b`, `a | b` and `a ^ b` build [`Expr::Not`], [`Expr::And`],
//! [`Expr::Or`] and [`Expr::Xor`] nodes. Other connectives have no operator
//! and are built with the named constructors on [`Expr`].

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::expr::Expr;

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl Not for &Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $ctor:ident) => {
        impl<R: Into<Expr>> $trait<R> for Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Self::Output {
                Expr::$ctor(self, rhs)
            }
        }

        impl<R: Into<Expr>> $trait<R> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: R) -> Self::Output {
                Expr::$ctor(self, rhs)
            }
        }
    };
}

impl_binary_op!(BitAnd, bitand, and);
impl_binary_op!(BitOr, bitor, or);
impl_binary_op!(BitXor, bitxor, xor);

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_not() {
        let a = Expr::var("A");
        assert_eq!(!&a, Expr::not("A"));
        assert_eq!(!a, Expr::not("A"));
    }

    #[test]
    fn test_and() {
        let a = Expr::var("A");
        let b = Expr::var("B");
        assert_eq!(a & b, Expr::and("A", "B"));
    }

    #[test]
    fn test_or() {
        let a = Expr::var("A");
        assert_eq!(&a | "B", Expr::or("A", "B"));
    }

    #[test]
    fn test_xor() {
        let a = Expr::var("A");
        let b = Expr::var("B");
        assert_eq!(&a ^ &b, Expr::xor("A", "B"));
    }

    #[test]
    fn test_mixed() {
        let a = Expr::var("A");
        let b = Expr::var("B");
        let c = Expr::var("C");
        let f = (&a | &c) & !&b;
        assert_eq!(f, Expr::and(Expr::or("A", "C"), Expr::not("B")));
        assert_eq!(f.to_string(), "((A ∨ C) ∧ ¬B)");
    }
}
