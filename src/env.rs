//! Variable assignments.
//!
//! An [`Env`] maps variables to truth values. Every evaluation receives its
//! own `Env`; expressions never store values themselves.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::types::Var;

/// An assignment of truth values to variables.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Env {
    values: BTreeMap<Var, bool>,
}

impl Env {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `value`, returning the previous value if any.
    pub fn insert(&mut self, var: impl Into<Var>, value: bool) -> Option<bool> {
        self.values.insert(var.into(), value)
    }

    /// Builder-style variant of [`insert`][Env::insert].
    ///
    /// ```
    /// use truth_table::env::Env;
    ///
    /// let env = Env::new().with("A", true).with("B", false);
    /// assert_eq!(env.get(&"A".into()), Some(true));
    /// assert_eq!(env.get(&"B".into()), Some(false));
    /// assert_eq!(env.get(&"C".into()), None);
    /// ```
    pub fn with(mut self, var: impl Into<Var>, value: bool) -> Self {
        self.insert(var, value);
        self
    }

    /// Returns the value bound to `var`, if any.
    pub fn get(&self, var: &Var) -> Option<bool> {
        self.values.get(var).copied()
    }

    /// Returns the value bound to `var`, or [`Error::UnboundVariable`].
    pub fn lookup(&self, var: &Var) -> Result<bool> {
        self.get(var).ok_or_else(|| Error::UnboundVariable(var.clone()))
    }

    pub fn contains(&self, var: &Var) -> bool {
        self.values.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the bindings, ordered by variable name.
    pub fn iter(&self) -> impl Iterator<Item = (&Var, bool)> + '_ {
        self.values.iter().map(|(var, &value)| (var, value))
    }
}

impl<V: Into<Var>> FromIterator<(V, bool)> for Env {
    fn from_iter<I: IntoIterator<Item = (V, bool)>>(iter: I) -> Self {
        Env {
            values: iter.into_iter().map(|(var, value)| (var.into(), value)).collect(),
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, if value { "T" } else { "F" })?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_insert_and_get() {
        let mut env = Env::new();
        assert!(env.is_empty());
        assert_eq!(env.insert("A", true), None);
        assert_eq!(env.insert("A", false), Some(true));
        assert_eq!(env.get(&Var::new("A")), Some(false));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_lookup_unbound() {
        let env = Env::new().with("A", true);
        assert_eq!(env.lookup(&Var::new("A")), Ok(true));
        assert_eq!(
            env.lookup(&Var::new("B")),
            Err(Error::UnboundVariable(Var::new("B")))
        );
    }

    #[test]
    fn test_from_iter() {
        let env: Env = [("B", false), ("A", true)].into_iter().collect();
        assert!(env.contains(&Var::new("A")));
        assert!(env.contains(&Var::new("B")));
        assert_eq!(env.to_string(), "{A=T, B=F}");
    }
}
