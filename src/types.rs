//! Named propositional variables.
//!
//! A [`Var`] is identified by its name alone: two variables with the same name
//! are the same logical variable. Variables never carry a value; values live in
//! an [`Env`][crate::env::Env].
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// A propositional variable, identified by name.
///
/// Cloning is cheap (the name is shared).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(Arc<str>);

impl Var {
    /// Creates a new variable with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Var(name.into())
    }

    /// Returns the name of the variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}

impl From<String> for Var {
    fn from(name: String) -> Self {
        Var::new(name)
    }
}

/// A set of variables that remembers insertion order.
///
/// Duplicates (by name) are ignored, so the iteration order is the order in
/// which each distinct variable was *first* inserted. This order fixes the
/// column order of truth tables and the significance order of enumeration.
#[derive(Debug, Clone, Default)]
pub struct VarSet {
    order: Vec<Var>,
    seen: HashSet<Var>,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a variable. Returns `true` if it was not present before.
    pub fn insert(&mut self, var: Var) -> bool {
        if self.seen.contains(&var) {
            return false;
        }
        self.seen.insert(var.clone());
        self.order.push(var);
        true
    }

    pub fn contains(&self, var: &Var) -> bool {
        self.seen.contains(var)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over the variables in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Var> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[Var] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<Var> {
        self.order
    }
}

impl PartialEq for VarSet {
    /// Two sets are equal when they contain the same variables, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for VarSet {}

impl Extend<Var> for VarSet {
    fn extend<I: IntoIterator<Item = Var>>(&mut self, iter: I) {
        for var in iter {
            self.insert(var);
        }
    }
}

impl FromIterator<Var> for VarSet {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        let mut set = VarSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = &'a Var;
    type IntoIter = std::slice::Iter<'a, Var>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for VarSet {
    type Item = Var;
    type IntoIter = std::vec::IntoIter<Var>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}
