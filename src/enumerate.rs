//! Exhaustive enumeration of assignments.
//!
//! [`enumerate`] produces every total assignment of a set of variables exactly
//! once, as a lazy [`Assignments`] iterator.
//!
//! # Order
//!
//! Variables keep the order of the given [`VarSet`] (first-seen order), and
//! the first variable is the most significant one. Row `i` assigns variable
//! `j` (of `k`) the value `true` iff bit `k - 1 - j` of `i` is zero, so the
//! first assignment is all-true and the last one all-false:
//!
//! ```text
//! A B
//! T T
//! T F
//! F T
//! F F
//! ```
//!
//! # Cost
//!
//! The number of assignments is `2^k` for `k` variables, so enumeration is
//! exponential. At most [`MAX_VARIABLES`] variables are accepted; callers are
//! expected to keep `k` far smaller than that.

use log::trace;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::types::{Var, VarSet};

/// Largest number of variables [`enumerate`] accepts (the row counter is a `u64`).
pub const MAX_VARIABLES: usize = 63;

/// Returns an iterator over all `2^k` assignments of the given variables.
///
/// For an empty set, yields exactly one (empty) assignment.
///
/// ```
/// use truth_table::enumerate::enumerate;
/// use truth_table::types::{Var, VarSet};
///
/// let vars: VarSet = [Var::new("A"), Var::new("B")].into_iter().collect();
/// let envs: Vec<_> = enumerate(&vars).unwrap().collect();
/// assert_eq!(envs.len(), 4);
/// assert_eq!(envs[0].to_string(), "{A=T, B=T}");
/// assert_eq!(envs[3].to_string(), "{A=F, B=F}");
/// ```
pub fn enumerate(vars: &VarSet) -> Result<Assignments> {
    Assignments::new(vars)
}

/// Iterator over all assignments of a fixed list of variables.
///
/// Created by [`enumerate`]. The iterator is restartable: cloning it (or
/// calling [`Assignments::restart`]) gives a fresh pass in the same order.
#[derive(Debug, Clone)]
pub struct Assignments {
    vars: Vec<Var>,
    /// Index of the next row to produce.
    next: u64,
    /// Total number of rows, `2^k`.
    total: u64,
}

impl Assignments {
    /// Creates an enumerator over the variables of `vars`, in set order.
    pub fn new(vars: &VarSet) -> Result<Self> {
        let vars = vars.as_slice().to_vec();
        if vars.len() > MAX_VARIABLES {
            return Err(Error::TooManyVariables {
                count: vars.len(),
                max: MAX_VARIABLES,
            });
        }
        let total = 1u64 << vars.len();
        Ok(Self { vars, next: 0, total })
    }

    /// Variables being enumerated, most significant first.
    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    /// Total number of assignments, `2^k`.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Resets the iterator to the first assignment.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    /// Truth values of row `index`, in variable order.
    ///
    /// Returns `None` if `index >= total()`.
    pub fn row_values(&self, index: u64) -> Option<Vec<bool>> {
        if index >= self.total {
            return None;
        }
        let k = self.vars.len();
        Some((0..k).map(|j| (index >> (k - 1 - j)) & 1 == 0).collect())
    }

    /// The assignment for row `index`, or `None` if out of range.
    pub fn assignment(&self, index: u64) -> Option<Env> {
        let values = self.row_values(index)?;
        Some(self.vars.iter().cloned().zip(values).collect())
    }
}

impl Iterator for Assignments {
    type Item = Env;

    fn next(&mut self) -> Option<Self::Item> {
        let env = self.assignment(self.next)?;
        trace!("assignment #{} = {}", self.next, env);
        self.next += 1;
        Some(env)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n as u64).min(self.total);
        self.next()
    }
}
