use thiserror::Error;

use crate::types::Var;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An expression references a variable the environment does not assign.
    #[error("variable '{0}' is not bound in the environment")]
    UnboundVariable(Var),

    /// Exhaustive enumeration over this many variables is not representable.
    #[error("cannot enumerate assignments of {count} variables (at most {max} supported)")]
    TooManyVariables { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_error_messages() {
        let err = Error::UnboundVariable(Var::new("B"));
        assert_eq!(err.to_string(), "variable 'B' is not bound in the environment");

        let err = Error::TooManyVariables { count: 70, max: 63 };
        assert_eq!(
            err.to_string(),
            "cannot enumerate assignments of 70 variables (at most 63 supported)"
        );
    }
}
