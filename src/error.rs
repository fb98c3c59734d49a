//! Error types for iterator construction.
//!
//! Advancing never fails; only the arguments given to constructors and
//! `reset` are validated.

use thiserror::Error;

/// Result type alias for iterator construction.
pub type Result<T> = std::result::Result<T, IterPowError>;

/// Errors raised when an iterator cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterPowError {
    /// The storage width cannot hold one row of shell 1.
    #[error("max_nbasis = {max_nbasis} is smaller than the {nbasis} basis functions of shell 1")]
    BasisWidthTooSmall { max_nbasis: usize, nbasis: usize },

    #[error("shell type {shell_type} exceeds the supported maximum {max}")]
    ShellTypeTooLarge { shell_type: usize, max: usize },

    /// Signed shell type with no meaning (only -1).
    #[error("invalid signed shell type {0}")]
    InvalidShellType(i64),

    /// A C caller passed a null or negative argument.
    #[error("invalid argument from C caller: {0}")]
    InvalidArgument(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IterPowError::BasisWidthTooSmall { max_nbasis: 2, nbasis: 3 };
        assert!(format!("{err}").contains("max_nbasis = 2"));

        let err = IterPowError::ShellTypeTooLarge { shell_type: 20, max: 15 };
        assert!(format!("{err}").contains("20"));

        let err = IterPowError::InvalidShellType(-1);
        assert!(format!("{err}").contains("-1"));
    }
}
