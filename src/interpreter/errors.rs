//! Runtime error types for the Loom interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while a parsed program executes. Bracket problems are caught earlier, by
//! [`crate::parser::ParseError`].
//!
//! All runtime errors are fatal. Wraparound of cells and coordinates is defined
//! behavior and never produces an error.

use crate::display::{DisplayError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A character outside the reserved alphabet reached dispatch.
    ///
    /// Unreachable for programs built by [`crate::parser::Program::parse`].
    #[error("Unexpected character '{ch}' at PC {pc}")]
    UnexpectedCharacter { ch: char, pc: usize },

    /// The configured step limit ran out before the program halted
    #[error("Step limit exceeded: {limit} instructions")]
    StepLimitExceeded { limit: u64 },

    #[error(transparent)]
    Display(#[from] DisplayError),
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
            RuntimeError::StepLimitExceeded { .. } => ErrorKind::StepLimitExceeded,
            RuntimeError::Display(_) => ErrorKind::DisplayUnavailable,
        }
    }

    /// Program counter the error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            RuntimeError::UnexpectedCharacter { pc, .. } => Some(*pc),
            RuntimeError::StepLimitExceeded { .. } | RuntimeError::Display(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_character_display() {
        let err = RuntimeError::UnexpectedCharacter { ch: 'q', pc: 3 };
        assert_eq!(err.to_string(), "Unexpected character 'q' at PC 3");
        assert_eq!(err.kind(), ErrorKind::UnexpectedCharacter);
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn test_display_error_is_transparent() {
        let err = RuntimeError::from(DisplayError::Unavailable("no tty".to_string()));
        assert_eq!(err.to_string(), "Display unavailable: no tty");
        assert_eq!(err.kind(), ErrorKind::DisplayUnavailable);
        assert_eq!(err.position(), None);
    }
}
