//! Display sink contract
//!
//! The engine never draws anything itself. It talks to a [`DisplaySink`]:
//! - [`DisplaySink::commit`] receives a full screen snapshot after every `x`
//! - [`DisplaySink::await_quit`] blocks after a successful run until the user leaves
//! - [`DisplaySink::on_error`] receives a structured report of a fatal error
//!
//! Colors belong to the sink. The engine deals in cell values only, and
//! [`palette`] maps them to RGB for whichever sink needs it.
//!
//! Two sinks ship with the crate: [`headless::RecordingDisplay`] for tests
//! and batch runs, and the ratatui canvas in [`crate::ui`].

pub mod headless;
pub mod palette;

use crate::interpreter::engine::Breakpoint;
use crate::memory::grid::Grid;
use std::fmt;
use thiserror::Error;

/// Failures raised by a display sink. Always fatal to the run.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Display unavailable: {0}")]
    Unavailable(String),

    #[error("Display I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Category of a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnmatchedOpener,
    UnmatchedCloser,
    FamilyMismatch,
    UnexpectedCharacter,
    StepLimitExceeded,
    DisplayUnavailable,
    ProgramUnreadable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::UnmatchedOpener => "unmatched opener",
            ErrorKind::UnmatchedCloser => "unmatched closer",
            ErrorKind::FamilyMismatch => "bracket family mismatch",
            ErrorKind::UnexpectedCharacter => "unexpected character",
            ErrorKind::StepLimitExceeded => "step limit exceeded",
            ErrorKind::DisplayUnavailable => "display unavailable",
            ErrorKind::ProgramUnreadable => "program unreadable",
        };
        f.write_str(label)
    }
}

/// Structured description of a fatal error, handed to [`DisplaySink::on_error`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    /// Position in canonical text, when the error has one
    pub position: Option<usize>,
    pub detail: String,
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{} at {}: {}", self.kind, position, self.detail),
            None => write!(f, "{}: {}", self.kind, self.detail),
        }
    }
}

/// Where committed frames go
pub trait DisplaySink {
    /// Accept a full 32×32 screen snapshot and present it
    fn commit(&mut self, frame: &Grid) -> Result<(), DisplayError>;

    /// Block until the user wants to exit
    fn await_quit(&mut self) -> Result<(), DisplayError>;

    /// Receive a fatal error report before the host tears down
    fn on_error(&mut self, report: &ErrorReport);

    /// Receive a `*` diagnostic report
    fn breakpoint(&mut self, _report: &Breakpoint) {}

    /// Whether the user has asked to quit while the program is still running.
    ///
    /// Polled by the engine between instructions.
    fn quit_requested(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = ErrorReport {
            kind: ErrorKind::UnmatchedOpener,
            position: Some(4),
            detail: "Unmatched opener '[' at position 4".to_string(),
        };
        assert_eq!(
            report.to_string(),
            "unmatched opener at 4: Unmatched opener '[' at position 4"
        );

        let report = ErrorReport {
            kind: ErrorKind::DisplayUnavailable,
            position: None,
            detail: "no tty".to_string(),
        };
        assert_eq!(report.to_string(), "display unavailable: no tty");
    }
}
