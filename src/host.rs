//! Host shim: obtain program text and wire the engine to a display
//!
//! [`run_source`] is the whole life of a run: parse, execute, and either wait
//! for the user to quit or hand a structured [`ErrorReport`] to the display.

use crate::display::{DisplaySink, ErrorKind, ErrorReport};
use crate::interpreter::config::ExecutionConfig;
use crate::interpreter::engine::{Interpreter, Outcome};
use crate::interpreter::errors::RuntimeError;
use crate::memory::grid::Grid;
use crate::parser::{ParseError, Program};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Any fatal error in a run
#[derive(Debug, Error)]
pub enum LoomError {
    #[error("Cannot read program '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl LoomError {
    /// Structured form of this error for [`DisplaySink::on_error`]
    pub fn report(&self) -> ErrorReport {
        let (kind, position) = match self {
            LoomError::Read { .. } => (ErrorKind::ProgramUnreadable, None),
            LoomError::Parse(err) => {
                let kind = match err {
                    ParseError::UnmatchedOpener { .. } => ErrorKind::UnmatchedOpener,
                    ParseError::UnmatchedCloser { .. } => ErrorKind::UnmatchedCloser,
                    ParseError::FamilyMismatch { .. } => ErrorKind::FamilyMismatch,
                };
                (kind, Some(err.position()))
            }
            LoomError::Runtime(err) => (err.kind(), err.position()),
        };

        ErrorReport {
            kind,
            position,
            detail: match self {
                LoomError::Parse(err) => err.to_string(),
                LoomError::Runtime(err) => err.to_string(),
                LoomError::Read { .. } => self.to_string(),
            },
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: Outcome,
    /// Screen contents when execution stopped
    pub screen: Grid,
}

/// Program text for `input`: the contents of the file it names, or `input` itself.
///
/// Loom programs are written in a tiny alphabet, so a string that does not
/// name an existing file is taken as program text.
pub fn load_program(input: &str) -> Result<String, LoomError> {
    let path = Path::new(input);
    if !path.is_file() {
        if looks_like_path(input) {
            tracing::warn!("no program file at '{}', running it as program text", input);
        } else {
            tracing::debug!("'{}' is not a file, treating it as program text", input);
        }
        return Ok(input.to_string());
    }

    fs::read_to_string(path).map_err(|source| LoomError::Read {
        path: input.to_string(),
        source,
    })
}

/// Whether `input` was probably meant as a file path
fn looks_like_path(input: &str) -> bool {
    input.contains(std::path::MAIN_SEPARATOR) || input.contains('/') || input.ends_with(".lm")
}

/// Parse and execute `source` against `sink`.
///
/// On success the sink's quit wait runs before returning, unless the user
/// already quit mid-run. On failure the sink receives an [`ErrorReport`]
/// and the error is returned for the caller to exit with.
pub fn run_source(
    source: &str,
    config: ExecutionConfig,
    sink: &mut dyn DisplaySink,
) -> Result<RunSummary, LoomError> {
    let result = execute(source, config, sink).and_then(|summary| {
        if matches!(summary.outcome, Outcome::Halted { .. }) {
            sink.await_quit().map_err(RuntimeError::from)?;
        }
        Ok(summary)
    });

    match result {
        Ok(summary) => Ok(summary),
        Err(err) => {
            let report = err.report();
            tracing::error!(kind = %report.kind, position = ?report.position, "{}", report.detail);
            sink.on_error(&report);
            Err(err)
        }
    }
}

fn execute(
    source: &str,
    config: ExecutionConfig,
    sink: &mut dyn DisplaySink,
) -> Result<RunSummary, LoomError> {
    let program = Program::parse(source)?;
    let mut interpreter = Interpreter::new(program, config);
    let outcome = interpreter.run(sink)?;
    Ok(RunSummary {
        outcome,
        screen: *interpreter.screen(),
    })
}

/// Render `grid` as 32 lines of space-separated decimal cell values
pub fn format_grid(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:2}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Canonical text of `source` if its brackets are well formed
pub fn canonical_text(source: &str) -> Result<String, LoomError> {
    Ok(Program::parse(source)?.text().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::headless::RecordingDisplay;

    #[test]
    fn test_literal_program_text() {
        assert_eq!(load_program("+8x").unwrap(), "+8x");
    }

    #[test]
    fn test_missing_file_runs_as_text() {
        assert_eq!(load_program("missing/prog.lm").unwrap(), "missing/prog.lm");
        assert!(looks_like_path("missing/prog.lm"));
        assert!(looks_like_path("prog.lm"));
        assert!(!looks_like_path("+8x>+9x"));
        assert!(!looks_like_path("+31[>+<-]>x"));
    }

    #[test]
    fn test_successful_run_waits_for_quit() {
        let mut display = RecordingDisplay::new();
        let summary = run_source("+x", ExecutionConfig::default(), &mut display).unwrap();
        assert_eq!(summary.screen.get(0, 0), 1);
        assert!(display.awaited_quit());
        assert!(display.errors().is_empty());
    }

    #[test]
    fn test_interrupted_run_skips_quit_wait() {
        let mut display = RecordingDisplay::new().quit_after(1);
        let summary = run_source("+x>x", ExecutionConfig::default(), &mut display).unwrap();
        assert!(matches!(summary.outcome, Outcome::Interrupted { .. }));
        assert!(!display.awaited_quit());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let mut display = RecordingDisplay::new();
        let err = run_source("[+", ExecutionConfig::default(), &mut display).unwrap_err();
        assert!(matches!(err, LoomError::Parse(_)));

        let reports = display.errors();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ErrorKind::UnmatchedOpener);
        assert_eq!(reports[0].position, Some(0));
        assert_eq!(display.commits(), 0);
        assert!(!display.awaited_quit());
    }

    #[test]
    fn test_runtime_error_is_reported() {
        let mut display = RecordingDisplay::new();
        let config = ExecutionConfig::default().with_step_limit(5);
        let err = run_source("+[]", config, &mut display).unwrap_err();
        assert!(matches!(err, LoomError::Runtime(_)));
        assert_eq!(display.errors()[0].kind, ErrorKind::StepLimitExceeded);
    }

    #[test]
    fn test_format_grid() {
        let text = format_grid(&Grid::initial_screen());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 32);
        assert!(lines[0].starts_with("12 12 12"));
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(canonical_text("'hi' + 3 x").unwrap(), "+x");
        assert!(canonical_text("(+").is_err());
    }
}
