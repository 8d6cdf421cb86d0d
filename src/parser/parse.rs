//! Parse entry point
//!
//! [`Program::parse`] runs the whole front end: normalize the raw text,
//! build the bracket index, and keep both together so the engine never sees
//! a program whose brackets do not match.

use super::brackets::{BracketIndex, Family};
use super::normalize::normalize;
use thiserror::Error;

/// Parse errors. All of them reject the program before anything executes.
///
/// Positions are indices into the canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unmatched opener '{}' at position {position}", .family.opener())]
    UnmatchedOpener { family: Family, position: usize },

    #[error("Unmatched closer '{}' at position {position}", .family.closer())]
    UnmatchedCloser { family: Family, position: usize },

    #[error(
        "Bracket family mismatch at position {position}: '{}' closes '{}' opened at position {opener_position}",
        .closer.closer(),
        .opener.opener()
    )]
    FamilyMismatch {
        opener: Family,
        opener_position: usize,
        closer: Family,
        position: usize,
    },
}

impl ParseError {
    /// Position of the offending bracket
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnmatchedOpener { position, .. }
            | ParseError::UnmatchedCloser { position, .. }
            | ParseError::FamilyMismatch { position, .. } => *position,
        }
    }
}

/// A validated Loom program: canonical text plus its bracket index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    text: String,
    brackets: BracketIndex,
}

impl Program {
    /// Normalize `source` and validate its bracket structure
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let text = normalize(source);
        let brackets = BracketIndex::build(&text)?;
        tracing::debug!(
            source_len = source.len(),
            canonical_len = text.len(),
            loops = brackets.pair_count(),
            "parsed program"
        );
        Ok(Program { text, brackets })
    }

    /// The canonical instruction text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn brackets(&self) -> &BracketIndex {
        &self.brackets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_canonical_text() {
        let program = Program::parse("'copy' +31 [>+<-] > x").unwrap();
        assert_eq!(program.text(), "+31[>+<-]>x");
        assert_eq!(program.brackets().partner(3), Some(8));
        assert_eq!(program.len(), 11);
    }

    #[test]
    fn test_empty_program() {
        let program = Program::parse("hi, all").unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn test_brackets_inside_comments_are_ignored() {
        let program = Program::parse("'[' +x").unwrap();
        assert_eq!(program.text(), "+x");
    }

    #[test]
    fn test_error_messages() {
        let err = Program::parse("[+").unwrap_err();
        assert_eq!(err.to_string(), "Unmatched opener '[' at position 0");
        assert_eq!(err.position(), 0);

        let err = Program::parse("+]").unwrap_err();
        assert_eq!(err.to_string(), "Unmatched closer ']' at position 1");

        let err = Program::parse("[+}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bracket family mismatch at position 2: '}' closes '[' opened at position 0"
        );
    }
}
