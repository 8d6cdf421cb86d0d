//! Bracket index: static opener ↔ closer matching
//!
//! Loom has three bracket families, `[]`, `{}` and `()`. They behave the same
//! at runtime and exist so authors can make nested loops visually distinct.
//! Each family nests as an ordinary parenthesis language, and a closer must
//! belong to the same family as the innermost live opener, so families can
//! nest inside each other but never interleave.

use super::parse::ParseError;
use rustc_hash::FxHashMap;
use std::fmt;

/// One of the three interchangeable bracket pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Square,
    Curly,
    Round,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Square, Family::Curly, Family::Round];

    pub fn opener(self) -> char {
        match self {
            Family::Square => '[',
            Family::Curly => '{',
            Family::Round => '(',
        }
    }

    pub fn closer(self) -> char {
        match self {
            Family::Square => ']',
            Family::Curly => '}',
            Family::Round => ')',
        }
    }

    /// Family of an opening bracket, if `ch` is one
    pub fn of_opener(ch: char) -> Option<Family> {
        Family::ALL.into_iter().find(|f| f.opener() == ch)
    }

    /// Family of a closing bracket, if `ch` is one
    pub fn of_closer(ch: char) -> Option<Family> {
        Family::ALL.into_iter().find(|f| f.closer() == ch)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.opener(), self.closer())
    }
}

/// Matching positions for every bracket in a canonical program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketIndex {
    partners: FxHashMap<usize, usize>,
}

impl BracketIndex {
    /// Scan canonical `text` once and pair every bracket.
    ///
    /// Positions are indices into the canonical text. Fails on the first
    /// closer with no live opener, on the first closer whose family differs
    /// from the innermost live opener, or, at the end, on the earliest opener
    /// left unmatched.
    pub fn build(text: &str) -> Result<Self, ParseError> {
        let mut partners = FxHashMap::default();
        let mut open: Vec<(Family, usize)> = Vec::new();

        for (position, ch) in text.chars().enumerate() {
            if let Some(family) = Family::of_opener(ch) {
                open.push((family, position));
            } else if let Some(family) = Family::of_closer(ch) {
                match open.pop() {
                    None => return Err(ParseError::UnmatchedCloser { family, position }),
                    Some((opener, opener_position)) if opener != family => {
                        return Err(ParseError::FamilyMismatch {
                            opener,
                            opener_position,
                            closer: family,
                            position,
                        });
                    }
                    Some((_, opener_position)) => {
                        partners.insert(opener_position, position);
                        partners.insert(position, opener_position);
                    }
                }
            }
        }

        if let Some(&(family, position)) = open.first() {
            return Err(ParseError::UnmatchedOpener { family, position });
        }

        Ok(BracketIndex { partners })
    }

    /// Position of the bracket paired with the one at `position`
    pub fn partner(&self, position: usize) -> Option<usize> {
        self.partners.get(&position).copied()
    }

    /// Number of matched pairs
    pub fn pair_count(&self) -> usize {
        self.partners.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_each_family() {
        let index = BracketIndex::build("[+]{-}(>)").unwrap();
        assert_eq!(index.pair_count(), 3);
        assert_eq!(index.partner(0), Some(2));
        assert_eq!(index.partner(2), Some(0));
        assert_eq!(index.partner(3), Some(5));
        assert_eq!(index.partner(6), Some(8));
        assert_eq!(index.partner(1), None);
    }

    #[test]
    fn test_nested_families() {
        let index = BracketIndex::build("[{()}]").unwrap();
        assert_eq!(index.partner(0), Some(5));
        assert_eq!(index.partner(1), Some(4));
        assert_eq!(index.partner(2), Some(3));
    }

    #[test]
    fn test_unmatched_opener_reports_earliest() {
        let err = BracketIndex::build("+[[]").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedOpener {
                family: Family::Square,
                position: 1
            }
        );
    }

    #[test]
    fn test_unmatched_closer() {
        let err = BracketIndex::build("+)").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedCloser {
                family: Family::Round,
                position: 1
            }
        );
    }

    #[test]
    fn test_interleaved_families_rejected() {
        let err = BracketIndex::build("[(])").unwrap_err();
        assert_eq!(
            err,
            ParseError::FamilyMismatch {
                opener: Family::Round,
                opener_position: 1,
                closer: Family::Square,
                position: 2
            }
        );
    }

    #[test]
    fn test_family_lookup() {
        assert_eq!(Family::of_opener('{'), Some(Family::Curly));
        assert_eq!(Family::of_closer('{'), None);
        assert_eq!(Family::of_closer(')'), Some(Family::Round));
        assert_eq!(Family::Square.to_string(), "[]");
    }
}
