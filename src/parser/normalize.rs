//! Normalizer (cleaner) for Loom source text
//!
//! Converts raw program text into canonical text: the reserved characters in
//! source order, with the digit run that immediately follows a repeatable
//! operator kept attached to it. Whitespace, quoted comments, and every other
//! character are dropped. Nothing is rejected here; bracket structure is
//! checked afterwards by [`super::brackets`].

/// Comment delimiter: `'like this'`
pub const QUOTE: char = '\'';

/// Operators that may carry a repeat count
pub const REPEATABLE: [char; 6] = ['>', '<', '^', 'v', '+', '-'];

/// Reserved characters that never carry a repeat count
pub const NON_REPEATABLE: [char; 11] = ['?', 'o', 'x', '.', '*', '[', ']', '{', '}', '(', ')'];

/// Check whether `ch` is one of `> < ^ v + -`
pub fn is_repeatable(ch: char) -> bool {
    REPEATABLE.contains(&ch)
}

/// Check whether `ch` belongs to the reserved instruction alphabet
pub fn is_reserved(ch: char) -> bool {
    is_repeatable(ch) || NON_REPEATABLE.contains(&ch)
}

/// Single-pass, left-to-right scanner over raw source text
pub struct Normalizer {
    input: Vec<char>,
    position: usize,
}

impl Normalizer {
    pub fn new(source: &str) -> Self {
        Normalizer {
            input: source.chars().collect(),
            position: 0,
        }
    }

    /// Produce the canonical text for the whole input
    pub fn normalize(&mut self) -> String {
        let mut canonical = String::with_capacity(self.input.len());

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if ch == QUOTE {
                // An unterminated quote only drops itself; scanning resumes after it
                if let Some(close) = self.find_from(self.position + 1, QUOTE) {
                    self.position = close + 1;
                } else {
                    self.advance();
                }
                continue;
            }

            if is_repeatable(ch) {
                canonical.push(ch);
                self.advance();
                while let Some(digit) = self.peek().filter(char::is_ascii_digit) {
                    canonical.push(digit);
                    self.advance();
                }
                continue;
            }

            if is_reserved(ch) {
                canonical.push(ch);
            }
            self.advance();
        }

        canonical
    }

    /// Index of the next `target` at or after `start`
    fn find_from(&self, start: usize, target: char) -> Option<usize> {
        self.input
            .get(start..)?
            .iter()
            .position(|&c| c == target)
            .map(|offset| start + offset)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

/// Normalize `source` into canonical program text
pub fn normalize(source: &str) -> String {
    Normalizer::new(source).normalize()
}
