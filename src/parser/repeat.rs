//! Repeat-count scanning for `> < ^ v + -`
//!
//! A repeatable operator absorbs everything after it that is either another
//! copy of the same operator or a decimal digit run:
//!
//! ```text
//! >>>    → 3          1 + 1 + 1
//! >5     → 5          1 + (5 - 1)
//! +3+2   → 5          1 + (3 - 1) + 1 + (2 - 1), the same as +5
//! >3<    → 3          `<` is a different operator and ends the run
//! ```
//!
//! Only the count modulo 32 matters to the engine, so digit runs are reduced
//! as they are read and never overflow.

use crate::interpreter::constants::CELL_MODULUS;

/// Result of scanning a repeatable operator and its attached run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatCount {
    /// Effective count, reduced modulo 32
    pub count: u8,
    /// Index of the last character consumed by the run
    pub last: usize,
}

/// Scan the run that starts with the operator at `start` in canonical `text`.
///
/// `text[start]` must be the operator itself.
pub fn scan(text: &[u8], start: usize) -> RepeatCount {
    let modulus = u32::from(CELL_MODULUS);
    let op = text[start];
    let mut count: u32 = 1;
    let mut last = start;

    while let Some(&next) = text.get(last + 1) {
        if next.is_ascii_digit() {
            let mut value: u32 = 0;
            while let Some(&digit) = text.get(last + 1).filter(|d| d.is_ascii_digit()) {
                value = (value * 10 + u32::from(digit - b'0')) % modulus;
                last += 1;
            }
            // The operator character already counted once
            count = (count + value + modulus - 1) % modulus;
        } else if next == op {
            count = (count + 1) % modulus;
            last += 1;
        } else {
            break;
        }
    }

    RepeatCount {
        count: count as u8,
        last,
    }
}
