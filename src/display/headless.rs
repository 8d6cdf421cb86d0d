// Headless display sink that records what the engine shows it

use super::{DisplayError, DisplaySink, ErrorReport};
use crate::interpreter::engine::Breakpoint;
use crate::memory::grid::Grid;
use std::collections::VecDeque;

/// Default number of committed frames kept in history
pub const DEFAULT_FRAME_LIMIT: usize = 1024;

/// Display sink that records frames, breakpoints and errors instead of drawing.
///
/// Frame history is a ring: once `frame_limit` frames are stored, the oldest
/// is dropped for each new commit. The most recent frame and the total commit
/// count are always kept.
#[derive(Debug, Clone)]
pub struct RecordingDisplay {
    frames: VecDeque<Grid>,
    frame_limit: usize,
    last_frame: Option<Grid>,
    commits: usize,
    breakpoints: Vec<Breakpoint>,
    errors: Vec<ErrorReport>,
    quit_after: Option<usize>,
    awaited_quit: bool,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::with_frame_limit(DEFAULT_FRAME_LIMIT)
    }

    /// Keep at most `frame_limit` frames in history (0 keeps none)
    pub fn with_frame_limit(frame_limit: usize) -> Self {
        RecordingDisplay {
            frames: VecDeque::new(),
            frame_limit,
            last_frame: None,
            commits: 0,
            breakpoints: Vec::new(),
            errors: Vec::new(),
            quit_after: None,
            awaited_quit: false,
        }
    }

    /// Behave as if the user asked to quit once `commits` frames have been committed
    pub fn quit_after(mut self, commits: usize) -> Self {
        self.quit_after = Some(commits);
        self
    }

    /// Frames still held in history, oldest first
    pub fn frames(&self) -> impl Iterator<Item = &Grid> {
        self.frames.iter()
    }

    /// The most recently committed frame
    pub fn last_frame(&self) -> Option<&Grid> {
        self.last_frame.as_ref()
    }

    /// Total number of commits, including frames dropped from history
    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn errors(&self) -> &[ErrorReport] {
        &self.errors
    }

    /// Whether the host reached the end-of-run quit wait
    pub fn awaited_quit(&self) -> bool {
        self.awaited_quit
    }
}

impl Default for RecordingDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for RecordingDisplay {
    fn commit(&mut self, frame: &Grid) -> Result<(), DisplayError> {
        self.commits += 1;
        self.last_frame = Some(*frame);
        if self.frame_limit > 0 {
            if self.frames.len() == self.frame_limit {
                self.frames.pop_front();
            }
            self.frames.push_back(*frame);
        }
        Ok(())
    }

    fn await_quit(&mut self) -> Result<(), DisplayError> {
        self.awaited_quit = true;
        Ok(())
    }

    fn on_error(&mut self, report: &ErrorReport) {
        self.errors.push(report.clone());
    }

    fn breakpoint(&mut self, report: &Breakpoint) {
        self.breakpoints.push(*report);
    }

    fn quit_requested(&mut self) -> bool {
        self.quit_after.is_some_and(|limit| self.commits >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::cursor::Cursor;

    fn frame(value: u8) -> Grid {
        let mut grid = Grid::initial_screen();
        grid.set(Cursor::ORIGIN, value);
        grid
    }

    #[test]
    fn test_records_frames_in_order() {
        let mut display = RecordingDisplay::new();
        display.commit(&frame(1)).unwrap();
        display.commit(&frame(2)).unwrap();

        let values: Vec<u8> = display.frames().map(|g| g.get(0, 0)).collect();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(display.commits(), 2);
        assert_eq!(display.last_frame(), Some(&frame(2)));
    }

    #[test]
    fn test_frame_ring_drops_oldest() {
        let mut display = RecordingDisplay::with_frame_limit(2);
        for value in 1..=5 {
            display.commit(&frame(value)).unwrap();
        }

        let values: Vec<u8> = display.frames().map(|g| g.get(0, 0)).collect();
        assert_eq!(values, vec![4, 5]);
        assert_eq!(display.commits(), 5);
    }

    #[test]
    fn test_zero_limit_keeps_only_last() {
        let mut display = RecordingDisplay::with_frame_limit(0);
        display.commit(&frame(7)).unwrap();
        assert_eq!(display.frames().count(), 0);
        assert_eq!(display.last_frame().map(|g| g.get(0, 0)), Some(7));
    }

    #[test]
    fn test_quit_after() {
        let mut display = RecordingDisplay::new().quit_after(1);
        assert!(!display.quit_requested());
        display.commit(&frame(1)).unwrap();
        assert!(display.quit_requested());
    }
}
