//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — [`TerminalDisplay`], the [`DisplaySink`] that owns the terminal,
//!   repaints on commit and waits for `Esc`/`q`
//! - **[`panes`]** — stateless render functions for the canvas, diagnostics and status bar
//! - **[`theme`]** — chrome colors and the palette → terminal color mapping
//!
//! [`DisplaySink`]: crate::display::DisplaySink

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{init_terminal, restore_terminal, TerminalDisplay};
