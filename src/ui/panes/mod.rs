//! TUI pane rendering modules
//!
//! - [`canvas`]: the 32×32 screen in palette colors
//! - [`log`]: breakpoint and error reports
//! - [`status`]: status bar with commit count, keybindings and run state
//!
//! Each pane module exports a stateless `render_*` function; scroll offsets
//! live in [`crate::ui::app`].

pub mod canvas;
pub mod log;
pub mod status;

pub use canvas::{render_canvas_pane, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use log::{render_log_pane, LogEntry};
pub use status::{render_status_bar, RunState};
