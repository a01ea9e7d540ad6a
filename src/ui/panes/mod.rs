//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`students`]: Table of every record in insertion order
//! - [`menu`]: The numbered main menu with the active operation highlighted
//! - [`output`]: Transcript of prompts and session output
//! - [`stats`]: Live roster statistics
//! - [`input`]: Prompt and the line being typed
//! - [`status`]: Status bar with keybindings and session state
//! - `utils`: Shared border and scroll helpers
//!
//! Each pane module exports a primary `render_*` function. Panes hold no
//! state of their own; scroll offsets live in [`App`](crate::ui::App).

mod utils;

pub mod input;
pub mod menu;
pub mod output;
pub mod stats;
pub mod status;
pub mod students;

// Re-export render functions for convenience
pub use input::render_input_line;
pub use menu::render_menu_pane;
pub use output::render_output_pane;
pub use stats::render_stats_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use students::render_students_pane;
