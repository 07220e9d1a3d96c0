//! Dialog components for TUI

mod base;
mod error_dialog;
mod introduction_dialog;

pub use error_dialog::render_error_dialog;
pub use introduction_dialog::render_introduction_dialog;
