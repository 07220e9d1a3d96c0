//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `school_header`: School logo (or fallback) and name
//! - `introduction_form`: The introduction form sections

mod field_renderer;
mod introduction_form;
mod school_header;

pub use introduction_form::draw as draw_introduction_form;
