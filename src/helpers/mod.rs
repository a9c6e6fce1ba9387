//! Helper functions shared by the page renderers

mod date;
mod html;

pub use date::*;
pub use html::*;
