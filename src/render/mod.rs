//! Page renderers
//!
//! Each renderer fetches its data, parses and converts it, and returns the
//! HTML fragment for its page's container. Failures come back as
//! [`RenderError`]; [`error_notice`] turns them into the inline message the
//! router writes in place of the content.

mod home;
mod post;
mod profile;

pub use home::{post_card, post_list_html, render_post_list};
pub use post::{post_html, render_post, title_from_file};
pub use profile::{render_about, render_projects};

use crate::error::RenderError;
use crate::helpers::notice;
use crate::surface::Page;

/// Placeholder shown while a post is being fetched
pub fn loading_notice() -> String {
    notice("loading…")
}

/// Inline error message for a page's container
pub fn error_notice(page: Page, err: &RenderError) -> String {
    let prefix = match page {
        Page::Home => "Error loading posts",
        Page::Post => "Error",
        Page::About => "Error loading about",
        Page::Projects => "Error loading projects",
    };
    notice(&format!("{}: {}", prefix, err.message()))
}
