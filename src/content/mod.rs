//! Content module - front-matter, markdown and the post index

mod frontmatter;
mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::PostSummary;
