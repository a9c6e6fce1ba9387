//! Configuration module

mod site;

pub use site::AboutConfig;
pub use site::MarkdownConfig;
pub use site::ProjectsConfig;
pub use site::SiteConfig;
