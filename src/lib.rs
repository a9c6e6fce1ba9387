//! hashblog: a hash-routed static blog viewer
//!
//! A site is a handful of static files: a JSON post index, markdown posts with
//! optional front-matter, and about/projects documents. The viewer fetches
//! them at runtime, converts markdown to HTML, and shows one page section at a
//! time according to the URL hash (`#`, `#about`, `#projects`, `#post/<file>`).

pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod helpers;
pub mod render;
pub mod router;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

use anyhow::Result;
use std::path::Path;

use config::SiteConfig;
use content::MarkdownRenderer;
use fetch::{DirFetcher, Fetch, HttpFetcher, SiteFetcher};
use router::Router;
use surface::Surface;

/// Config file looked up in a site directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A site to view: configuration, transport and markdown converter
pub struct Blog<F> {
    /// Site configuration
    pub config: SiteConfig,
    /// Where resources come from
    pub fetcher: F,
    /// Markdown converter built from `config.markdown`
    pub markdown: MarkdownRenderer,
}

impl<F: Fetch> Blog<F> {
    pub fn new(config: SiteConfig, fetcher: F) -> Self {
        let markdown = MarkdownRenderer::with_config(&config.markdown);
        Self {
            config,
            fetcher,
            markdown,
        }
    }

    /// Hand the site to a router drawing on `surface`
    pub fn router<S: Surface>(self, surface: S) -> Router<F, S> {
        Router::new(self, surface)
    }
}

impl Blog<SiteFetcher> {
    /// Open a site directory, reading `_config.yml` when present
    pub fn open_dir<P: AsRef<Path>>(dir: P, config: Option<SiteConfig>) -> Result<Self> {
        let dir = dir.as_ref();
        let config = match config {
            Some(config) => config,
            None => {
                let config_path = dir.join(CONFIG_FILE);
                if config_path.exists() {
                    SiteConfig::load(&config_path)?
                } else {
                    SiteConfig::default()
                }
            }
        };

        Ok(Self::new(config, SiteFetcher::Dir(DirFetcher::new(dir))))
    }

    /// View a site served at `base_url`
    pub fn open_url(base_url: &str, config: Option<SiteConfig>) -> Self {
        Self::new(
            config.unwrap_or_default(),
            SiteFetcher::Http(HttpFetcher::new(base_url)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemorySurface, Page};
    use std::fs;

    fn write_site(dir: &Path) {
        fs::create_dir_all(dir.join("posts")).unwrap();
        fs::write(
            dir.join("posts.json"),
            r#"[{"file": "hello.md", "title": "Hello", "date": "2024-03-05", "excerpt": "First!"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("posts/hello.md"),
            "---\ntitle: Hello\ndate: 2024-03-05\ntags: intro\n---\nWelcome.\n",
        )
        .unwrap();
        fs::write(dir.join("about.md"), "---\nname: Grace\n---\nHi.\n").unwrap();
    }

    #[tokio::test]
    async fn test_view_directory_site() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());

        let blog = Blog::open_dir(dir.path(), None).unwrap();
        let mut router = blog.router(MemorySurface::new());
        router.boot("#post/hello.md").await;

        let surface = router.surface();
        assert_eq!(surface.active_page(), Some(Page::Post));
        let post = surface.active_content().unwrap();
        assert!(post.contains("<h1>Hello</h1>"));
        assert!(post.contains("March 5, 2024"));
        assert!(post.contains(r#"<span class="post-tag">intro</span>"#));
        assert!(post.contains("<p>Welcome.</p>"));
        assert!(surface.content("posts-list").unwrap().contains("First!"));
    }

    #[tokio::test]
    async fn test_directory_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content/me.md"), "Custom.\n").unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "about_path: content/me.md\nabout:\n  initials: GH\n",
        )
        .unwrap();

        let blog = Blog::open_dir(dir.path(), None).unwrap();
        assert_eq!(blog.config.about_path, "content/me.md");

        let mut router = blog.router(MemorySurface::new());
        router.navigate("#about").await;
        let about = router.surface().content("about-content").unwrap();
        assert!(about.contains(r#"<div class="about-avatar">GH</div>"#));
        assert!(about.contains("<p>Custom.</p>"));
    }

    #[tokio::test]
    async fn test_demo_site() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/site");
        let blog = Blog::open_dir(&dir, None).unwrap();
        assert!(blog.config.markdown.highlight);

        let mut router = blog.router(MemorySurface::new());
        router.boot("").await;
        let list = router.surface().content("posts-list").unwrap();
        assert_eq!(list.matches(r#"class="post-card""#).count(), 2);
        assert!(!list.contains(">intro<"));

        router.navigate("#projects").await;
        let projects = router.surface().active_content().unwrap();
        assert!(projects.contains(r#"<div class="role">Small things, finished</div>"#));
        assert!(projects.contains("<del>a todo app</del>"));
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "tag_limit: [not, a, number]\n").unwrap();
        assert!(Blog::open_dir(dir.path(), None).is_err());
    }
}
