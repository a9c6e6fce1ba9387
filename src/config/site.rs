//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for every resource path ("" for a root site, "/repo-name" for a project site)
    pub base: String,

    // Resources
    pub posts_index: String,
    pub posts_dir: String,
    pub about_path: String,
    pub projects_path: String,

    // Home page
    /// Maximum number of tags shown on a post card
    pub tag_limit: usize,

    // Static pages
    pub about: AboutConfig,
    pub projects: ProjectsConfig,

    // Markdown
    pub markdown: MarkdownConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base: String::new(),

            posts_index: "posts.json".to_string(),
            posts_dir: "posts".to_string(),
            about_path: "about.md".to_string(),
            projects_path: "projects.md".to_string(),

            tag_limit: 2,

            about: AboutConfig::default(),
            projects: ProjectsConfig::default(),

            markdown: MarkdownConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Path of the post index
    pub fn index_path(&self) -> String {
        self.resource(&self.posts_index)
    }

    /// Path of a single post document
    pub fn post_path(&self, file: &str) -> String {
        self.resource(&format!("{}/{}", self.posts_dir.trim_end_matches('/'), file))
    }

    /// Path of the about document
    pub fn about_doc_path(&self) -> String {
        self.resource(&self.about_path)
    }

    /// Path of the projects document
    pub fn projects_doc_path(&self) -> String {
        self.resource(&self.projects_path)
    }

    fn resource(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Header fallbacks for the about page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub initials: String,
    pub name: String,
    pub role: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            initials: "DS".to_string(),
            name: "Your Name".to_string(),
            role: "Data Scientist".to_string(),
        }
    }
}

/// Header fallbacks for the projects page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub initials: String,
    pub title: String,
    pub subtitle: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            initials: "🚀".to_string(),
            title: "Projects".to_string(),
            subtitle: "Things I have built".to_string(),
        }
    }
}

/// Markdown conversion options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// GitHub-flavoured extensions (tables, strikethrough, task lists, footnotes)
    pub gfm: bool,
    /// Treat single newlines as line breaks
    pub breaks: bool,
    /// Syntax-highlight fenced code blocks
    pub highlight: bool,
    pub theme: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: true,
            highlight: false,
            theme: "base16-ocean.dark".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = SiteConfig::default();
        assert_eq!(config.index_path(), "/posts.json");
        assert_eq!(config.post_path("hello.md"), "/posts/hello.md");
        assert_eq!(config.about_doc_path(), "/about.md");
        assert_eq!(config.projects_doc_path(), "/projects.md");
    }

    #[test]
    fn test_project_site_base() {
        let config = SiteConfig {
            base: "/my-blog/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.index_path(), "/my-blog/posts.json");
        assert_eq!(config.post_path("2024/intro.md"), "/my-blog/posts/2024/intro.md");
    }

    #[test]
    fn test_load_partial_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(
            &path,
            "base: /notes\ntag_limit: 3\nabout:\n  name: Ada Lovelace\nprojects:\n  subtitle: Side quests\nmarkdown:\n  highlight: true\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.base, "/notes");
        assert_eq!(config.tag_limit, 3);
        assert_eq!(config.about.name, "Ada Lovelace");
        // Unset fields of a partially specified section fall back to their defaults
        assert_eq!(config.about.role, "Data Scientist");
        assert_eq!(config.projects.subtitle, "Side quests");
        assert_eq!(config.projects.title, "Projects");
        assert!(config.markdown.highlight);
        assert!(config.markdown.breaks);
    }
}
