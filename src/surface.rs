//! Display surface
//!
//! Renderers and the router never touch a real document. They write HTML into
//! named containers and toggle which page section is active through
//! [`Surface`]; [`MemorySurface`] keeps that state in memory.

use indexmap::IndexMap;
use std::fmt;

/// Container holding the current year
pub const YEAR_ID: &str = "year";

/// A page section of the single-page document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Post,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Post];

    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Projects => "projects",
            Page::Post => "post",
        }
    }

    /// Id of the section element (`<name>-page`)
    pub fn section_id(&self) -> String {
        format!("{}-page", self.name())
    }

    /// Id of the navigation indicator (`nav-<name>`)
    pub fn nav_id(&self) -> String {
        format!("nav-{}", self.name())
    }

    /// Id of the container the page's renderer writes into
    pub fn container_id(&self) -> &'static str {
        match self {
            Page::Home => "posts-list",
            Page::About => "about-content",
            Page::Projects => "projects-content",
            Page::Post => "post-content",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the router and renderers may do to the display
pub trait Surface {
    /// Replace the content of a container
    fn render(&mut self, container: &str, html: String);

    /// Deactivate every section and nav indicator, then activate those of `page`
    fn set_active(&mut self, page: Page);

    fn scroll_to_top(&mut self);
}

/// In-memory surface
///
/// Starts like the served document: the home section and its nav indicator
/// active, every container empty.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    containers: IndexMap<String, String>,
    active: IndexMap<String, bool>,
    scrolls: usize,
}

impl Default for MemorySurface {
    fn default() -> Self {
        let mut surface = Self {
            containers: IndexMap::new(),
            active: IndexMap::new(),
            scrolls: 0,
        };
        for page in Page::ALL {
            surface.containers.insert(page.container_id().to_string(), String::new());
            surface.active.insert(page.section_id(), false);
            surface.active.insert(page.nav_id(), false);
        }
        surface.containers.insert(YEAR_ID.to_string(), String::new());
        surface.activate(Page::Home);
        surface
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn activate(&mut self, page: Page) {
        self.active.insert(page.section_id(), true);
        self.active.insert(page.nav_id(), true);
    }

    /// Current content of a container
    pub fn content(&self, container: &str) -> Option<&str> {
        self.containers.get(container).map(String::as_str)
    }

    /// Whether the element with `id` carries the active marker
    pub fn is_active(&self, id: &str) -> bool {
        self.active.get(id).copied().unwrap_or(false)
    }

    /// Pages whose section is active; a single entry when the surface is consistent
    pub fn active_pages(&self) -> Vec<Page> {
        Page::ALL
            .into_iter()
            .filter(|page| self.is_active(&page.section_id()))
            .collect()
    }

    /// The visible page
    pub fn active_page(&self) -> Option<Page> {
        match self.active_pages().as_slice() {
            [page] => Some(*page),
            _ => None,
        }
    }

    /// Content of the visible page's container
    pub fn active_content(&self) -> Option<&str> {
        self.active_page()
            .and_then(|page| self.content(page.container_id()))
    }

    /// Number of scroll resets requested so far
    pub fn scrolls(&self) -> usize {
        self.scrolls
    }

    /// Render the whole surface as a standalone document
    pub fn to_html(&self) -> String {
        let mut nav = String::new();
        let mut sections = String::new();

        for page in Page::ALL {
            let nav_class = if self.is_active(&page.nav_id()) {
                " class=\"active\""
            } else {
                ""
            };
            let href = match page {
                Page::Home => "#".to_string(),
                Page::Post => continue,
                _ => format!("#{}", page.name()),
            };
            nav.push_str(&format!(
                "<a id=\"{}\" href=\"{}\"{}>{}</a>\n",
                page.nav_id(),
                href,
                nav_class,
                page.name()
            ));
        }

        for page in Page::ALL {
            let class = if self.is_active(&page.section_id()) {
                "page active"
            } else {
                "page"
            };
            sections.push_str(&format!(
                "<section id=\"{}\" class=\"{}\">\n<div id=\"{}\">{}</div>\n</section>\n",
                page.section_id(),
                class,
                page.container_id(),
                self.content(page.container_id()).unwrap_or_default()
            ));
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<body>\n<nav>\n{}</nav>\n{}<footer>&copy; <span id=\"{}\">{}</span></footer>\n</body>\n</html>\n",
            nav,
            sections,
            YEAR_ID,
            self.content(YEAR_ID).unwrap_or_default()
        )
    }
}

impl Surface for MemorySurface {
    fn render(&mut self, container: &str, html: String) {
        self.containers.insert(container.to_string(), html);
    }

    fn set_active(&mut self, page: Page) {
        for flag in self.active.values_mut() {
            *flag = false;
        }
        self.activate(page);
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        assert_eq!(Page::About.section_id(), "about-page");
        assert_eq!(Page::Post.nav_id(), "nav-post");
        assert_eq!(Page::Home.container_id(), "posts-list");
    }

    #[test]
    fn test_starts_on_home() {
        let surface = MemorySurface::new();
        assert_eq!(surface.active_page(), Some(Page::Home));
        assert!(surface.is_active("nav-home"));
        assert_eq!(surface.content("post-content"), Some(""));
    }

    #[test]
    fn test_set_active_is_exclusive() {
        let mut surface = MemorySurface::new();
        surface.set_active(Page::Projects);
        surface.set_active(Page::About);

        assert_eq!(surface.active_pages(), vec![Page::About]);
        assert!(surface.is_active("nav-about"));
        assert!(!surface.is_active("nav-projects"));
        assert!(!surface.is_active("nav-home"));
    }

    #[test]
    fn test_to_html_marks_active_section() {
        let mut surface = MemorySurface::new();
        surface.render("about-content", "<p>hi</p>".to_string());
        surface.render(YEAR_ID, "2026".to_string());
        surface.set_active(Page::About);

        let html = surface.to_html();
        assert!(html.contains(r#"<section id="about-page" class="page active">"#));
        assert!(html.contains(r#"<section id="home-page" class="page">"#));
        assert!(html.contains(r##"<a id="nav-about" href="#about" class="active">"##));
        assert!(html.contains(r#"<div id="about-content"><p>hi</p></div>"#));
        assert!(html.contains(r#"<span id="year">2026</span>"#));
    }
}
