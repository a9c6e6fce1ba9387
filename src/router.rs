//! Hash routing
//!
//! The URL hash alone decides which page section is visible. Every hash change
//! re-runs [`Router::navigate`]; nothing is suppressed for "already there".

use std::fmt;

use crate::fetch::Fetch;
use crate::helpers::current_year;
use crate::render;
use crate::surface::{Page, Surface, YEAR_ID};
use crate::Blog;

const POST_PREFIX: &str = "post/";

/// Where a hash leads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    About,
    Projects,
    /// A post document, named exactly as it appears after `post/`
    Post(String),
}

impl Route {
    /// Resolve a hash fragment; a leading `#` is ignored
    pub fn from_hash(hash: &str) -> Self {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);

        if let Some(file) = fragment.strip_prefix(POST_PREFIX) {
            Route::Post(file.to_string())
        } else if fragment == "about" {
            Route::About
        } else if fragment == "projects" {
            Route::Projects
        } else {
            Route::Home
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Projects => Page::Projects,
            Route::Post(_) => Page::Post,
        }
    }

    /// The hash that leads back here, including the `#`
    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#".to_string(),
            Route::About => "#about".to_string(),
            Route::Projects => "#projects".to_string(),
            Route::Post(file) => format!("#{}{}", POST_PREFIX, file),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hash())
    }
}

/// Session state owned by the router
///
/// The loaded flags live as long as the router; a fresh router is a full reload.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub current: Route,
    pub about_loaded: bool,
    pub projects_loaded: bool,
}

/// Drives renderers and the display surface from hash changes
pub struct Router<F, S> {
    blog: Blog<F>,
    surface: S,
    state: PageState,
}

impl<F: Fetch, S: Surface> Router<F, S> {
    pub fn new(blog: Blog<F>, surface: S) -> Self {
        Self {
            blog,
            surface,
            state: PageState::default(),
        }
    }

    /// Initial load: year, post list, then the hash present at load time
    pub async fn boot(&mut self, hash: &str) -> &Route {
        tracing::info!("Booting viewer at {:?}", hash);
        self.surface.render(YEAR_ID, current_year().to_string());
        self.load_post_list().await;
        self.navigate(hash).await
    }

    /// Transition to the route named by `hash`
    pub async fn navigate(&mut self, hash: &str) -> &Route {
        let route = Route::from_hash(hash);
        tracing::debug!("Navigating to {}", route);

        self.surface.set_active(route.page());

        match &route {
            Route::Post(file) if !file.is_empty() => {
                self.load_post(file).await;
                self.surface.scroll_to_top();
            }
            Route::About if !self.state.about_loaded => self.load_about().await,
            Route::Projects if !self.state.projects_loaded => self.load_projects().await,
            _ => {}
        }

        self.state.current = route;
        &self.state.current
    }

    /// Fetch and render the home page's post list
    pub async fn load_post_list(&mut self) {
        let html = match render::render_post_list(&self.blog).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Post list failed: {}", e);
                render::error_notice(Page::Home, &e)
            }
        };
        self.surface.render(Page::Home.container_id(), html);
    }

    async fn load_post(&mut self, file: &str) {
        let container = Page::Post.container_id();
        self.surface.render(container, render::loading_notice());

        let html = match render::render_post(&self.blog, file).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Post {} failed: {}", file, e);
                render::error_notice(Page::Post, &e)
            }
        };
        self.surface.render(container, html);
    }

    async fn load_about(&mut self) {
        let html = match render::render_about(&self.blog).await {
            Ok(html) => {
                self.state.about_loaded = true;
                html
            }
            Err(e) => {
                tracing::warn!("About page failed: {}", e);
                render::error_notice(Page::About, &e)
            }
        };
        self.surface.render(Page::About.container_id(), html);
    }

    async fn load_projects(&mut self) {
        let html = match render::render_projects(&self.blog).await {
            Ok(html) => {
                self.state.projects_loaded = true;
                html
            }
            Err(e) => {
                tracing::warn!("Projects page failed: {}", e);
                render::error_notice(Page::Projects, &e)
            }
        };
        self.surface.render(Page::Projects.container_id(), html);
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
