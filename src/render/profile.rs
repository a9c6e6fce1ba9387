//! About and projects pages
//!
//! Both are a single static document whose front-matter fills an avatar/intro
//! header, falling back to the configured defaults.

use crate::content::FrontMatter;
use crate::error::RenderError;
use crate::fetch::Fetch;
use crate::Blog;

/// Fetch and render the about page
pub async fn render_about<F: Fetch>(blog: &Blog<F>) -> Result<String, RenderError> {
    let raw = blog.fetcher.fetch_text(&blog.config.about_doc_path()).await?;
    let (fm, body) = FrontMatter::parse(&raw);
    let defaults = &blog.config.about;

    Ok(profile_html(
        "about",
        Header {
            initials: field(&fm, "initials", &defaults.initials),
            heading: field(&fm, "name", &defaults.name),
            subheading: field(&fm, "role", &defaults.role),
        },
        &blog.markdown.render(body),
    ))
}

/// Fetch and render the projects page
pub async fn render_projects<F: Fetch>(blog: &Blog<F>) -> Result<String, RenderError> {
    let raw = blog
        .fetcher
        .fetch_text(&blog.config.projects_doc_path())
        .await?;
    let (fm, body) = FrontMatter::parse(&raw);
    let defaults = &blog.config.projects;

    Ok(profile_html(
        "projects",
        Header {
            initials: field(&fm, "initials", &defaults.initials),
            heading: field(&fm, "title", &defaults.title),
            subheading: field(&fm, "subtitle", &defaults.subtitle),
        },
        &blog.markdown.render(body),
    ))
}

struct Header<'a> {
    initials: &'a str,
    heading: &'a str,
    subheading: &'a str,
}

/// Front-matter value, or the fallback when missing or empty
fn field<'a>(fm: &'a FrontMatter, key: &str, fallback: &'a str) -> &'a str {
    fm.get(key).filter(|v| !v.is_empty()).unwrap_or(fallback)
}

fn profile_html(prefix: &str, header: Header<'_>, content: &str) -> String {
    format!(
        r#"
      <div class="{p}-header">
        <div class="{p}-avatar">{initials}</div>
        <div class="{p}-intro">
          <h1>{heading}</h1>
          <div class="role">{subheading}</div>
        </div>
      </div>
      <div class="{p}-body">{content}</div>
    "#,
        p = prefix,
        initials = header.initials,
        heading = header.heading,
        subheading = header.subheading,
        content = content,
    )
}
