//! Post page

use crate::content::FrontMatter;
use crate::error::RenderError;
use crate::fetch::Fetch;
use crate::helpers::{date_span, tag_span};
use crate::Blog;

/// Fetch a post document, convert it, and render the article
pub async fn render_post<F: Fetch>(blog: &Blog<F>, file: &str) -> Result<String, RenderError> {
    let raw = blog.fetcher.fetch_text(&blog.config.post_path(file)).await?;
    let (fm, body) = FrontMatter::parse(&raw);
    let content = blog.markdown.render(body);
    Ok(post_html(&fm, file, &content))
}

/// Heading fallback when a post has no title: the file name without `.md`
pub fn title_from_file(file: &str) -> String {
    file.replacen(".md", "", 1)
}

/// Render a post from its front-matter and converted body
pub fn post_html(fm: &FrontMatter, file: &str, content: &str) -> String {
    let title = fm
        .title()
        .map(str::to_string)
        .unwrap_or_else(|| title_from_file(file));
    let date = fm.date().map(date_span).unwrap_or_default();
    let tags: String = fm.tags().into_iter().map(tag_span).collect();

    format!(
        r#"
      <h1>{}</h1>
      <div class="post-meta">
        {}
        {}
      </div>
      {}
    "#,
        title,
        date,
        tags,
        content
    )
}
