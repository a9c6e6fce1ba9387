//! Home page: the post list

use crate::content::PostSummary;
use crate::error::RenderError;
use crate::fetch::Fetch;
use crate::helpers::{date_span, notice, tag_span};
use crate::Blog;

/// Fetch the post index and render one card per entry, in index order
pub async fn render_post_list<F: Fetch>(blog: &Blog<F>) -> Result<String, RenderError> {
    let posts: Vec<PostSummary> = blog.fetcher.fetch_json(&blog.config.index_path()).await?;
    tracing::debug!("Post index has {} entries", posts.len());
    Ok(post_list_html(&posts, blog.config.tag_limit))
}

/// Render the post list, or the empty placeholder
pub fn post_list_html(posts: &[PostSummary], tag_limit: usize) -> String {
    if posts.is_empty() {
        return notice("No posts yet.");
    }
    posts
        .iter()
        .map(|post| post_card(post, tag_limit))
        .collect()
}

/// A single link card
///
/// Index fields are author-written HTML and go in as-is.
pub fn post_card(post: &PostSummary, tag_limit: usize) -> String {
    let tags: String = post
        .tags
        .iter()
        .take(tag_limit)
        .map(|t| tag_span(t))
        .collect();

    format!(
        r##"
      <a class="post-card" href="#{route}">
        <div>
          <div class="post-meta">
            {date}
            {tags}
          </div>
          <div class="post-title">{title}</div>
          <div class="post-excerpt">{excerpt}</div>
        </div>
        <span class="post-arrow">→</span>
      </a>
    "##,
        route = post.route(),
        date = date_span(&post.date),
        tags = tags,
        title = post.title,
        excerpt = post.excerpt.as_deref().unwrap_or_default(),
    )
}
