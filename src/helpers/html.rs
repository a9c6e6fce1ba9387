//! HTML helper functions

/// Escape text for insertion into element content or a quoted attribute
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Placeholder/notice block used for loading, empty and error states
///
/// # Examples
/// ```ignore
/// notice("No posts yet.") // -> <div class="loading">No posts yet.</div>
/// ```
pub fn notice(text: &str) -> String {
    format!(r#"<div class="loading">{}</div>"#, html_escape(text))
}

/// A tag badge; the tag is inserted as written
pub fn tag_span(tag: &str) -> String {
    format!(r#"<span class="post-tag">{}</span>"#, tag)
}

/// A date badge, the date rendered in long form
pub fn date_span(date: &str) -> String {
    format!(
        r#"<span class="post-date">{}</span>"#,
        html_escape(&super::long_date(date))
    )
}
