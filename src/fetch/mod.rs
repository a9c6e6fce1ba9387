//! Content fetching
//!
//! Every page renderer reads its data through [`Fetch`]: a single GET of a
//! site-relative path, with no retries and no timeout. Non-success answers
//! surface as [`FetchError::Status`] carrying the path and status code.

mod dir;
mod http;

pub use dir::DirFetcher;
pub use http::HttpFetcher;

use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Retrieves site resources by path
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// Fetch a resource as text
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;

    /// Fetch a resource and parse it as JSON
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let text = self.fetch_text(path).await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Either transport, chosen at startup
pub enum SiteFetcher {
    Http(HttpFetcher),
    Dir(DirFetcher),
}

impl Fetch for SiteFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        match self {
            SiteFetcher::Http(f) => f.fetch_text(path).await,
            SiteFetcher::Dir(f) => f.fetch_text(path).await,
        }
    }
}

impl<F: Fetch> Fetch for &F {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch_text(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticFetcher;

    #[derive(Debug, serde::Deserialize)]
    struct Entry {
        name: String,
    }

    #[tokio::test]
    async fn test_fetch_json_decodes() {
        let fetcher = StaticFetcher::new().with("/data.json", r#"[{"name": "a"}, {"name": "b"}]"#);
        let entries: Vec<Entry> = fetcher.fetch_json("/data.json").await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "b");
    }

    #[tokio::test]
    async fn test_fetch_json_decode_error_names_path() {
        let fetcher = StaticFetcher::new().with("/data.json", "not json");
        let err = fetcher
            .fetch_json::<Vec<Entry>>("/data.json")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
        assert_eq!(err.path(), "/data.json");
    }

    #[tokio::test]
    async fn test_fetch_json_propagates_status() {
        let fetcher = StaticFetcher::new();
        let err = fetcher
            .fetch_json::<Vec<Entry>>("/missing.json")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
