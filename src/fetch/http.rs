//! HTTP transport

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::Fetch;
use crate::error::FetchError;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Fetches site resources from a base URL
///
/// Requests run on tokio's blocking pool so the caller's task only awaits.
#[derive(Clone)]
pub struct HttpFetcher {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::agent(),
        }
    }

    /// Absolute URL of a site-relative path
    pub fn url_for(&self, path: &str) -> String {
        let encoded: Vec<String> = path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect();
        format!("{}/{}", self.base_url, encoded.join("/"))
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        let agent = self.agent.clone();
        let owned_path = path.to_string();

        tracing::debug!("GET {}", url);

        let result = tokio::task::spawn_blocking(move || match agent.get(&url).call() {
            Ok(response) => response.into_string().map_err(|e| FetchError::Network {
                path: owned_path,
                message: e.to_string(),
            }),
            Err(ureq::Error::Status(status, _)) => Err(FetchError::Status {
                path: owned_path,
                status,
            }),
            Err(e) => Err(FetchError::Network {
                path: owned_path,
                message: e.to_string(),
            }),
        })
        .await;

        match result {
            Ok(result) => result,
            Err(e) => Err(FetchError::Network {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
