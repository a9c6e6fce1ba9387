//! Test doubles shared by unit tests

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FetchError;
use crate::fetch::Fetch;

/// Serves canned documents from memory and records every request
///
/// Unknown paths answer 404.
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<String, u16>>,
    requests: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.responses.insert(path.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(path.to_string(), Err(status));
        self
    }

    /// Number of requests made for `path`
    pub fn hits(&self, path: &str) -> usize {
        self.requests.borrow().iter().filter(|p| *p == path).count()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for StaticFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(path.to_string());
        match self.responses.get(path) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status {
                path: path.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Status {
                path: path.to_string(),
                status: 404,
            }),
        }
    }
}
