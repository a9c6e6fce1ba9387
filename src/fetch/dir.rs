//! Local directory transport

use percent_encoding::percent_decode_str;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::Fetch;
use crate::error::FetchError;

/// Serves site resources from a directory, answering like a static file host
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Map a site-relative path to a file under the root
    ///
    /// Returns `None` for paths that would leave the root.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let decoded = percent_decode_str(path.trim_start_matches('/')).decode_utf8_lossy();
        let relative = Path::new(decoded.as_ref());

        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(resolved)
    }
}

impl Fetch for DirFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let Some(file) = self.resolve(path) else {
            tracing::warn!("Rejected path outside site root: {}", path);
            return Err(FetchError::Status {
                path: path.to_string(),
                status: 403,
            });
        };

        tracing::debug!("Reading {:?}", file);

        match tokio::fs::read_to_string(&file).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::Status {
                path: path.to_string(),
                status: 404,
            }),
            Err(e) => Err(FetchError::Network {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts/hello world.md"), "# Hi\n").unwrap();
        fs::write(dir.path().join("posts.json"), "[]").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_reads_relative_to_root() {
        let dir = site();
        let fetcher = DirFetcher::new(dir.path());
        assert_eq!(fetcher.fetch_text("/posts.json").await.unwrap(), "[]");
        assert_eq!(fetcher.fetch_text("posts.json").await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_decodes_percent_escapes() {
        let dir = site();
        let fetcher = DirFetcher::new(dir.path());
        let text = fetcher.fetch_text("/posts/hello%20world.md").await.unwrap();
        assert_eq!(text, "# Hi\n");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = site();
        let fetcher = DirFetcher::new(dir.path());
        let err = fetcher.fetch_text("/posts/nope.md").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Failed to fetch /posts/nope.md: 404");
    }

    #[tokio::test]
    async fn test_parent_dir_is_403() {
        let dir = site();
        let fetcher = DirFetcher::new(dir.path().join("posts"));
        let err = fetcher.fetch_text("/../posts.json").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn test_directory_is_not_a_document() {
        let dir = site();
        let fetcher = DirFetcher::new(dir.path());
        let err = fetcher.fetch_text("/posts").await.unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
    }
}
