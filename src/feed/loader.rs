//! Feed loading.
//!
//! The feed is a static JSON resource fetched once, read-only; it lives
//! either on disk or behind a plain HTTP GET. A payload that is not a
//! JSON array of message records is treated as an empty collection, not
//! an error - only transport failures surface as [`FeedError`].

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Message;

/// Feed loading errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Local feed file could not be read
    #[error("failed to read feed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote feed request failed (connect, timeout, non-2xx)
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Where the message feed lives.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    /// Remote feed fetched over HTTP(S)
    Url(String),
    /// Local JSON file
    File(PathBuf),
}

impl FeedSource {
    /// Interpret a config string: anything with an `http(s)://` scheme is
    /// remote, everything else is a local path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            FeedSource::Url(s.to_string())
        } else {
            FeedSource::File(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Url(url) => write!(f, "{url}"),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Client for loading the message feed.
pub struct FeedClient {
    client: reqwest::Client,
}

impl FeedClient {
    /// Create a feed client with the given request timeout.
    pub fn new(request_timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Load the full collection from a feed source.
    ///
    /// Feed order is preserved (oldest first). No retries.
    pub async fn load(&self, source: &FeedSource) -> FeedResult<Vec<Message>> {
        let raw = match source {
            FeedSource::Url(url) => {
                self.client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
            FeedSource::File(path) => read_feed_file(path)?,
        };

        let messages = messages_from_payload(&raw);
        tracing::info!(source = %source, count = messages.len(), "loaded message feed");
        Ok(messages)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(5000)
    }
}

fn read_feed_file(path: &Path) -> FeedResult<String> {
    std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode a feed payload into messages.
///
/// Malformed JSON and non-array payloads yield an empty collection;
/// individual records that fail to decode are skipped.
fn messages_from_payload(raw: &str) -> Vec<Message> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "feed payload is not valid JSON, treating as empty");
            return Vec::new();
        }
    };

    let serde_json::Value::Array(items) = value else {
        tracing::warn!("feed payload is not an array, treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed feed record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_feed(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("messages.json")).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        dir
    }

    async fn load_from(dir: &tempfile::TempDir) -> FeedResult<Vec<Message>> {
        let source = FeedSource::File(dir.path().join("messages.json"));
        FeedClient::default().load(&source).await
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            FeedSource::parse("https://example.com/messages.json"),
            FeedSource::Url("https://example.com/messages.json".to_string())
        );
        assert_eq!(
            FeedSource::parse("data/messages.json"),
            FeedSource::File(PathBuf::from("data/messages.json"))
        );
    }

    #[tokio::test]
    async fn test_load_preserves_feed_order() {
        let dir = write_feed(
            r#"[
                {"name": "Ana", "message": "first", "date": "2025-01-01"},
                {"id": "x2", "name": "Bia", "message": "second", "date": "2025-01-02"}
            ]"#,
        );

        let messages = load_from(&dir).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].message, "first");
        assert_eq!(messages[1].id.as_deref(), Some("x2"));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_empty_collection() {
        let dir = write_feed("{ not json at all");
        assert!(load_from(&dir).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_array_payload_is_empty_collection() {
        let dir = write_feed(r#"{"messages": []}"#);
        assert!(load_from(&dir).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_record_is_skipped() {
        let dir = write_feed(
            r#"[
                {"name": "Ana", "message": "ok", "date": "2025-01-01"},
                42
            ]"#,
        );

        let messages = load_from(&dir).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FeedSource::File(dir.path().join("nope.json"));
        let result = FeedClient::default().load(&source).await;
        assert!(matches!(result, Err(FeedError::Io { .. })));
    }
}
