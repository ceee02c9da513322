//! Query string encoding for API paths.
//!
//! Options records are plain `Serialize` structs whose absent fields are
//! skipped, so only what the caller set ends up in the URL.

use serde::Serialize;

/// Error type for query encoding
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Failed to encode query options: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("Invalid subreddit name {0:?}: must be a single non-empty path segment")]
    InvalidName(String),
}

/// Check that `name` can be placed in a path as exactly one segment.
///
/// Separators and escapes (`/`, `\`, `?`, `#`, `%`) and the dot segments
/// would make the joined URL point somewhere else, so they are rejected
/// instead of sent.
pub fn path_segment(name: &str) -> Result<&str, QueryError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '?', '#', '%']);

    if invalid {
        return Err(QueryError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// Append the encoded `options` to `path`.
///
/// Returns `path` untouched when every option is absent.
pub fn add_options<T>(path: &str, options: &T) -> Result<String, QueryError>
where
    T: Serialize + ?Sized,
{
    let query = serde_urlencoded::to_string(options)?;

    if query.is_empty() {
        return Ok(path.to_string());
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{path}{separator}{query}"))
}

/// Pagination options shared by the subreddit list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty cursors are treated as unset.
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = cursor(after.into());
        self
    }

    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.before = cursor(before.into());
        self
    }

    /// Non-positive limits are treated as unset.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = positive_limit(limit);
        self
    }
}

pub(crate) fn cursor(token: String) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

pub(crate) fn positive_limit(limit: i64) -> Option<u32> {
    if limit <= 0 {
        None
    } else {
        Some(u32::try_from(limit).unwrap_or(u32::MAX))
    }
}
