//! History entries.

use serde::Serialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

/// Rejected navigation targets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("target `{0}` is not rooted; paths must start with `/`")]
    Unrooted(String),
}

/// One entry of the navigation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Unique per entry, even when two entries share a URL.
    pub key: Uuid,
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl Location {
    /// Parse a navigation target.
    ///
    /// Absolute URLs drop their scheme and authority; what follows is split
    /// exactly like a rooted path, so both spellings of a target reach the
    /// router with the same raw text.
    pub fn parse(target: &str) -> Result<Self, LocationError> {
        let relative = match Url::parse(target) {
            Ok(url) if url.has_host() => strip_origin(target),
            _ => target,
        };

        let (rest, hash) = match relative.find('#') {
            Some(at) => relative.split_at(at),
            None => (relative, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(at) => rest.split_at(at),
            None => (rest, ""),
        };

        if !pathname.is_empty() && !pathname.starts_with('/') {
            return Err(LocationError::Unrooted(target.to_string()));
        }

        Ok(Self {
            key: Uuid::new_v4(),
            pathname: if pathname.is_empty() {
                "/".to_string()
            } else {
                pathname.to_string()
            },
            search: search.to_string(),
            hash: hash.to_string(),
        })
    }

    /// The location rendered back as a relative URL.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Everything after `scheme://authority`, taken from the raw text.
fn strip_origin(target: &str) -> &str {
    let after_scheme = match target.find("://") {
        Some(at) => &target[at + 3..],
        None => return target,
    };
    match after_scheme.find(|c: char| matches!(c, '/' | '?' | '#')) {
        Some(at) => &after_scheme[at..],
        None => "",
    }
}
