//! Path matching logic.
//!
//! # Responsibilities
//! - Normalize incoming paths (trailing slash, empty path)
//! - Split paths into `/`-delimited segments
//! - Match segments against a parsed pattern in exact or prefix mode
//! - Capture parameter values
//!
//! # Design Decisions
//! - Literal matching is case-sensitive unless the route opts out
//! - Captured values are returned verbatim (no percent-decoding)
//! - No regex: matching is a single pass over the pattern segments

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;

use super::pattern::{PathPattern, Segment};

/// How many path segments a pattern must account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Same number of segments as the pattern.
    Exact,
    /// Pattern segments must lead the path; extra segments are ignored.
    Prefix,
}

impl MatchMode {
    pub fn from_exact(exact: bool) -> Self {
        if exact {
            MatchMode::Exact
        } else {
            MatchMode::Prefix
        }
    }
}

/// Parameter values captured from a path, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Strip a single trailing `/` unless the path is the root; the empty path is the root.
pub fn normalize(path: &str) -> &str {
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(stripped) => stripped,
    }
}

/// Split a normalized, rooted path into segments. The root has no segments.
pub fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').collect()
}

/// Matches path segments against one pattern.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    pattern: PathPattern,
    mode: MatchMode,
    case_sensitive: bool,
}

impl SegmentMatcher {
    pub fn new(pattern: PathPattern, mode: MatchMode, case_sensitive: bool) -> Self {
        Self {
            pattern,
            mode,
            case_sensitive,
        }
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns the captured parameters if the segments satisfy this pattern.
    pub fn match_segments(&self, path: &[&str]) -> Option<Params> {
        let expected = self.pattern.segments();
        let count_ok = match self.mode {
            MatchMode::Exact => path.len() == expected.len(),
            MatchMode::Prefix => path.len() >= expected.len(),
        };
        if !count_ok {
            return None;
        }

        let mut params = Params::new();
        for (segment, actual) in expected.iter().zip(path) {
            match segment {
                Segment::Literal(literal) => {
                    if !self.literal_eq(literal, actual) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), *actual);
                }
            }
        }
        Some(params)
    }

    fn literal_eq(&self, literal: &str, actual: &str) -> bool {
        if self.case_sensitive {
            literal == actual
        } else {
            literal.eq_ignore_ascii_case(actual)
        }
    }
}
