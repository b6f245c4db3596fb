//! Route pattern parsing.
//!
//! # Responsibilities
//! - Parse a pattern such as `/select/:name` into segments once
//! - Reject malformed patterns before a route table is frozen
//!
//! # Design Decisions
//! - Patterns are parsed at table construction, never per navigation
//! - A segment starting with `:` is a parameter; everything else is literal
//! - Trailing slash normalization is shared with incoming paths

use std::fmt;

use thiserror::Error;

use super::matcher::{normalize, split_segments};

/// Errors raised while parsing a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("pattern `{pattern}` has an unnamed parameter at segment {index}")]
    EmptyParamName { pattern: String, index: usize },

    #[error("pattern `{pattern}` declares parameter `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },
}

/// One `/`-delimited piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment.
    Literal(String),
    /// Captures any non-empty path segment under this name.
    Param(String),
}

/// A parsed, immutable route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern, validating parameter names.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        let mut segments = Vec::new();
        for (index, piece) in split_segments(normalize(raw)).into_iter().enumerate() {
            let segment = match piece.strip_prefix(':') {
                Some("") => {
                    return Err(PatternError::EmptyParamName {
                        pattern: raw.to_string(),
                        index,
                    })
                }
                Some(name) => {
                    let taken = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if taken {
                        return Err(PatternError::DuplicateParam {
                            pattern: raw.to_string(),
                            name: name.to_string(),
                        });
                    }
                    Segment::Param(name.to_string())
                }
                None => Segment::Literal(piece.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern text as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
