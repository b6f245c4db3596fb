//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (pathname)
//!     → router.rs (route lookup, declaration order)
//!     → matcher.rs (normalize, split, match segments)
//!     → Return: matched Route + Params, or NoMatch
//!
//! Route Compilation (at startup):
//!     route declarations (config or built-in)
//!     → pattern.rs (parse & validate)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by declaration)

pub mod matcher;
pub mod pattern;
pub mod router;

pub use matcher::{MatchMode, Params};
pub use pattern::{PathPattern, PatternError};
pub use router::{MatchResult, Route, RouteMatch, RouteTable, Router};
