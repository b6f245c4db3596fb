//! Navigation history.
//!
//! # Data Flow
//! ```text
//! push / replace / go
//!     → memory.rs (entry stack + cursor)
//!     → location.rs (split pathname, search, hash; assign key)
//!     → NavigationEvent handed to the app shell
//! ```
//!
//! # Design Decisions
//! - Stands in for the browser history; no persistence
//! - Every entry gets a fresh UUID key, matching what the shell logs
//! - Moving past either end is a no-op, not an error

pub mod location;
pub mod memory;

pub use location::{Location, LocationError};
pub use memory::{Action, MemoryHistory, NavigationEvent};
