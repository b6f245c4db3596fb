//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks against the page registry)
//!     → AppConfig (validated, immutable)
//!     → app shell builds the RouteTable once
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never changes at runtime
//! - All fields have defaults; an empty file yields the built-in route table
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    default_routes, AppConfig, GeneratorConfig, HistoryConfig, LogFormat, ObservabilityConfig, RouteConfig,
};
pub use validation::{validate_config, ValidationError};
