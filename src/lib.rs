//! Client-side page router for the meme generator.

pub mod app;
pub mod config;
pub mod generator;
pub mod history;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod shell;

pub use app::{App, Rendered};
pub use config::AppConfig;
pub use routing::{MatchResult, Router};
pub use shell::Shell;
