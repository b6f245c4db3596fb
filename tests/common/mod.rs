//! Shared helpers for integration tests.

use std::path::PathBuf;

use page_router::config::AppConfig;
use page_router::pages::PageRegistry;
use page_router::{App, Shell};

/// App built from the default route table.
pub fn builtin_app() -> App {
    App::from_config(&AppConfig::default(), &PageRegistry::builtin()).unwrap()
}

/// Shell over the default app, starting at `/`.
#[allow(dead_code)]
pub fn builtin_shell() -> Shell {
    Shell::new(builtin_app(), "/").unwrap()
}

/// Write `contents` to a fresh file under the temp dir.
#[allow(dead_code)]
pub fn write_config(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("page-router-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}
