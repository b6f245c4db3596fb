//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::generator::{build_plan, ClipInfo, PlanError, RenderPlan, Track, DEFAULT_MIN_PITCH};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Route declarations in precedence order.
    pub routes: Vec<RouteConfig>,

    /// Navigation history settings.
    pub history: HistoryConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Meme render plan shown on the Result page.
    pub generator: Option<GeneratorConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
            history: HistoryConfig::default(),
            observability: ObservabilityConfig::default(),
            generator: None,
        }
    }
}

/// A route binding a path pattern to a page by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern, e.g. `/select/:name`.
    pub path: String,

    /// Registered page name.
    pub page: String,

    /// Require the whole path to match instead of a leading part.
    #[serde(default)]
    pub exact: bool,

    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, page: impl Into<String>, exact: bool) -> Self {
        Self {
            path: path.into(),
            page: page.into(),
            exact,
            case_sensitive: default_case_sensitive(),
        }
    }
}

fn default_case_sensitive() -> bool {
    true
}

/// The application's route table.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "Main", true),
        RouteConfig::new("/input-meme", "InputMeme", false),
        RouteConfig::new("/select/:name", "Select", false),
        RouteConfig::new("/result", "Result", false),
    ]
}

/// Navigation history settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Entry rendered before any navigation is read.
    pub initial_path: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
        }
    }
}

/// Source clip lengths and the melody to set them to.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    pub block_length_secs: f64,
    pub clip_duration_secs: f64,

    /// Notes at or below this MIDI pitch are skipped.
    #[serde(default = "default_min_pitch")]
    pub min_pitch: u8,

    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl GeneratorConfig {
    pub fn clip(&self) -> ClipInfo {
        ClipInfo {
            block_length_secs: self.block_length_secs,
            clip_duration_secs: self.clip_duration_secs,
        }
    }

    pub fn plan(&self) -> Result<RenderPlan, PlanError> {
        build_plan(&self.tracks, &self.clip(), self.min_pitch)
    }
}

fn default_min_pitch() -> u8 {
    DEFAULT_MIN_PITCH
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.routes, default_routes());
        assert_eq!(config.history.initial_path, "/");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(config.generator.is_none());
    }

    #[test]
    fn test_generator_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [generator]
            block_length_secs = 1.5
            clip_duration_secs = 3.0

            [[generator.tracks]]
            notes = [
                { pitch = 72, start = 0.0, end = 0.5 },
                { pitch = 60, start = 0.5, end = 1.0 },
            ]

            [[generator.tracks]]
            "#,
        )
        .unwrap();

        let generator = config.generator.unwrap();
        assert_eq!(generator.min_pitch, DEFAULT_MIN_PITCH);
        assert_eq!(generator.tracks.len(), 2);
        assert!(generator.tracks[1].notes.is_empty());
        assert_eq!(generator.tracks[0].notes[1].pitch, 60);

        let plan = generator.plan().unwrap();
        assert_eq!(plan.reference_pitch, 72);
        assert_eq!(plan.segments.len(), 2);
    }

    #[test]
    fn test_route_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [observability]
            log_format = "json"

            [[routes]]
            path = "/gallery"
            page = "Main"
            case_sensitive = false
            "#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 1);
        let route = &config.routes[0];
        assert!(!route.exact);
        assert!(!route.case_sensitive);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_default_table_declaration() {
        let routes = default_routes();
        let exact: Vec<_> = routes.iter().filter(|r| r.exact).map(|r| r.path.as_str()).collect();
        assert_eq!(exact, vec!["/"]);
        assert!(routes.iter().all(|r| r.case_sensitive));
    }
}
