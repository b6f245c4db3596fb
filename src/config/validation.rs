//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (routes reference registered pages)
//! - Parse every route pattern before the table is built
//! - Check the log filter and initial path
//! - Build the render plan once so a bad melody fails at load time
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: (AppConfig, PageRegistry) → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;
use crate::generator::PlanError;
use crate::pages::PageRegistry;
use crate::routing::{PathPattern, PatternError};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routes declared")]
    EmptyRouteTable,

    #[error("route #{index}: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: PatternError,
    },

    #[error("route #{index} ({path}): unknown page `{page}`")]
    UnknownPage {
        index: usize,
        path: String,
        page: String,
    },

    #[error("initial path `{0}` must start with `/`")]
    InitialPath(String),

    #[error("invalid log filter `{filter}`: {reason}")]
    LogFilter { filter: String, reason: String },

    #[error("generator: {0}")]
    Generator(#[source] PlanError),
}

pub fn validate_config(config: &AppConfig, pages: &PageRegistry) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::EmptyRouteTable);
    }

    for (index, route) in config.routes.iter().enumerate() {
        if let Err(source) = PathPattern::parse(&route.path) {
            errors.push(ValidationError::InvalidPattern { index, source });
        }
        if !pages.contains(&route.page) {
            errors.push(ValidationError::UnknownPage {
                index,
                path: route.path.clone(),
                page: route.page.clone(),
            });
        }
    }

    if !config.history.initial_path.starts_with('/') {
        errors.push(ValidationError::InitialPath(config.history.initial_path.clone()));
    }

    if let Err(e) = EnvFilter::try_new(&config.observability.log_level) {
        errors.push(ValidationError::LogFilter {
            filter: config.observability.log_level.clone(),
            reason: e.to_string(),
        });
    }

    if let Some(generator) = &config.generator {
        if let Err(e) = generator.plan() {
            errors.push(ValidationError::Generator(e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{GeneratorConfig, RouteConfig};
    use crate::generator::{Note, Track};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default(), &PageRegistry::builtin()).is_ok());
    }

    #[test]
    fn test_empty_routes() {
        let config = AppConfig {
            routes: vec![],
            ..AppConfig::default()
        };
        let errors = validate_config(&config, &PageRegistry::builtin()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyRouteTable]);
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig {
            routes: vec![
                RouteConfig::new("select/:name", "Select", false),
                RouteConfig::new("/gallery", "Gallery", false),
            ],
            ..AppConfig::default()
        };
        config.history.initial_path = "result".into();

        let errors = validate_config(&config, &PageRegistry::builtin()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            errors[0],
            ValidationError::InvalidPattern {
                index: 0,
                source: PatternError::MissingLeadingSlash(_)
            }
        ));
        assert!(matches!(&errors[1], ValidationError::UnknownPage { index: 1, page, .. } if page == "Gallery"));
        assert_eq!(errors[2], ValidationError::InitialPath("result".into()));
    }

    #[test]
    fn test_generator_without_melody() {
        let config = AppConfig {
            generator: Some(GeneratorConfig {
                block_length_secs: 1.0,
                clip_duration_secs: 2.0,
                min_pitch: 65,
                tracks: vec![],
            }),
            ..AppConfig::default()
        };
        let errors = validate_config(&config, &PageRegistry::builtin()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::Generator(PlanError::EmptyMelody)]);
    }

    #[test]
    fn test_generator_bad_clip() {
        let config = AppConfig {
            generator: Some(GeneratorConfig {
                block_length_secs: 1.0,
                clip_duration_secs: -2.0,
                min_pitch: 65,
                tracks: vec![Track::new(vec![Note::new(70, 0.0, 1.0)])],
            }),
            ..AppConfig::default()
        };
        let errors = validate_config(&config, &PageRegistry::builtin()).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::Generator(PlanError::InvalidClip("clip_duration_secs"))]
        );
    }
}
