//! Application shell.
//!
//! # Responsibilities
//! - Bind configured routes to page handlers and freeze the router
//! - Resolve each navigation and mount exactly one page
//! - Fall back to the not-found page when no route matches
//!
//! # Design Decisions
//! - The router is built once and only read afterwards
//! - Rendering a navigation is synchronous and never fails

use std::io::{self, Write};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::history::{Location, NavigationEvent};
use crate::pages::{NotFoundPage, PageHandler, PageRegistry, View};
use crate::routing::{MatchMode, MatchResult, Params, PatternError, RouteTable, Router};

/// Shared page handle stored in the route table.
pub type PageRef = Arc<dyn PageHandler>;

/// Errors raised while assembling the shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("route `{path}` references unknown page `{page}`")]
    UnknownPage { path: String, page: String },
}

/// Output of one navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub key: Uuid,
    pub pathname: String,
    pub matched: bool,
    pub view: View,
}

impl Rendered {
    /// Write as one line of JSON.
    pub fn write_line(&self, out: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }
}

/// Owns the router and mounts pages for navigations.
#[derive(Debug, Clone)]
pub struct App {
    router: Router<PageRef>,
    not_found: PageRef,
}

impl App {
    pub fn new(router: Router<PageRef>, not_found: PageRef) -> Self {
        Self { router, not_found }
    }

    /// Build the router from configured routes, looking pages up by name.
    pub fn from_config(config: &AppConfig, pages: &PageRegistry) -> Result<Self, AppError> {
        let mut builder = RouteTable::builder();
        for route in &config.routes {
            let page = pages.get(&route.page).ok_or_else(|| AppError::UnknownPage {
                path: route.path.clone(),
                page: route.page.clone(),
            })?;
            builder = builder.route(
                route.path.as_str(),
                MatchMode::from_exact(route.exact),
                route.case_sensitive,
                page,
            );
        }
        let table = builder.build()?;

        tracing::debug!(routes = table.len(), "Route table built");
        Ok(Self::new(Router::new(table), Arc::new(NotFoundPage)))
    }

    pub fn router(&self) -> &Router<PageRef> {
        &self.router
    }

    /// One tab-separated line per route, in precedence order:
    /// pattern, mode, case sensitivity, page.
    pub fn write_routes(&self, out: &mut impl Write) -> io::Result<()> {
        for route in self.router.table().iter() {
            let case = if route.case_sensitive() {
                "case-sensitive"
            } else {
                "case-insensitive"
            };
            writeln!(
                out,
                "{}\t{:?}\t{}\t{}",
                route.pattern(),
                route.mode(),
                case,
                route.handler().name()
            )?;
        }
        Ok(())
    }

    /// Mount the page for `location`, or the not-found page.
    pub fn render(&self, location: &Location) -> Rendered {
        let (matched, view) = match self.router.resolve(&location.pathname) {
            MatchResult::Matched(m) => (true, m.handler().render(&m.params)),
            MatchResult::NoMatch => (false, self.not_found.render(&Params::new())),
        };

        Rendered {
            key: location.key,
            pathname: location.pathname.clone(),
            matched,
            view,
        }
    }

    /// Render a history event and log the outcome.
    pub fn dispatch(&self, event: &NavigationEvent) -> Rendered {
        let rendered = self.render(&event.location);

        if rendered.matched {
            tracing::info!(
                key = %rendered.key,
                action = ?event.action,
                pathname = %rendered.pathname,
                page = %rendered.view.page,
                "Navigation rendered"
            );
        } else {
            tracing::warn!(
                key = %rendered.key,
                action = ?event.action,
                pathname = %rendered.pathname,
                "No route matched, rendering fallback"
            );
        }

        rendered
    }
}
