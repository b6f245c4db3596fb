//! Page handlers.
//!
//! # Responsibilities
//! - Define the seam between the router and the pages it mounts
//! - Provide the application's pages and the not-found fallback
//! - Map page names (as written in config) to handlers
//!
//! # Design Decisions
//! - Pages are opaque to the router: they receive captured params only
//! - A page returns a [`View`] describing what it mounts; rendering proper
//!   belongs to the host
//! - Handlers are shared as `Arc<dyn PageHandler>` and never mutated

mod builtin;
mod registry;

use std::fmt::Debug;

use serde::Serialize;

use crate::generator::RenderPlan;
use crate::routing::Params;

pub use builtin::{InputMemePage, MainPage, NotFoundPage, ResultPage, SelectPage};
pub use registry::PageRegistry;

/// Description of a mounted page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub page: String,
    pub title: String,
    pub params: Params,
    /// Render plan of the generated meme, shown by the Result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<RenderPlan>,
}

/// A renderable page the router can dispatch to.
pub trait PageHandler: Send + Sync + Debug {
    /// Name used to bind routes to this page.
    fn name(&self) -> &str;

    /// Mount the page with the parameters captured from the path.
    fn render(&self, params: &Params) -> View;
}
