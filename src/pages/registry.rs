//! Name-keyed page lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::{InputMemePage, MainPage, PageHandler, ResultPage, SelectPage};
use crate::config::AppConfig;
use crate::generator::{PlanError, RenderPlan};

/// Maps page names to handlers.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: HashMap<String, Arc<dyn PageHandler>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `Main`, `InputMeme`, `Select` and `Result`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(MainPage));
        registry.register(Arc::new(InputMemePage));
        registry.register(Arc::new(SelectPage));
        registry.register(Arc::new(ResultPage::default()));
        registry
    }

    /// Built-in pages, with the Result page showing the configured generator's plan.
    pub fn for_config(config: &AppConfig) -> Result<Self, PlanError> {
        let registry = Self::builtin();
        match &config.generator {
            Some(generator) => Ok(registry.with_plan(generator.plan()?)),
            None => Ok(registry),
        }
    }

    pub fn with_plan(mut self, plan: RenderPlan) -> Self {
        tracing::debug!(segments = plan.segments.len(), "Result page carries render plan");
        self.register(Arc::new(ResultPage::with_plan(plan)));
        self
    }

    /// Register a handler under its own name, replacing any previous one.
    pub fn register(&mut self, page: Arc<dyn PageHandler>) {
        self.pages.insert(page.name().to_string(), page);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn PageHandler>> {
        self.pages.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
