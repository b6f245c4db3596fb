//! The meme generator's pages.

use super::{PageHandler, View};
use crate::generator::RenderPlan;
use crate::routing::Params;

fn view(page: &str, title: impl Into<String>, params: &Params) -> View {
    View {
        page: page.to_string(),
        title: title.into(),
        params: params.clone(),
        plan: None,
    }
}

/// Landing page.
#[derive(Debug, Default)]
pub struct MainPage;

impl PageHandler for MainPage {
    fn name(&self) -> &str {
        "Main"
    }

    fn render(&self, params: &Params) -> View {
        view(self.name(), "Meme Generator", params)
    }
}

/// Upload form for the source meme.
#[derive(Debug, Default)]
pub struct InputMemePage;

impl PageHandler for InputMemePage {
    fn name(&self) -> &str {
        "InputMeme"
    }

    fn render(&self, params: &Params) -> View {
        view(self.name(), "Upload a meme", params)
    }
}

/// Melody selection for a named meme.
#[derive(Debug, Default)]
pub struct SelectPage;

impl PageHandler for SelectPage {
    fn name(&self) -> &str {
        "Select"
    }

    fn render(&self, params: &Params) -> View {
        // The value is shown exactly as it appeared in the path.
        let title = match params.get("name") {
            Some(name) => format!("Select a melody for {}", name),
            None => "Select a melody".to_string(),
        };
        view(self.name(), title, params)
    }
}

/// Generated video.
#[derive(Debug, Default)]
pub struct ResultPage {
    plan: Option<RenderPlan>,
}

impl ResultPage {
    pub fn with_plan(plan: RenderPlan) -> Self {
        Self { plan: Some(plan) }
    }

    pub fn plan(&self) -> Option<&RenderPlan> {
        self.plan.as_ref()
    }
}

impl PageHandler for ResultPage {
    fn name(&self) -> &str {
        "Result"
    }

    fn render(&self, params: &Params) -> View {
        View {
            plan: self.plan.clone(),
            ..view(self.name(), "Your meme", params)
        }
    }
}

/// Fallback for paths no route accepts.
#[derive(Debug, Default)]
pub struct NotFoundPage;

impl PageHandler for NotFoundPage {
    fn name(&self) -> &str {
        "NotFound"
    }

    fn render(&self, params: &Params) -> View {
        view(self.name(), "Page not found", params)
    }
}
