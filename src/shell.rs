//! Headless navigation driver.
//!
//! Reads one navigation command per line and feeds it through the history and
//! the app shell:
//!
//! ```text
//! push <url> | replace <url> | back | forward | go <n> | <url>
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::app::{App, Rendered};
use crate::history::{LocationError, MemoryHistory, NavigationEvent};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{0}` needs a target")]
    MissingTarget(&'static str),

    #[error("invalid history offset `{0}`")]
    Offset(String),

    #[error(transparent)]
    Target(#[from] LocationError),
}

/// One line of driver input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(String),
    Replace(String),
    Go(isize),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let target = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingTarget(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "push" => Ok(Command::Push(target("push")?)),
            "replace" => Ok(Command::Replace(target("replace")?)),
            "back" => Ok(Command::Go(-1)),
            "forward" => Ok(Command::Go(1)),
            "go" => rest
                .parse()
                .map(Command::Go)
                .map_err(|_| CommandError::Offset(rest.to_string())),
            _ if word.starts_with('/') || word.contains("://") => Ok(Command::Push(line.to_string())),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// History plus app: turns commands into rendered views.
#[derive(Debug)]
pub struct Shell {
    app: App,
    history: MemoryHistory,
}

impl Shell {
    pub fn new(app: App, initial_path: &str) -> Result<Self, LocationError> {
        Ok(Self {
            app,
            history: MemoryHistory::new(initial_path)?,
        })
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    /// Render the current entry, as on initial load.
    pub fn start(&self) -> Rendered {
        let location = self.history.location().clone();
        tracing::debug!(key = %location.key, href = %location.href(), "Initial load");
        self.app.render(&location)
    }

    /// Apply one command. `Ok(None)` when the history did not move.
    pub fn execute(&mut self, command: Command) -> Result<Option<Rendered>, LocationError> {
        let event: Option<NavigationEvent> = match command {
            Command::Push(target) => Some(self.history.push(&target)?),
            Command::Replace(target) => Some(self.history.replace(&target)?),
            Command::Go(delta) => self.history.go(delta),
        };

        match event {
            Some(event) => Ok(Some(self.app.dispatch(&event))),
            None => {
                tracing::debug!(index = self.history.index(), "History did not move");
                Ok(None)
            }
        }
    }

    /// Parse and apply one input line. Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Rendered>, CommandError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let command = line.parse::<Command>()?;
        Ok(self.execute(command)?)
    }
}
