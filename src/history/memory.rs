//! In-memory history stack.

use serde::Serialize;

use super::location::{Location, LocationError};

/// What caused a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Push,
    Replace,
    Pop,
}

/// A history change and the location it landed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    pub action: Action,
    pub location: Location,
}

/// Navigation history kept in memory.
///
/// Always holds at least one entry. `push` discards any forward entries.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Result<Self, LocationError> {
        Ok(Self {
            entries: vec![Location::parse(initial)?],
            index: 0,
        })
    }

    /// The current entry.
    pub fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Rejected targets leave the history untouched.
    pub fn push(&mut self, target: &str) -> Result<NavigationEvent, LocationError> {
        let location = Location::parse(target)?;
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
        Ok(self.event(Action::Push))
    }

    pub fn replace(&mut self, target: &str) -> Result<NavigationEvent, LocationError> {
        self.entries[self.index] = Location::parse(target)?;
        Ok(self.event(Action::Replace))
    }

    /// Move `delta` entries; `None` if that leaves the stack.
    ///
    /// `go(0)` re-emits the current entry.
    pub fn go(&mut self, delta: isize) -> Option<NavigationEvent> {
        let target = self.index.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.index = target;
        Some(self.event(Action::Pop))
    }

    pub fn back(&mut self) -> Option<NavigationEvent> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<NavigationEvent> {
        self.go(1)
    }

    fn event(&self, action: Action) -> NavigationEvent {
        NavigationEvent {
            action,
            location: self.location().clone(),
        }
    }
}
