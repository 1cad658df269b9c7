//! Navigation state machine.

use crate::model::section::Section;
use log::debug;
use serde::{Deserialize, Serialize};

/// User navigation intent coming from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "section", rename_all = "snake_case")]
pub enum NavAction {
    /// Direct menu selection.
    Select(Section),
    Previous,
    Next,
    Home,
}

/// Currently selected section.
///
/// Owned by the caller (session or test) and passed where needed; there is
/// no process-global selection in core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    current: Section,
}

impl NavigationState {
    /// Starts at Home.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts at `section`; used to restore a shell-held selection.
    pub fn at(section: Section) -> Self {
        Self { current: section }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Unconditional jump.
    pub fn select(&mut self, section: Section) {
        self.move_to(section);
    }

    /// Unconditional jump to Home.
    pub fn home(&mut self) {
        self.move_to(Section::Home);
    }

    /// Target of `previous()`, or `None` at Home and the first decade.
    pub fn previous_target(&self) -> Option<Section> {
        let index = self.current.index();
        if index > 1 {
            Section::from_index(index - 1)
        } else {
            None
        }
    }

    /// Target of `next()`, or `None` at the last decade and About.
    pub fn next_target(&self) -> Option<Section> {
        let index = self.current.index();
        if index < Section::COUNT - 2 {
            Section::from_index(index + 1)
        } else {
            None
        }
    }

    /// Steps back one section. Returns the new section, or `None` when inert.
    pub fn previous(&mut self) -> Option<Section> {
        let target = self.previous_target()?;
        self.move_to(target);
        Some(target)
    }

    /// Steps forward one section. Returns the new section, or `None` when inert.
    pub fn next(&mut self) -> Option<Section> {
        let target = self.next_target()?;
        self.move_to(target);
        Some(target)
    }

    /// Applies one shell action; returns whether the selection changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        let before = self.current;
        match action {
            NavAction::Select(section) => self.select(section),
            NavAction::Previous => {
                self.previous();
            }
            NavAction::Next => {
                self.next();
            }
            NavAction::Home => self.home(),
        }
        before != self.current
    }

    fn move_to(&mut self, section: Section) {
        if self.current != section {
            debug!(
                "event=nav_move module=nav status=ok from={} to={}",
                self.current, section
            );
        }
        self.current = section;
    }
}
