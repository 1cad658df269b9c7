//! Previous / Home / Next button models.

use crate::model::section::Section;
use crate::nav::state::NavigationState;
use serde::Serialize;

/// One rendered navigation button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub label: String,
    pub target: Section,
}

/// Button row shown under every page.
///
/// `previous`/`next` are absent at the chain boundaries, matching the inert
/// state-machine transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavControls {
    pub previous: Option<NavButton>,
    pub home: NavButton,
    pub next: Option<NavButton>,
}

impl NavControls {
    pub fn for_state(state: &NavigationState) -> Self {
        Self {
            previous: state.previous_target().map(|target| NavButton {
                label: format!("← {target}"),
                target,
            }),
            home: NavButton {
                label: Section::Home.label().to_string(),
                target: Section::Home,
            },
            next: state.next_target().map(|target| NavButton {
                label: format!("{target} →"),
                target,
            }),
        }
    }
}
