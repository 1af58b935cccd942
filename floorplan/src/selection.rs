//! Selection state machine for desk clicks.
//!
//! At most one marker is selected at a time, and the reservation popover is
//! visible exactly when the selected marker's desk is available. Clicking a
//! desk that is not available selects nothing. The handler owns the single
//! live popover and always disposes it before a replacement is shown, so the
//! popup element never carries two popovers.
//!
//! A click that does not change the selection (empty space while idle, or the
//! desk that is already selected) produces no actions.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use log::debug;

use crate::camera::Point;
use crate::engine::Action;
use crate::layer::DeskMarker;

/// Label of the action control inside the reservation popover.
pub const RESERVE_LABEL: &str = "Reserve now";

/// Title shown in the popover for `desk_id`.
#[must_use]
pub fn popover_title(desk_id: u32) -> String {
    format!("Desk #{desk_id} is available")
}

/// Whether a desk is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected; no popover.
    #[default]
    Idle,
    /// Exactly one available desk selected; its popover is shown.
    Selected { desk_id: u32 },
}

/// A reservation popover anchored on a desk.
#[derive(Debug, Clone, PartialEq)]
pub struct Popover {
    pub desk_id: u32,
    /// World-space anchor: the desk marker's center.
    pub anchor: Point,
    pub title: String,
    pub action_label: &'static str,
}

impl Popover {
    #[must_use]
    pub fn for_marker(marker: &DeskMarker) -> Self {
        Self {
            desk_id: marker.desk_id,
            anchor: marker.center,
            title: popover_title(marker.desk_id),
            action_label: RESERVE_LABEL,
        }
    }
}

/// Owns the selection state and the live popover.
#[derive(Debug, Clone, Default)]
pub struct SelectionHandler {
    state: SelectionState,
    popover: Option<Popover>,
    popovers_created: u64,
}

impl SelectionHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a click whose hit test produced `hit` (`None` for empty space).
    pub fn on_select(&mut self, hit: Option<&DeskMarker>) -> Vec<Action> {
        match (self.state, hit) {
            (SelectionState::Idle, None) => return Vec::new(),
            (SelectionState::Selected { desk_id }, Some(m)) if m.desk_id == desk_id => return Vec::new(),
            _ => {}
        }

        let mut actions = Vec::new();
        if self.popover.take().is_some() {
            actions.push(Action::DisposePopover);
        }

        match hit {
            Some(marker) if marker.is_available() => {
                debug!("desk #{} selected", marker.desk_id);
                let popover = Popover::for_marker(marker);
                self.state = SelectionState::Selected { desk_id: marker.desk_id };
                self.popover = Some(popover.clone());
                self.popovers_created += 1;
                actions.push(Action::ShowPopover(popover));
            }
            Some(marker) => {
                debug!("desk #{} is {:?}; clearing selection", marker.desk_id, marker.status.as_str());
                self.state = SelectionState::Idle;
                actions.push(Action::SelectionCleared);
            }
            None => {
                debug!("selection cleared");
                self.state = SelectionState::Idle;
                actions.push(Action::SelectionCleared);
            }
        }
        actions
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Id of the selected desk, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<u32> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selected { desk_id } => Some(desk_id),
        }
    }

    /// The live popover, if one is shown.
    #[must_use]
    pub fn popover(&self) -> Option<&Popover> {
        self.popover.as_ref()
    }

    /// Total popovers shown since startup.
    #[must_use]
    pub fn popovers_created(&self) -> u64 {
        self.popovers_created
    }
}
