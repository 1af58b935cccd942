#[cfg(test)]
#[path = "floorplan_test.rs"]
mod floorplan_test;

use floorplan::camera::Point;
use floorplan::engine::Action;
use floorplan::input::Cursor;
use floorplan::selection::Popover;

/// Progress of the startup sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    /// Waiting for the floor image.
    #[default]
    Loading,
    /// Engine is mounted over an image of this size.
    Ready { width: f64, height: f64 },
    /// Startup failed; the message is shown in place of the map.
    Failed(String),
}

/// The reservation popover as the UI renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverView {
    pub desk_id: u32,
    pub title: String,
    pub action_label: String,
    /// Screen position of the popup element, once known.
    pub position: Option<Point>,
}

impl From<&Popover> for PopoverView {
    fn from(p: &Popover) -> Self {
        Self { desk_id: p.desk_id, title: p.title.clone(), action_label: p.action_label.to_owned(), position: None }
    }
}

/// UI state mirrored from the floorplan engine.
#[derive(Clone, Debug, Default)]
pub struct FloorplanState {
    pub load: LoadStatus,
    pub popover: Option<PopoverView>,
    pub cursor: Cursor,
}

impl FloorplanState {
    /// Mirror a single engine action. Render requests are the host's concern.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::ShowPopover(p) => self.popover = Some(PopoverView::from(p)),
            Action::DisposePopover | Action::SelectionCleared => self.popover = None,
            Action::SetCursor(c) => self.cursor = *c,
            Action::RenderNeeded => {}
        }
    }

    /// Move the popup to the engine's current anchor position.
    pub fn reposition(&mut self, anchor: Option<Point>) {
        if let Some(view) = self.popover.as_mut() {
            view.position = anchor;
        }
    }

    /// Inline style for the popup element: hidden unless a placed popover exists.
    #[must_use]
    pub fn popup_style(&self) -> String {
        match self.popover.as_ref().and_then(|p| p.position) {
            Some(pt) => format!("left: {:.2}px; top: {:.2}px;", pt.x, pt.y),
            None => "display: none;".to_owned(),
        }
    }
}

/// Whether any action asks for a redraw.
#[must_use]
pub fn needs_render(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}
