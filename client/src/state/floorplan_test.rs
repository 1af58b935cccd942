use super::*;
use floorplan::desk::DeskRecord;
use floorplan::layer::DeskLayer;
use floorplan::selection::SelectionHandler;

fn show(desk_id: u32) -> Action {
    Action::ShowPopover(Popover {
        desk_id,
        anchor: Point::new(10.0, 20.0),
        title: format!("Desk #{desk_id} is available"),
        action_label: "Reserve now",
    })
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_loading_without_popover() {
    let state = FloorplanState::default();
    assert_eq!(state.load, LoadStatus::Loading);
    assert!(state.popover.is_none());
    assert_eq!(state.cursor, Cursor::Default);
}

// =============================================================
// apply
// =============================================================

#[test]
fn show_popover_mirrors_title_and_label() {
    let mut state = FloorplanState::default();
    state.apply(&show(4));
    let view = state.popover.as_ref().unwrap();
    assert_eq!(view.desk_id, 4);
    assert_eq!(view.title, "Desk #4 is available");
    assert_eq!(view.action_label, "Reserve now");
    assert!(view.position.is_none());
}

#[test]
fn dispose_and_clear_hide_popover() {
    let mut state = FloorplanState::default();
    state.apply(&show(1));
    state.apply(&Action::DisposePopover);
    assert!(state.popover.is_none());

    state.apply(&show(1));
    state.apply(&Action::SelectionCleared);
    assert!(state.popover.is_none());
}

#[test]
fn set_cursor_is_mirrored() {
    let mut state = FloorplanState::default();
    state.apply(&Action::SetCursor(Cursor::NotAllowed));
    assert_eq!(state.cursor, Cursor::NotAllowed);
}

#[test]
fn render_needed_changes_nothing() {
    let mut state = FloorplanState::default();
    state.apply(&show(2));
    state.apply(&Action::RenderNeeded);
    assert_eq!(state.popover.as_ref().map(|p| p.desk_id), Some(2));
}

#[test]
fn engine_actions_for_available_then_occupied() {
    let layer = DeskLayer::build(&[
        DeskRecord::new(0.0, 0.0, "Available"),
        DeskRecord::new(50.0, 0.0, "Occupied"),
    ]);
    let mut handler = SelectionHandler::new();
    let mut state = FloorplanState::default();

    for a in handler.on_select(layer.get(1)) {
        state.apply(&a);
    }
    assert_eq!(state.popover.as_ref().map(|p| p.title.as_str()), Some("Desk #1 is available"));

    for a in handler.on_select(layer.get(2)) {
        state.apply(&a);
    }
    assert!(state.popover.is_none());
}

// =============================================================
// Popup placement
// =============================================================

#[test]
fn popup_hidden_without_popover() {
    let mut state = FloorplanState::default();
    state.reposition(Some(Point::new(5.0, 5.0)));
    assert_eq!(state.popup_style(), "display: none;");
}

#[test]
fn popup_hidden_until_positioned() {
    let mut state = FloorplanState::default();
    state.apply(&show(1));
    assert_eq!(state.popup_style(), "display: none;");
}

#[test]
fn popup_positioned_at_anchor() {
    let mut state = FloorplanState::default();
    state.apply(&show(1));
    state.reposition(Some(Point::new(400.0, 300.5)));
    assert_eq!(state.popup_style(), "left: 400.00px; top: 300.50px;");
}

#[test]
fn needs_render_detects_request() {
    assert!(!needs_render(&[]));
    assert!(!needs_render(&[Action::DisposePopover]));
    assert!(needs_render(&[Action::SelectionCleared, Action::RenderNeeded]));
}
