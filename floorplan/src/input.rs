//! Input model: mouse buttons, wheel deltas, cursor affordance, and the
//! gesture state machine.
//!
//! `InputState` tracks the active gesture between pointer-down and
//! pointer-up. A press that stays within [`crate::consts::DRAG_TOLERANCE_PX`]
//! of its start is a click; anything further becomes a pan. A second pointer
//! touching down mid-press turns the press into a pan, so multi-touch never
//! selects a desk.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::layer::DeskMarker;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Mouse cursor shown over the map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Over a reservable desk.
    Pointer,
    /// Over a desk that cannot be reserved.
    NotAllowed,
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::NotAllowed => "not-allowed",
        }
    }
}

/// Cursor for the marker under the pointer (`None` for empty space).
#[must_use]
pub fn cursor_for(hit: Option<&DeskMarker>) -> Cursor {
    match hit {
        Some(m) if m.is_available() => Cursor::Pointer,
        Some(_) => Cursor::NotAllowed,
        None => Cursor::Default,
    }
}

/// Browser pointer identifier (`PointerEvent.pointerId`).
pub type PointerId = i32;

/// Internal state for the gesture state machine.
///
/// A gesture belongs to the pointer that started it. Events from any other
/// pointer never advance it.
#[derive(Debug, Clone, Copy, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The primary button is down and has not moved past the drag tolerance.
    Pressed {
        pointer_id: PointerId,
        /// Screen-space position of the pointer-down.
        start_screen: Point,
    },
    /// The user is panning the map by dragging.
    Panning {
        pointer_id: PointerId,
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
}

impl InputState {
    /// The pointer that owns the active gesture, if any.
    #[must_use]
    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::Idle => None,
            Self::Pressed { pointer_id, .. } | Self::Panning { pointer_id, .. } => Some(*pointer_id),
        }
    }

    /// Whether `pointer_id` is some pointer other than the gesture's owner.
    #[must_use]
    pub fn is_foreign(&self, pointer_id: PointerId) -> bool {
        self.pointer_id().is_some_and(|owner| owner != pointer_id)
    }
}
