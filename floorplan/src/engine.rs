use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Size};
use crate::consts::{DRAG_TOLERANCE_PX, WHEEL_ZOOM_STEP};
use crate::desk::DeskRecord;
use crate::error::FloorplanError;
use crate::extent::{Extent, Projection};
use crate::hit::hit_test;
use crate::input::{Button, Cursor, InputState, PointerId, WheelDelta, cursor_for};
use crate::layer::{DeskLayer, DeskMarker};
use crate::loader::FloorImage;
use crate::render;
use crate::selection::{Popover, SelectionHandler, SelectionState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show a reservation popover on the popup element.
    ShowPopover(Popover),
    /// Destroy the popover currently attached to the popup element.
    DisposePopover,
    /// The selection set is now empty.
    SelectionCleared,
    /// New CSS cursor for the map viewport.
    SetCursor(Cursor),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub projection: Projection,
    pub camera: Camera,
    pub layer: DeskLayer,
    pub selection: SelectionHandler,
    pub input: InputState,
    pub cursor: Cursor,
    pub viewport: Size,
    pub dpr: f64,
}

impl EngineCore {
    /// Engine over a floor image covering `extent`, with one marker per desk.
    #[must_use]
    pub fn new(extent: Extent, desks: &[DeskRecord]) -> Self {
        let layer = DeskLayer::build(desks);
        let projection = Projection::pixels(extent);
        info!(
            "desk layer built: {} markers, {} available, projection {} ({:?}) extent {:?}",
            layer.len(),
            layer.available_count(),
            projection.code,
            projection.units,
            extent.to_array()
        );
        Self {
            projection,
            camera: Camera::for_extent(&extent),
            layer,
            selection: SelectionHandler::new(),
            input: InputState::Idle,
            cursor: Cursor::Default,
            viewport: Size::new(0.0, 0.0),
            dpr: 1.0,
        }
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport = Size::new(width_css.max(0.0), height_css.max(0.0));
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Input events ---

    /// A pointer went down. Only the primary button starts a gesture; a second
    /// pointer arriving mid-press cancels the pending click.
    pub fn on_pointer_down(&mut self, pointer_id: PointerId, screen_pt: Point, button: Button) -> Vec<Action> {
        match self.input {
            InputState::Idle => {
                if button == Button::Primary {
                    self.input = InputState::Pressed { pointer_id, start_screen: screen_pt };
                }
            }
            InputState::Pressed { pointer_id: owner, start_screen } if owner != pointer_id => {
                self.input = InputState::Panning { pointer_id: owner, last_screen: start_screen };
            }
            InputState::Pressed { .. } | InputState::Panning { .. } => {}
        }
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, pointer_id: PointerId, screen_pt: Point) -> Vec<Action> {
        if self.input.is_foreign(pointer_id) {
            return Vec::new();
        }
        match self.input {
            InputState::Idle => self.update_cursor(screen_pt).into_iter().collect(),
            InputState::Pressed { start_screen, .. } => {
                let dx = screen_pt.x - start_screen.x;
                let dy = screen_pt.y - start_screen.y;
                if dx.hypot(dy) <= DRAG_TOLERANCE_PX {
                    return Vec::new();
                }
                self.camera.pan_by_screen(dx, dy);
                self.input = InputState::Panning { pointer_id, last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::Panning { last_screen, .. } => {
                self.camera
                    .pan_by_screen(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { pointer_id, last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, pointer_id: PointerId, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input.is_foreign(pointer_id) {
            return Vec::new();
        }
        let gesture = std::mem::take(&mut self.input);
        let mut actions = match gesture {
            InputState::Pressed { .. } => self.click(screen_pt),
            InputState::Idle | InputState::Panning { .. } => Vec::new(),
        };
        actions.extend(self.update_cursor(screen_pt));
        actions
    }

    /// A pointer left the viewport: abandon its gesture and reset the cursor.
    pub fn on_pointer_leave(&mut self, pointer_id: PointerId) -> Vec<Action> {
        if self.input.is_foreign(pointer_id) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        self.set_cursor(Cursor::Default).into_iter().collect()
    }

    /// Zoom one step in (wheel up) or out (wheel down), anchored on the pointer.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let step = if delta.dy < 0.0 {
            WHEEL_ZOOM_STEP
        } else if delta.dy > 0.0 {
            -WHEEL_ZOOM_STEP
        } else {
            return Vec::new();
        };
        if self.camera.zoom_at(screen_pt, self.viewport, step) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Run the selection state machine for a click at `screen_pt`.
    pub fn click(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt, self.viewport);
        let hit = hit_test(world, &self.layer);
        let mut actions = self.selection.on_select(hit);
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn update_cursor(&mut self, screen_pt: Point) -> Option<Action> {
        let cursor = cursor_for(self.marker_at(screen_pt));
        self.set_cursor(cursor)
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Option<Action> {
        if self.cursor == cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor(cursor))
    }

    // --- Queries ---

    /// The topmost marker under a screen-space point.
    #[must_use]
    pub fn marker_at(&self, screen_pt: Point) -> Option<&DeskMarker> {
        let world = self.camera.screen_to_world(screen_pt, self.viewport);
        hit_test(world, &self.layer)
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    /// The live popover, if any.
    #[must_use]
    pub fn popover(&self) -> Option<&Popover> {
        self.selection.popover()
    }

    /// Screen position of the live popover's anchor, for placing the popup element.
    #[must_use]
    pub fn popup_screen_position(&self) -> Option<Point> {
        self.selection
            .popover()
            .map(|p| self.camera.world_to_screen(p.anchor, self.viewport))
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }
}

/// The full floorplan engine. Wraps `EngineCore` and owns the browser canvas
/// element, its 2D context, and the loaded floor image.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: FloorImage,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine drawing `image` and `desks` onto `canvas`.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, image: FloorImage, desks: &[DeskRecord]) -> Result<Self, FloorplanError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FloorplanError::js("canvas.getContext", &e))?
            .ok_or(FloorplanError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FloorplanError::MissingContext)?;
        let core = EngineCore::new(image.extent(), desks);
        Ok(Self { canvas, ctx, image, core })
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the canvas backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let w = (self.core.viewport.width * self.core.dpr).round() as u32;
        let h = (self.core.viewport.height * self.core.dpr).round() as u32;
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pointer_id: PointerId, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pointer_id, screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, pointer_id: PointerId, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pointer_id, screen_pt)
    }

    pub fn on_pointer_up(&mut self, pointer_id: PointerId, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(pointer_id, screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self, pointer_id: PointerId) -> Vec<Action> {
        self.core.on_pointer_leave(pointer_id)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns the underlying `Canvas2D` error if a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, self.image.element(), &self.core).inspect_err(|e| warn!("render failed: {e:?}"))
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn popup_screen_position(&self) -> Option<Point> {
        self.core.popup_screen_position()
    }
}
