//! Rendering: draws the floorplan scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of engine state and produces pixels. It does
//! not mutate any application state.
//!
//! Everything is drawn in screen space: world positions go through
//! [`Camera::world_to_screen`] so the y-up image coordinates never reach the
//! context transform. Stroke widths are screen pixels at every zoom level.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::camera::{Camera, Point, Size};
use crate::engine::EngineCore;
use crate::extent::Extent;
use crate::layer::{DeskMarker, HighlightStyle, MarkerStyle, SELECTED_HIGHLIGHT, marker_style};

/// Draw the full scene: floor image, desk markers, selection highlight.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, image: &HtmlImageElement, core: &EngineCore) -> Result<(), JsValue> {
    let viewport = core.viewport;
    let camera = &core.camera;

    // Layer 1: clear at device resolution.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    // Layer 2: floor image stretched over its extent.
    draw_floor(ctx, image, &core.projection.extent, camera, viewport)?;

    // Layer 3: desk markers in input order.
    for marker in core.layer.markers() {
        draw_marker(ctx, marker, marker_style(&marker.status), camera, viewport)?;
    }

    // Layer 4: selection highlight.
    if let Some(desk_id) = core.selection.selected_id() {
        if let Some(marker) = core.layer.get(desk_id) {
            draw_highlight(ctx, marker, &SELECTED_HIGHLIGHT, camera, viewport)?;
        }
    }

    Ok(())
}

fn draw_floor(
    ctx: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    extent: &Extent,
    camera: &Camera,
    viewport: Size,
) -> Result<(), JsValue> {
    // Image row 0 is the top edge, which is max_y in world space.
    let top_left = camera.world_to_screen(Point::new(extent.min_x, extent.max_y), viewport);
    let w = camera.world_dist_to_screen(extent.width());
    let h = camera.world_dist_to_screen(extent.height());
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, top_left.x, top_left.y, w, h)
}

fn marker_path(
    ctx: &CanvasRenderingContext2d,
    marker: &DeskMarker,
    camera: &Camera,
    viewport: Size,
) -> Result<(), JsValue> {
    let center = camera.world_to_screen(marker.center, viewport);
    let radius = camera.world_dist_to_screen(marker.radius);
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)
}

fn draw_marker(
    ctx: &CanvasRenderingContext2d,
    marker: &DeskMarker,
    style: MarkerStyle,
    camera: &Camera,
    viewport: Size,
) -> Result<(), JsValue> {
    marker_path(ctx, marker, camera, viewport)?;
    ctx.set_fill_style_str(style.fill);
    ctx.fill();
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(style.stroke_width);
    ctx.stroke();
    Ok(())
}

fn draw_highlight(
    ctx: &CanvasRenderingContext2d,
    marker: &DeskMarker,
    style: &HighlightStyle,
    camera: &Camera,
    viewport: Size,
) -> Result<(), JsValue> {
    marker_path(ctx, marker, camera, viewport)?;
    ctx.set_fill_style_str(style.fill);
    ctx.fill();
    ctx.set_stroke_style_str(style.underlay);
    ctx.set_line_width(style.underlay_width);
    ctx.stroke();
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(style.stroke_width);
    ctx.stroke();
    Ok(())
}
