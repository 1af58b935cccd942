//! Bridge component between Leptos state and the imperative `floorplan::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns view math, hit-testing and selection. This host loads the
//! floor image, mounts the engine on its `<canvas>`, forwards pointer and
//! wheel events, and mirrors the returned actions into `FloorplanState`,
//! which drives the cursor and the reservation popover.

use leptos::prelude::*;

use crate::components::reservation_popover::ReservationPopover;
use crate::config::FloorplanConfig;
use crate::state::floorplan::{FloorplanState, LoadStatus};

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use floorplan::desk::DeskRecord;
#[cfg(feature = "csr")]
use floorplan::engine::{Action, Engine};
#[cfg(feature = "csr")]
use floorplan::error::FloorplanError;
#[cfg(feature = "csr")]
use floorplan::loader::load_floor_image;

#[cfg(feature = "csr")]
use crate::state::floorplan::needs_render;
#[cfg(feature = "csr")]
use crate::util::map_input::{map_button, pointer_point, sync_viewport, wheel_delta, wheel_point};

#[cfg(feature = "csr")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "csr")]
fn render_and_place(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>, state: RwSignal<FloorplanState>) {
    sync_viewport(engine, canvas_ref);
    // Failures are logged by the engine; the next event redraws.
    let _ = engine.render();
    let anchor = engine.popup_screen_position();
    state.update(|s| s.reposition(anchor));
}

#[cfg(feature = "csr")]
fn process_actions(
    actions: Vec<Action>,
    engine: &mut Engine,
    canvas_ref: &NodeRef<leptos::html::Canvas>,
    state: RwSignal<FloorplanState>,
) {
    if actions.is_empty() {
        return;
    }
    let render = needs_render(&actions);
    state.update(|s| {
        for action in &actions {
            s.apply(action);
        }
    });
    if render {
        render_and_place(engine, canvas_ref, state);
    }
}

#[cfg(feature = "csr")]
async fn mount_engine(
    canvas: web_sys::HtmlCanvasElement,
    image_src: &str,
    desks: &[DeskRecord],
) -> Result<Engine, FloorplanError> {
    let image = load_floor_image(image_src).await?;
    Engine::new(canvas, image, desks)
}

/// Floorplan host component.
///
/// Renders the map container with its canvas and the popup container. Once
/// the canvas is in the DOM the floor image is loaded and the engine is
/// mounted; a failed load replaces the map with an error notice.
#[component]
pub fn FloorplanHost(config: FloorplanConfig) -> impl IntoView {
    let state = expect_context::<RwSignal<FloorplanState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "csr")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let started = Rc::new(Cell::new(false));
        let image_src = config.image_src.clone();
        let desks = config.desks.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.replace(true) {
                return;
            }
            let engine = Rc::clone(&engine);
            let image_src = image_src.clone();
            let desks = desks.clone();
            leptos::task::spawn_local(async move {
                match mount_engine(canvas, &image_src, &desks).await {
                    Ok(mut instance) => {
                        let extent = instance.core.projection.extent;
                        state.update(|s| {
                            s.load = LoadStatus::Ready { width: extent.width(), height: extent.height() };
                        });
                        render_and_place(&mut instance, &canvas_ref, state);
                        *engine.borrow_mut() = Some(instance);
                    }
                    Err(e) => {
                        log::error!("floorplan failed to start: {e}");
                        state.update(|s| s.load = LoadStatus::Failed(e.to_string()));
                    }
                }
            });
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let Some(button) = map_button(ev.button()) else {
                    return;
                };
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_down(ev.pointer_id(), pointer_point(&ev), button);
                    process_actions(actions, engine, &canvas_ref, state);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_move(ev.pointer_id(), pointer_point(&ev));
                    process_actions(actions, engine, &canvas_ref, state);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let Some(button) = map_button(ev.button()) else {
                    return;
                };
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up(ev.pointer_id(), pointer_point(&ev), button);
                    process_actions(actions, engine, &canvas_ref, state);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_leave(ev.pointer_id());
                    process_actions(actions, engine, &canvas_ref, state);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_wheel(wheel_point(&ev), wheel_delta(&ev));
                    process_actions(actions, engine, &canvas_ref, state);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let failure = move || match state.with(|s| s.load.clone()) {
        LoadStatus::Failed(message) => Some(view! {
            <div class="floorplan-error" role="alert">{format!("Floorplan unavailable: {message}")}</div>
        }),
        LoadStatus::Loading | LoadStatus::Ready { .. } => None,
    };

    view! {
        <div id=config.map_id class="floorplan-map">
            <canvas
                class="floorplan-canvas"
                node_ref=canvas_ref
                style:cursor=move || state.with(|s| s.cursor.as_css())
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:wheel=on_wheel
            >
                "Your browser does not support canvas."
            </canvas>
            {failure}
            <div id=config.popup_id class="floorplan-popup" style=move || state.with(FloorplanState::popup_style)>
                <ReservationPopover/>
            </div>
        </div>
    }
}
