//! Reservation popover shown above an available desk.
//!
//! The "Reserve now" control is a visual affordance: activating it only logs
//! the request, no reservation is made.

use leptos::prelude::*;

use crate::state::floorplan::FloorplanState;

/// Popover body for the currently selected desk; renders nothing when no
/// popover is live.
#[component]
pub fn ReservationPopover() -> impl IntoView {
    let state = expect_context::<RwSignal<FloorplanState>>();

    move || {
        state.with(|s| s.popover.clone()).map(|popover| {
            let desk_id = popover.desk_id;
            view! {
                <div class="popover bs-popover-top" role="tooltip">
                    <div class="popover-arrow"></div>
                    <h3 class="popover-header">{popover.title}</h3>
                    <div class="popover-body">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| log::info!("reservation requested for desk #{desk_id}")
                        >
                            {popover.action_label}
                        </button>
                    </div>
                </div>
            }
        })
    }
}
