//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::floorplan_host::FloorplanHost;
use crate::config::FloorplanConfig;
use crate::state::floorplan::FloorplanState;
use crate::util::page_config::read_page_config;

/// Root application component.
///
/// Resolves page configuration, provides the shared floorplan state, and
/// mounts the floorplan host.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = FloorplanConfig::load_or_default(read_page_config().as_deref());
    log::info!("floorplan config: image {}, {} desks", config.image_src, config.desks.len());

    let state = RwSignal::new(FloorplanState::default());
    provide_context(state);

    view! {
        <Title text="Office floorplan"/>
        <main class="floorplan-page">
            <FloorplanHost config/>
        </main>
    }
}
