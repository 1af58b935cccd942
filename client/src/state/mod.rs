//! Shared client-side state.
//!
//! Components depend on one focused model, provided via Leptos context as an
//! `RwSignal`, and updated from engine actions by the floorplan host.

pub mod floorplan;
