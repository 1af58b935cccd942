//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the map surface and its popover while reading/writing
//! `FloorplanState` from the Leptos context.

pub mod floorplan_host;
pub mod reservation_popover;
