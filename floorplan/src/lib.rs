//! Floorplan rendering and input engine for the desk reservation page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the map canvas: loading the floor image, building the
//! desk marker layer, translating raw DOM pointer events into view changes and
//! selection transitions, and rendering the scene. The host UI layer is
//! responsible only for wiring DOM events to the engine and applying the
//! resulting [`engine::Action`]s (cursor, popover) to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`desk`] | Desk records and status as supplied by the data source |
//! | [`layer`] | Desk markers and the status-driven marker style |
//! | [`selection`] | Selection state machine and the single popover instance |
//! | [`extent`] | Pixel extent and projection of the floor image |
//! | [`camera`] | View center/zoom and coordinate conversions |
//! | [`input`] | Pointer event types, gesture state and cursor affordance |
//! | [`hit`] | Hit-testing against desk markers |
//! | [`loader`] | Asynchronous floor image loading |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric constants (marker radius, zoom limits, etc.) |

pub mod camera;
pub mod consts;
pub mod desk;
pub mod engine;
pub mod error;
pub mod extent;
pub mod hit;
pub mod input;
pub mod layer;
pub mod loader;
pub mod render;
pub mod selection;
