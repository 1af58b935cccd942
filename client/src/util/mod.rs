//! Browser helpers for the floorplan host.
//!
//! These keep `web_sys` event decoding and DOM lookups out of the components.

pub mod map_input;
pub mod page_config;
