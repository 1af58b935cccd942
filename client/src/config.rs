//! Page configuration for the floorplan.
//!
//! Defaults describe the stock office floor: `office_floorplan.png`, the map
//! mounted in `#map`, the popup in `#popup`, and the desk list embedded from
//! `assets/desks.json`. A page can override any of these with a JSON block:
//!
//! ```html
//! <script type="application/json" id="floorplan-config">
//!   { "image_src": "floor2.png", "desks": [{ "position": [10, 20], "status": "Available" }] }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use floorplan::desk::{DeskRecord, parse_desks};
use floorplan::error::FloorplanError;
use serde::Deserialize;

pub const DEFAULT_IMAGE_SRC: &str = "office_floorplan.png";
pub const DEFAULT_MAP_ID: &str = "map";
pub const DEFAULT_POPUP_ID: &str = "popup";

/// Id of the `<script>` element holding a page config override.
pub const CONFIG_ELEMENT_ID: &str = "floorplan-config";

/// Desk list shipped with the client.
pub const BUILTIN_DESKS: &str = include_str!("../assets/desks.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid floorplan config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid built-in desk list: {0}")]
    Desks(#[from] FloorplanError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloorplanConfig {
    /// Path of the floor image.
    pub image_src: String,
    /// Id of the map container element.
    pub map_id: String,
    /// Id of the popup container element.
    pub popup_id: String,
    /// Desks in display order; ids are assigned from this order.
    pub desks: Vec<DeskRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    image_src: Option<String>,
    map_id: Option<String>,
    popup_id: Option<String>,
    desks: Option<Vec<DeskRecord>>,
}

impl FloorplanConfig {
    /// Build config from an optional JSON override, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed or unknown keys, and
    /// [`ConfigError::Desks`] if the built-in desk list is needed but broken.
    pub fn load(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw: RawConfig = match raw.map(str::trim) {
            Some(text) if !text.is_empty() => serde_json::from_str(text)?,
            _ => RawConfig::default(),
        };
        let desks = match raw.desks {
            Some(desks) => desks,
            None => parse_desks(BUILTIN_DESKS)?,
        };
        Ok(Self {
            image_src: raw.image_src.unwrap_or_else(|| DEFAULT_IMAGE_SRC.to_owned()),
            map_id: raw.map_id.unwrap_or_else(|| DEFAULT_MAP_ID.to_owned()),
            popup_id: raw.popup_id.unwrap_or_else(|| DEFAULT_POPUP_ID.to_owned()),
            desks,
        })
    }

    /// Load config, logging and falling back to defaults on error.
    ///
    /// When even the built-in desk list cannot be decoded the floor is shown
    /// with no desks.
    pub fn load_or_default(raw: Option<&str>) -> Self {
        match Self::load(raw) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}; using defaults");
                Self::load(None).unwrap_or_else(|e| {
                    log::error!("{e}; showing floor without desks");
                    Self {
                        image_src: DEFAULT_IMAGE_SRC.to_owned(),
                        map_id: DEFAULT_MAP_ID.to_owned(),
                        popup_id: DEFAULT_POPUP_ID.to_owned(),
                        desks: Vec::new(),
                    }
                })
            }
        }
    }
}
