//! Desk records as supplied by the external data source.
//!
//! Records arrive as a JSON array of `{ "position": [x, y], "status": "..." }`
//! objects in image-pixel coordinates. They are read once at startup and never
//! mutated. A desk has no stored identifier: its id is its 1-based position in
//! the list (see [`crate::layer::DeskMarker::desk_id`]).

#[cfg(test)]
#[path = "desk_test.rs"]
mod desk_test;

use serde::Deserialize;

use crate::camera::Point;
use crate::error::FloorplanError;

/// Status string that marks a desk as reservable.
pub const AVAILABLE: &str = "Available";

/// Availability of a desk.
///
/// Only the exact string `"Available"` is reservable. Every other value,
/// including an absent status, is kept verbatim in [`DeskStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskStatus {
    Available,
    Other(String),
}

impl DeskStatus {
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => AVAILABLE,
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for DeskStatus {
    fn from(raw: &str) -> Self {
        if raw == AVAILABLE {
            Self::Available
        } else {
            Self::Other(raw.to_owned())
        }
    }
}

impl Default for DeskStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// One desk on the floor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDesk")]
pub struct DeskRecord {
    /// Desk center in image-pixel coordinates.
    pub position: Point,
    pub status: DeskStatus,
}

impl DeskRecord {
    #[must_use]
    pub fn new(x: f64, y: f64, status: impl Into<DeskStatus>) -> Self {
        Self { position: Point::new(x, y), status: status.into() }
    }
}

#[derive(Deserialize)]
struct RawDesk {
    position: [f64; 2],
    #[serde(default)]
    status: Option<String>,
}

impl From<RawDesk> for DeskRecord {
    fn from(raw: RawDesk) -> Self {
        let [x, y] = raw.position;
        let status = raw
            .status
            .as_deref()
            .map_or_else(DeskStatus::default, DeskStatus::from);
        Self { position: Point::new(x, y), status }
    }
}

/// Decode an ordered desk list from JSON.
///
/// # Errors
///
/// Returns [`FloorplanError::DeskData`] if the input is not an array of desk
/// objects with a two-element numeric `position`.
pub fn parse_desks(json: &str) -> Result<Vec<DeskRecord>, FloorplanError> {
    Ok(serde_json::from_str(json)?)
}
