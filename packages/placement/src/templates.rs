//! The building template catalog.
//!
//! Templates are read-only configuration: a footprint, a height, and a
//! display color. The default catalog uses the standard 5m x 12m footprint
//! at three heights so the placement spacing math holds for any selection.

use serde::{Deserialize, Serialize};

/// A building footprint template from the model catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingTemplate {
    /// Template name, e.g. "Standard Block".
    pub name: String,
    /// Footprint width in meters.
    pub width_m: f64,
    /// Footprint length in meters.
    pub length_m: f64,
    /// Building height in meters.
    pub height_m: f64,
    /// Display color hex code for extrusion rendering.
    pub color: String,
}

impl BuildingTemplate {
    /// Footprint area in square meters.
    #[must_use]
    pub fn footprint_sqm(&self) -> f64 {
        self.width_m * self.length_m
    }

    /// Half-diagonal of the footprint: the radius of the smallest circle
    /// containing the footprint at any rotation.
    #[must_use]
    pub fn radius_m(&self) -> f64 {
        (self.width_m / 2.0).hypot(self.length_m / 2.0)
    }
}

/// The built-in catalog used when the model collaborator supplies none.
#[must_use]
pub fn default_catalog() -> Vec<BuildingTemplate> {
    vec![
        BuildingTemplate {
            name: "Low Rise Block".to_string(),
            width_m: 5.0,
            length_m: 12.0,
            height_m: 8.0,
            color: "#e2e8f0".to_string(),
        },
        BuildingTemplate {
            name: "Mid Rise Block".to_string(),
            width_m: 5.0,
            length_m: 12.0,
            height_m: 12.0,
            color: "#94a3b8".to_string(),
        },
        BuildingTemplate {
            name: "Tower Block".to_string(),
            width_m: 5.0,
            length_m: 12.0,
            height_m: 15.0,
            color: "#64748b".to_string(),
        },
    ]
}
