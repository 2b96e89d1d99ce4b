#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Zone taxonomy and regulatory envelope types.
//!
//! These types are the shared vocabulary between the rule table, the
//! classifier, and every estimator downstream. The taxonomy is closed:
//! labels that do not match a known zone resolve to residential, the
//! system-wide fallback.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Land-use zone classification for a parcel.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ZoneType {
    /// Apartments, villas, gated communities.
    #[default]
    Residential,
    /// Offices, retail, malls.
    Commercial,
    /// Manufacturing, warehouses, logistics.
    Industrial,
    /// Mixed-use towers, live-work spaces.
    Mixed,
}

impl ZoneType {
    /// Parses a zone label, falling back to [`Self::Residential`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::Residential)
    }
}

/// An inclusive numeric range, e.g. the permitted FAR band for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl RegulatoryRange {
    /// Creates a range from bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Formats the range for display, e.g. `"1.5 - 2.5"` or `"15m - 45m"`
    /// with a unit suffix.
    #[must_use]
    pub fn label(&self, unit: &str) -> String {
        format!(
            "{}{unit} - {}{unit}",
            format_bound(self.min),
            format_bound(self.max)
        )
    }
}

/// Formats a range bound without a trailing `.0` on whole numbers.
fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// The regulatory envelope for one zone type.
///
/// Envelopes are static configuration: one per [`ZoneType`], read-only for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryEnvelope {
    /// The zone this envelope applies to.
    pub zone_type: ZoneType,
    /// Permitted floor-area-ratio band.
    pub far: RegulatoryRange,
    /// Permitted building height band in meters.
    pub max_height_m: RegulatoryRange,
    /// Permitted ground coverage band in percent.
    pub ground_coverage_pct: RegulatoryRange,
    /// Required setback band in meters.
    pub setback_m: RegulatoryRange,
    /// One parking space required per this many square meters.
    pub parking_sqm_per_space: f64,
    /// Permitted land uses, most typical first.
    pub land_use: Vec<String>,
    /// Regulatory restrictions for the zone.
    pub restrictions: Vec<String>,
}

impl RegulatoryEnvelope {
    /// Display label for the FAR band, e.g. `"1.5 - 2.5"`.
    #[must_use]
    pub fn far_label(&self) -> String {
        self.far.label("")
    }

    /// Display label for the height band, e.g. `"15m - 45m"`.
    #[must_use]
    pub fn height_label(&self) -> String {
        self.max_height_m.label("m")
    }

    /// Display label for the coverage band, e.g. `"40% - 60%"`.
    #[must_use]
    pub fn coverage_label(&self) -> String {
        self.ground_coverage_pct.label("%")
    }

    /// Display label for the setback band, e.g. `"3m - 6m"`.
    #[must_use]
    pub fn setback_label(&self) -> String {
        self.setback_m.label("m")
    }

    /// Display label for the parking ratio, e.g. `"1 per 100 sqm"`.
    #[must_use]
    pub fn parking_label(&self) -> String {
        format!("1 per {} sqm", format_bound(self.parking_sqm_per_space))
    }
}

/// A labeled comparable area near the parcel, supplied by the
/// district/geocoding collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyArea {
    /// Area name, e.g. "Indiranagar".
    pub name: String,
    /// Dominant zone type of the area.
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// Comparable price per square foot in local currency.
    pub price_per_sqft: f64,
    /// Longitude of the area marker.
    pub lng: f64,
    /// Latitude of the area marker.
    pub lat: f64,
    /// Observed FAR in the area, when known.
    pub far: Option<f64>,
    /// Resident population, when known.
    pub population: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_labels_round_trip_lowercase() {
        assert_eq!(ZoneType::Commercial.to_string(), "commercial");
        assert_eq!(ZoneType::from_label("commercial"), ZoneType::Commercial);
        assert_eq!(ZoneType::from_label("MIXED"), ZoneType::Mixed);
    }

    #[test]
    fn unknown_zone_label_falls_back_to_residential() {
        assert_eq!(ZoneType::from_label("agricultural"), ZoneType::Residential);
        assert_eq!(ZoneType::from_label(""), ZoneType::Residential);
    }

    #[test]
    fn range_labels_trim_whole_number_decimals() {
        assert_eq!(RegulatoryRange::new(1.5, 2.5).label(""), "1.5 - 2.5");
        assert_eq!(RegulatoryRange::new(15.0, 45.0).label("m"), "15m - 45m");
        assert_eq!(RegulatoryRange::new(40.0, 60.0).label("%"), "40% - 60%");
        assert_eq!(
            RegulatoryRange::new(4.5, 7.5).label("m"),
            "4.5m - 7.5m"
        );
    }
}
