#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Per-city configuration for the report pipeline.
//!
//! Cities carry the locale knobs the estimators need: currency symbol, the
//! default comparable price when no nearby data exists, and per-zone
//! market-growth baselines. Unknown city ids resolve to Bangalore, the
//! registry's first and default entry.

use parcelscope_zoning_models::ZoneType;

/// Default construction cost per square meter of built area, in local
/// currency units. A planning-grade constant, not a market quote; callers
/// can override it per report.
pub const DEFAULT_CONSTRUCTION_COST_PER_SQM: f64 = 35_000.0;

/// Annual market growth baselines per zone type, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneGrowth {
    /// Residential growth rate.
    pub residential: f64,
    /// Commercial growth rate.
    pub commercial: f64,
    /// Industrial growth rate.
    pub industrial: f64,
    /// Mixed-use growth rate.
    pub mixed: f64,
}

impl ZoneGrowth {
    /// The baseline growth rate for a zone type.
    #[must_use]
    pub const fn for_zone(&self, zone: ZoneType) -> f64 {
        match zone {
            ZoneType::Residential => self.residential,
            ZoneType::Commercial => self.commercial,
            ZoneType::Industrial => self.industrial,
            ZoneType::Mixed => self.mixed,
        }
    }
}

/// A supported city and its locale configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Stable identifier, e.g. `"bangalore"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Country name.
    pub country: &'static str,
    /// Map anchor latitude.
    pub lat: f64,
    /// Map anchor longitude.
    pub lng: f64,
    /// Currency symbol for report rendering.
    pub currency: &'static str,
    /// Default comparable price per square foot when no nearby areas are
    /// supplied.
    pub default_price_per_sqft: f64,
    /// Market growth baselines.
    pub growth: ZoneGrowth,
}

static CITIES: &[City] = &[
    City {
        id: "bangalore",
        name: "Bangalore",
        country: "India",
        lat: 12.9716,
        lng: 77.5946,
        currency: "\u{20b9}",
        default_price_per_sqft: 9000.0,
        growth: ZoneGrowth {
            residential: 8.5,
            commercial: 10.2,
            industrial: 6.5,
            mixed: 9.0,
        },
    },
    City {
        id: "mumbai",
        name: "Mumbai",
        country: "India",
        lat: 19.076,
        lng: 72.8777,
        currency: "\u{20b9}",
        default_price_per_sqft: 25_000.0,
        growth: ZoneGrowth {
            residential: 5.8,
            commercial: 7.5,
            industrial: 4.2,
            mixed: 6.5,
        },
    },
    City {
        id: "delhi",
        name: "Delhi",
        country: "India",
        lat: 28.6139,
        lng: 77.209,
        currency: "\u{20b9}",
        default_price_per_sqft: 13_000.0,
        growth: ZoneGrowth {
            residential: 7.2,
            commercial: 8.8,
            industrial: 5.5,
            mixed: 7.8,
        },
    },
    City {
        id: "hyderabad",
        name: "Hyderabad",
        country: "India",
        lat: 17.385,
        lng: 78.4867,
        currency: "\u{20b9}",
        default_price_per_sqft: 7500.0,
        growth: ZoneGrowth {
            residential: 9.5,
            commercial: 11.2,
            industrial: 7.8,
            mixed: 10.0,
        },
    },
    City {
        id: "new_york",
        name: "New York",
        country: "USA",
        lat: 40.7128,
        lng: -74.006,
        currency: "$",
        default_price_per_sqft: 5500.0,
        growth: ZoneGrowth {
            residential: 3.5,
            commercial: 4.8,
            industrial: 2.5,
            mixed: 4.0,
        },
    },
    City {
        id: "singapore",
        name: "Singapore",
        country: "Singapore",
        lat: 1.3521,
        lng: 103.8198,
        currency: "S$",
        default_price_per_sqft: 14_000.0,
        growth: ZoneGrowth {
            residential: 4.2,
            commercial: 5.5,
            industrial: 3.2,
            mixed: 4.8,
        },
    },
];

/// All supported cities. The first entry is the default.
#[must_use]
pub fn cities() -> &'static [City] {
    CITIES
}

/// Looks up a city by id (case-insensitive). Unknown ids resolve to the
/// default city rather than failing.
#[must_use]
pub fn city(id: &str) -> &'static City {
    CITIES
        .iter()
        .find(|c| c.id.eq_ignore_ascii_case(id))
        .unwrap_or(&CITIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(city("Mumbai").id, "mumbai");
        assert_eq!(city("NEW_YORK").name, "New York");
    }

    #[test]
    fn unknown_city_resolves_to_default() {
        assert_eq!(city("atlantis").id, "bangalore");
    }

    #[test]
    fn growth_baseline_varies_by_zone() {
        let blr = city("bangalore");
        assert!(
            blr.growth.for_zone(ZoneType::Commercial) > blr.growth.for_zone(ZoneType::Industrial)
        );
    }
}
