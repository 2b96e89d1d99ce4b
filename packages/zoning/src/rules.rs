//! The static regulatory envelope table, one envelope per zone type.

use std::sync::LazyLock;

use parcelscope_zoning_models::{RegulatoryEnvelope, RegulatoryRange, ZoneType};

static RESIDENTIAL: LazyLock<RegulatoryEnvelope> = LazyLock::new(|| RegulatoryEnvelope {
    zone_type: ZoneType::Residential,
    far: RegulatoryRange::new(1.5, 2.5),
    max_height_m: RegulatoryRange::new(15.0, 45.0),
    ground_coverage_pct: RegulatoryRange::new(40.0, 60.0),
    setback_m: RegulatoryRange::new(3.0, 6.0),
    parking_sqm_per_space: 100.0,
    land_use: strings(&["Apartments", "Villas", "Gated Communities", "Row Houses"]),
    restrictions: strings(&[
        "No commercial activities",
        "Noise compliance",
        "Green space requirements",
    ]),
});

static COMMERCIAL: LazyLock<RegulatoryEnvelope> = LazyLock::new(|| RegulatoryEnvelope {
    zone_type: ZoneType::Commercial,
    far: RegulatoryRange::new(2.5, 3.5),
    max_height_m: RegulatoryRange::new(45.0, 60.0),
    ground_coverage_pct: RegulatoryRange::new(50.0, 70.0),
    setback_m: RegulatoryRange::new(6.0, 9.0),
    parking_sqm_per_space: 50.0,
    land_use: strings(&[
        "Office Buildings",
        "Shopping Malls",
        "Retail Stores",
        "Business Parks",
    ]),
    restrictions: strings(&[
        "Fire safety compliance",
        "Parking requirements",
        "Signage regulations",
    ]),
});

static INDUSTRIAL: LazyLock<RegulatoryEnvelope> = LazyLock::new(|| RegulatoryEnvelope {
    zone_type: ZoneType::Industrial,
    far: RegulatoryRange::new(1.5, 2.0),
    max_height_m: RegulatoryRange::new(15.0, 30.0),
    ground_coverage_pct: RegulatoryRange::new(60.0, 75.0),
    setback_m: RegulatoryRange::new(9.0, 12.0),
    parking_sqm_per_space: 75.0,
    land_use: strings(&[
        "Factories",
        "Warehouses",
        "Manufacturing Units",
        "Storage Facilities",
    ]),
    restrictions: strings(&[
        "Environmental clearance",
        "No hazardous materials",
        "Pollution control",
    ]),
});

static MIXED: LazyLock<RegulatoryEnvelope> = LazyLock::new(|| RegulatoryEnvelope {
    zone_type: ZoneType::Mixed,
    far: RegulatoryRange::new(2.0, 3.0),
    max_height_m: RegulatoryRange::new(30.0, 50.0),
    ground_coverage_pct: RegulatoryRange::new(50.0, 65.0),
    setback_m: RegulatoryRange::new(4.5, 7.5),
    parking_sqm_per_space: 65.0,
    land_use: strings(&[
        "Mixed-use Towers",
        "Live-Work Spaces",
        "Retail + Apartments",
        "Office + Residential",
    ]),
    restrictions: strings(&[
        "Mixed-use compliance",
        "Separate entrances",
        "Noise mitigation",
    ]),
});

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Looks up the regulatory envelope for a zone type.
#[must_use]
pub fn envelope_for(zone: ZoneType) -> &'static RegulatoryEnvelope {
    match zone {
        ZoneType::Residential => &RESIDENTIAL,
        ZoneType::Commercial => &COMMERCIAL,
        ZoneType::Industrial => &INDUSTRIAL,
        ZoneType::Mixed => &MIXED,
    }
}

/// Looks up an envelope from a free-form zone label.
///
/// Unrecognized labels resolve to the residential envelope, the fallback
/// policy, not an error.
#[must_use]
pub fn envelope_for_label(label: &str) -> &'static RegulatoryEnvelope {
    envelope_for(ZoneType::from_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residential_envelope_has_documented_bands() {
        let env = envelope_for(ZoneType::Residential);
        assert_eq!(env.far_label(), "1.5 - 2.5");
        assert_eq!(env.height_label(), "15m - 45m");
        assert_eq!(env.coverage_label(), "40% - 60%");
        assert_eq!(env.setback_label(), "3m - 6m");
        assert_eq!(env.parking_label(), "1 per 100 sqm");
    }

    #[test]
    fn commercial_envelope_has_documented_bands() {
        let env = envelope_for(ZoneType::Commercial);
        assert_eq!(env.far_label(), "2.5 - 3.5");
        assert_eq!(env.height_label(), "45m - 60m");
        assert_eq!(env.parking_label(), "1 per 50 sqm");
    }

    #[test]
    fn mixed_envelope_has_fractional_setbacks() {
        let env = envelope_for(ZoneType::Mixed);
        assert_eq!(env.setback_label(), "4.5m - 7.5m");
        assert_eq!(env.coverage_label(), "50% - 65%");
    }

    #[test]
    fn unknown_label_resolves_to_residential() {
        let env = envelope_for_label("maritime");
        assert_eq!(env.zone_type, ZoneType::Residential);
        assert_eq!(env.far_label(), "1.5 - 2.5");
    }

    #[test]
    fn every_zone_lists_uses_and_restrictions() {
        for zone in [
            ZoneType::Residential,
            ZoneType::Commercial,
            ZoneType::Industrial,
            ZoneType::Mixed,
        ] {
            let env = envelope_for(zone);
            assert_eq!(env.zone_type, zone);
            assert_eq!(env.land_use.len(), 4);
            assert_eq!(env.restrictions.len(), 3);
        }
    }
}
