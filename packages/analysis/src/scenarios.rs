//! Build-out scenario generation from the regulatory envelope.
//!
//! The three tiers scale the envelope's maximum built area by fixed
//! multipliers, with open space inversely related to intensity. Costs use a
//! caller-supplied per-square-meter construction cost.

use parcelscope_report_models::{Scenario, ScenarioName};
use parcelscope_zoning_models::RegulatoryEnvelope;

struct Tier {
    name: ScenarioName,
    description: &'static str,
    multiplier: f64,
    open_space_fraction: f64,
    roi: &'static str,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: ScenarioName::Conservative,
        description: "Minimum FAR utilization with maximum open space",
        multiplier: 0.6,
        open_space_fraction: 0.5,
        roi: "12-15%",
    },
    Tier {
        name: ScenarioName::Moderate,
        description: "Balanced development with good open space",
        multiplier: 0.8,
        open_space_fraction: 0.35,
        roi: "15-18%",
    },
    Tier {
        name: ScenarioName::Maximum,
        description: "Full FAR utilization for maximum returns",
        multiplier: 1.0,
        open_space_fraction: 0.25,
        roi: "18-22%",
    },
];

/// Derives the three build-out scenarios for a parcel.
///
/// Built area is monotonically non-decreasing across the returned list.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_scenarios(
    area_sqm: f64,
    envelope: &RegulatoryEnvelope,
    cost_per_sqm: f64,
) -> Vec<Scenario> {
    let far_max = envelope.far.max;
    let coverage_max = envelope.ground_coverage_pct.max / 100.0;

    let max_built_area = area_sqm * far_max;
    let ground_floor_area = area_sqm * coverage_max;
    let floors = if ground_floor_area > 0.0 {
        (max_built_area / ground_floor_area).floor()
    } else {
        1.0
    };

    TIERS
        .iter()
        .map(|tier| Scenario {
            name: tier.name,
            description: tier.description.to_string(),
            far: (far_max * tier.multiplier * 10.0).round() / 10.0,
            floors: (floors * tier.multiplier).floor() as u32,
            built_area_sqm: (max_built_area * tier.multiplier).round() as u64,
            open_space_sqm: (area_sqm * tier.open_space_fraction).round() as u64,
            estimated_cost: (max_built_area * tier.multiplier * cost_per_sqm).round() as u64,
            roi: tier.roi.to_string(),
        })
        .collect()
}
