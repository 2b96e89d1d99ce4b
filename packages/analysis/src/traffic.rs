//! Trip generation and congestion impact, after the ITE rate tables.
//!
//! Residential development is rated per dwelling unit (assumed 100 sqm
//! each); everything else per 100 sqm of gross floor area. Unrecognized
//! zone labels resolve to residential before reaching this module, so the
//! residential rates are also the fallback rates.

use parcelscope_report_models::{
    CongestionImpact, CongestionLevel, TripGenerationResult, TripUnitBasis,
};
use parcelscope_zoning_models::ZoneType;

/// Square meters assumed per dwelling unit.
const SQM_PER_DWELLING_UNIT: f64 = 100.0;

/// Square meters per gross-floor-area rate block.
const SQM_PER_GFA_BLOCK: f64 = 100.0;

/// Estimates daily and peak-hour trips for a development.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_trip_generation(floor_area_sqm: f64, zone: ZoneType) -> TripGenerationResult {
    let (daily_trips, peak_hour_trips, unit_type, unit_count) = match zone {
        ZoneType::Residential => {
            let units = (floor_area_sqm / SQM_PER_DWELLING_UNIT).ceil();
            (
                (units * 8.0).round() as u64,
                (units * 0.8).round() as u64,
                TripUnitBasis::DwellingUnits,
                units as u64,
            )
        }
        ZoneType::Commercial | ZoneType::Industrial | ZoneType::Mixed => {
            let (daily_rate, peak_rate) = match zone {
                ZoneType::Commercial => (12.0, 1.2),
                ZoneType::Industrial => (4.0, 0.5),
                _ => (10.0, 1.0),
            };
            let blocks = floor_area_sqm / SQM_PER_GFA_BLOCK;
            (
                (blocks * daily_rate).round() as u64,
                (blocks * peak_rate).round() as u64,
                TripUnitBasis::GfaBlocks,
                blocks.round() as u64,
            )
        }
    };

    TripGenerationResult {
        daily_trips,
        peak_hour_trips,
        unit_type,
        unit_count,
        congestion: congestion_for(peak_hour_trips),
    }
}

/// Classifies congestion from peak-hour trips at the fixed 50/200
/// thresholds. 50 and 200 are inclusive to the higher class.
#[must_use]
pub fn congestion_for(peak_hour_trips: u64) -> CongestionImpact {
    let (level, color, description) = if peak_hour_trips < 50 {
        (
            CongestionLevel::Low,
            "#4CAF50",
            "Minimal impact on local traffic flow.",
        )
    } else if peak_hour_trips < 200 {
        (
            CongestionLevel::Moderate,
            "#FF9800",
            "Noticeable increase in traffic. Mitigation may be required.",
        )
    } else {
        (
            CongestionLevel::High,
            "#F44336",
            "Significant impact. Traffic Impact Assessment (TIA) strongly recommended.",
        )
    };

    CongestionImpact {
        level,
        color: color.to_string(),
        description: description.to_string(),
    }
}
