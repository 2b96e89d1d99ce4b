//! Qualitative recommendations derived from the report's own numbers.

use parcelscope_report_models::{
    AmenityCatalog, BuildabilityScore, Recommendation, RecommendationKind,
};
use parcelscope_zoning_models::ZoneType;

/// Generates the recommendation list for a report.
///
/// Conditional entries first (strong score, metro proximity, commercial
/// zoning), then the unconditional market-timing note, so the list is never
/// empty.
#[must_use]
pub fn recommendations(
    zone: ZoneType,
    buildability: &BuildabilityScore,
    amenities: &AmenityCatalog,
) -> Vec<Recommendation> {
    let mut entries = Vec::new();

    if buildability.score > 75 {
        entries.push(Recommendation {
            kind: RecommendationKind::Positive,
            title: "Excellent Development Potential".to_string(),
            description: "This site shows strong indicators for development with good zoning \
                 compliance and amenity access."
                .to_string(),
        });
    }

    if amenities.nearest_transit_km().is_some_and(|km| km < 1.0) {
        entries.push(Recommendation {
            kind: RecommendationKind::Positive,
            title: "Premium Metro Connectivity".to_string(),
            description: "Proximity to metro station significantly enhances property value \
                 and marketability."
                .to_string(),
        });
    }

    if zone == ZoneType::Commercial {
        entries.push(Recommendation {
            kind: RecommendationKind::Info,
            title: "Commercial Zoning Advantage".to_string(),
            description: "Commercial zoning allows for higher FAR and diverse use cases, \
                 maximizing returns."
                .to_string(),
        });
    }

    entries.push(Recommendation {
        kind: RecommendationKind::Info,
        title: "Market Timing".to_string(),
        description: "Current market conditions favor phased development with focus on \
             quality amenities."
            .to_string(),
    });

    entries
}
