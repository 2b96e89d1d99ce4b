#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Typed results for the parcel report pipeline.
//!
//! Every struct here serializes to `camelCase` JSON, the shape the report
//! renderer and PDF generator downstream expect. The [`Report`] aggregate is
//! immutable after assembly and is not persisted by this workspace.

use chrono::{DateTime, Utc};
use parcelscope_zoning_models::RegulatoryEnvelope;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A named point of interest near the parcel, supplied by the geo-data
/// collaborator with its distance already computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    /// Amenity name, e.g. "Indiranagar Metro Station".
    pub name: String,
    /// Distance from the parcel centroid in kilometers.
    pub distance_km: f64,
    /// Walking time in minutes, when the collaborator computed one.
    pub walking_time_min: Option<u32>,
    /// Driving time in minutes, when the collaborator computed one.
    pub driving_time_min: Option<u32>,
}

/// Nearby amenities grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityCatalog {
    /// Schools, nearest first.
    pub schools: Vec<Amenity>,
    /// Hospitals, nearest first.
    pub hospitals: Vec<Amenity>,
    /// Metro stations, bus stops, and other transit points.
    pub transport: Vec<Amenity>,
    /// Parks and recreation areas.
    pub parks: Vec<Amenity>,
}

impl AmenityCatalog {
    /// Distance to the nearest transit point, if any are known.
    #[must_use]
    pub fn nearest_transit_km(&self) -> Option<f64> {
        self.transport
            .iter()
            .map(|a| a.distance_km)
            .min_by(f64::total_cmp)
    }
}

/// Qualitative status of a scoring factor, preserved verbatim for display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FactorStatus {
    /// Best-case branch for the factor.
    Excellent,
    /// Favorable but not best-case.
    Good,
    /// Below the favorable threshold.
    Fair,
    /// The factor could not be measured (no data in that category).
    Limited,
}

/// One named factor contributing to the buildability score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringFactor {
    /// Factor name, e.g. "School Proximity".
    pub name: String,
    /// Points awarded.
    pub score: u8,
    /// Qualitative status for display.
    pub status: FactorStatus,
}

/// Letter grade derived from the buildability score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Grade {
    /// Score above 85.
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    /// Score above 75.
    A,
    /// Score above 65.
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
    /// Score above 55.
    B,
    /// Everything else.
    C,
}

/// Composite 0-100 buildability rating with its factor breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildabilityScore {
    /// Total score in `[0, 100]`.
    pub score: u8,
    /// Derived letter grade.
    pub grade: Grade,
    /// Ordered factor breakdown.
    pub factors: Vec<ScoringFactor>,
}

/// Build-out intensity tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum ScenarioName {
    /// 60% FAR utilization.
    Conservative,
    /// 80% FAR utilization.
    Moderate,
    /// Full FAR utilization.
    Maximum,
}

/// One development scenario derived from the regulatory envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Intensity tier.
    pub name: ScenarioName,
    /// One-line description for display.
    pub description: String,
    /// FAR utilized by this scenario.
    pub far: f64,
    /// Floor count.
    pub floors: u32,
    /// Total built floor area in square meters, rounded.
    pub built_area_sqm: u64,
    /// Open space retained on the parcel in square meters, rounded.
    pub open_space_sqm: u64,
    /// Estimated construction cost in local currency units, rounded.
    pub estimated_cost: u64,
    /// ROI band for the tier, e.g. "12-15%".
    pub roi: String,
}

/// Per-square-foot price band derived from comparables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Comparable average.
    pub average: f64,
}

/// Total parcel value band in local currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedValue {
    /// Lower bound.
    pub min: u64,
    /// Upper bound.
    pub max: u64,
    /// Average.
    pub average: u64,
}

/// Qualitative market direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrendLabel {
    /// Growth rate above 5%.
    Rising,
    /// Growth rate above 2%.
    Stable,
    /// Everything else.
    Slow,
}

/// Qualitative market outlook.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Outlook {
    /// Growth rate above 6%.
    Positive,
    /// Growth rate above 3%.
    Stable,
    /// Everything else.
    Cautious,
}

/// Market trend summary with a jittered year-over-year growth rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrend {
    /// Direction label.
    pub trend: TrendLabel,
    /// Formatted growth rate, e.g. "9.3%".
    pub growth_rate: String,
    /// Outlook label.
    pub outlook: Outlook,
    /// One-line description for display.
    pub description: String,
}

/// Pricing estimate for the parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingEstimate {
    /// Price band per square foot.
    pub price_per_sqft: PriceRange,
    /// Total value band (price band x parcel area in square feet).
    pub estimated_value: EstimatedValue,
    /// Market trend summary.
    pub market_trend: MarketTrend,
    /// Currency symbol for rendering.
    pub currency: String,
}

/// The unit basis a trip-generation rate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum TripUnitBasis {
    /// Residential rates are per dwelling unit (assumed 100 sqm each).
    #[serde(rename = "Dwelling Units")]
    #[strum(serialize = "Dwelling Units")]
    DwellingUnits,
    /// Non-residential rates are per 100 sqm of gross floor area.
    #[serde(rename = "100 sqm GFA")]
    #[strum(serialize = "100 sqm GFA")]
    GfaBlocks,
}

/// Qualitative congestion classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum CongestionLevel {
    /// Fewer than 50 peak-hour trips.
    Low,
    /// Fewer than 200 peak-hour trips.
    Moderate,
    /// 200 or more peak-hour trips.
    High,
}

/// Congestion classification with display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CongestionImpact {
    /// Classification level.
    pub level: CongestionLevel,
    /// Display color hex code.
    pub color: String,
    /// One-line description for display.
    pub description: String,
}

/// Estimated trip generation for the development.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripGenerationResult {
    /// Estimated daily trips.
    pub daily_trips: u64,
    /// Estimated peak-hour trips.
    pub peak_hour_trips: u64,
    /// The unit basis the rates applied to.
    pub unit_type: TripUnitBasis,
    /// Number of units of that basis.
    pub unit_count: u64,
    /// Derived congestion classification.
    pub congestion: CongestionImpact,
}

/// Tone of a recommendation entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecommendationKind {
    /// A favorable indicator.
    Positive,
    /// Neutral context.
    Info,
    /// A caution.
    Warning,
}

/// A qualitative recommendation generated from the report's own numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Tone of the entry.
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Short title.
    pub title: String,
    /// Supporting description.
    pub description: String,
}

/// Lightning exposure classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum LightningRiskLevel {
    /// Outside known high-risk regions.
    Low,
    /// High-risk region, low-rise development.
    Moderate,
    /// High-risk region and tall building types.
    High,
}

/// Lightning risk assessment for the parcel's city and building type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningRisk {
    /// Classification level.
    pub risk_level: LightningRiskLevel,
    /// Advisory text, present for Moderate and High.
    pub warning: Option<String>,
}

/// How the zoning classification in a report was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ClassificationSource {
    /// The external inference backend produced the envelope.
    Model {
        /// Backend model version string.
        version: String,
    },
    /// The local majority-vote classifier produced it.
    LocalVote {
        /// Why the pipeline fell back here, if it was a degradation rather
        /// than the configured path.
        degraded: Option<DegradedReason>,
    },
    /// No signal at all; the residential default applied.
    LocalDefault {
        /// Why the pipeline fell back here, if it was a degradation.
        degraded: Option<DegradedReason>,
    },
}

/// Why a computation fell back from its preferred path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DegradedReason {
    /// The external inference backend failed or was unreachable.
    OracleUnavailable,
    /// No nearby areas were supplied to vote over.
    NoNearbyAreas,
}

/// The zoning classification result carried into the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoningVerdict {
    /// The regulatory envelope for the classified zone.
    pub details: RegulatoryEnvelope,
    /// Classifier confidence in `[0, 1]`. A placeholder baseline plus jitter
    /// on local paths, the model's own figure on the oracle path.
    pub confidence: f64,
    /// Which path produced the classification.
    pub source: ClassificationSource,
}

/// Geometric summary of the analyzed parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelInfo {
    /// Area in square meters, rounded.
    pub area_sqm: u64,
    /// Perimeter in meters, rounded.
    pub perimeter_m: u64,
    /// Vertex-mean centroid as `[lng, lat]`.
    pub centroid: [f64; 2],
    /// The raw vertex ring as `[lng, lat]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

/// The root report aggregate, assembled once per generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Assembly timestamp.
    pub generated_at: DateTime<Utc>,
    /// City id the report was generated for.
    pub city: String,
    /// Geometric summary.
    pub parcel_info: ParcelInfo,
    /// Pricing estimate.
    pub pricing: PricingEstimate,
    /// Classified zone and regulatory envelope.
    pub zoning_details: RegulatoryEnvelope,
    /// Which path produced the classification.
    pub zoning_source: ClassificationSource,
    /// Amenities as supplied by the geo-data collaborator.
    pub amenities: AmenityCatalog,
    /// Buildability score and breakdown.
    pub buildability: BuildabilityScore,
    /// The three build-out scenarios, in increasing intensity.
    pub scenarios: Vec<Scenario>,
    /// Traffic impact estimate.
    pub traffic: TripGenerationResult,
    /// Classifier confidence in `[0, 1]`.
    pub ml_confidence: f64,
    /// Qualitative recommendations.
    pub recommendations: Vec<Recommendation>,
    /// 30-day AQI forecast, when a current AQI was supplied.
    pub aqi_forecast: Option<Vec<u32>>,
    /// Lightning risk assessment.
    pub lightning_risk: LightningRisk,
    /// Road condition description from the road-data collaborator, when
    /// available.
    pub road_condition: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_labels_include_plus_tiers() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(Grade::BPlus.to_string(), "B+");
        assert_eq!(Grade::C.to_string(), "C");
    }

    #[test]
    fn nearest_transit_picks_minimum_distance() {
        let catalog = AmenityCatalog {
            transport: vec![
                Amenity {
                    name: "Trinity Metro Station".into(),
                    distance_km: 2.8,
                    walking_time_min: None,
                    driving_time_min: None,
                },
                Amenity {
                    name: "Indiranagar Metro Station".into(),
                    distance_km: 1.5,
                    walking_time_min: Some(18),
                    driving_time_min: Some(3),
                },
            ],
            ..AmenityCatalog::default()
        };
        assert!((catalog.nearest_transit_km().unwrap() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn nearest_transit_is_none_when_empty() {
        assert!(AmenityCatalog::default().nearest_transit_km().is_none());
    }

    #[test]
    fn recommendation_serializes_kind_as_type() {
        let rec = Recommendation {
            kind: RecommendationKind::Positive,
            title: "Excellent Development Potential".into(),
            description: "strong indicators".into(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "positive");
    }
}
