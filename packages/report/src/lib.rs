#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Assembles the outputs of the analysis pipeline into one [`Report`].
//!
//! Generation is best-effort: external failures degrade to local fallbacks
//! and are recorded in the verdict rather than raised. Only two conditions
//! abort: a parcel with fewer than 3 distinct vertices, and a city with no
//! uploaded zoning documents (a user-facing precondition the UI must be
//! able to prompt for).

pub mod environment;
pub mod oracle;
pub mod recommend;

use chrono::Utc;
use parcelscope_analysis::{
    estimate_pricing, estimate_trip_generation, generate_scenarios, score_buildability,
};
use parcelscope_config::DEFAULT_CONSTRUCTION_COST_PER_SQM;
use parcelscope_geometry::Parcel;
use parcelscope_report_models::{
    AmenityCatalog, ClassificationSource, DegradedReason, ParcelInfo, Report, ZoningVerdict,
};
use parcelscope_zoning::{classify, envelope_for};
use parcelscope_zoning_models::{NearbyArea, ZoneType};
use rand::Rng;
use thiserror::Error;

pub use oracle::{OracleError, OracleVerdict, ZoningOracle};

/// Baseline confidence reported for locally classified zones, before jitter.
const LOCAL_CONFIDENCE_BASE: f64 = 0.87;

/// Forecast horizon for the AQI supplement.
const AQI_FORECAST_DAYS: usize = 30;

/// Errors that abort report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The parcel has fewer than 3 distinct vertices.
    #[error("parcel must have at least 3 distinct vertices")]
    InvalidParcel,
    /// The oracle reported that the city has no uploaded zoning documents.
    #[error("no zoning regulations found for {city}; upload documents first")]
    MissingZoningDocuments {
        /// The city id the report was requested for.
        city: String,
    },
}

/// Inputs for one report generation.
///
/// Nearby areas, amenities, the current AQI reading, and the road condition
/// are supplied by external collaborators; any of them may be absent and
/// the report still assembles.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// City id; unknown ids fall back to the default city.
    pub city: String,
    /// The drawn parcel polygon.
    pub parcel: Parcel,
    /// Comparable nearby areas for classification and pricing.
    pub nearby_areas: Vec<NearbyArea>,
    /// Amenities around the parcel, grouped by category.
    pub amenities: AmenityCatalog,
    /// Current AQI reading, when the environmental collaborator has one.
    pub current_aqi: Option<u32>,
    /// Road condition description, when the road-data collaborator has one.
    pub road_condition: Option<String>,
}

/// Generates the full parcel report.
///
/// Classification consults `oracle` first when one is configured; any
/// oracle failure other than missing documents degrades to the local
/// majority-vote classifier with the reason recorded in the report's
/// zoning source.
///
/// # Errors
///
/// * [`ReportError::InvalidParcel`] when the parcel has fewer than 3
///   distinct vertices.
/// * [`ReportError::MissingZoningDocuments`] when the oracle reports the
///   city has no uploaded zoning documents.
pub fn generate_report<R: Rng>(
    request: &ReportRequest,
    oracle: Option<&dyn ZoningOracle>,
    rng: &mut R,
) -> Result<Report, ReportError> {
    if !request.parcel.is_valid() {
        return Err(ReportError::InvalidParcel);
    }

    let city = parcelscope_config::city(&request.city);
    let (zone, verdict) = classify_zone(oracle, request, rng)?;

    let area_sqm = request.parcel.area_sqm();
    let centroid = request.parcel.centroid();

    let pricing = estimate_pricing(area_sqm, &request.nearby_areas, city, zone, rng);
    let buildability = score_buildability(&verdict.details, area_sqm, &request.amenities);
    let scenarios =
        generate_scenarios(area_sqm, &verdict.details, DEFAULT_CONSTRUCTION_COST_PER_SQM);
    let traffic = estimate_trip_generation(area_sqm, zone);
    let recommendations = recommend::recommendations(zone, &buildability, &request.amenities);

    let aqi_forecast = request
        .current_aqi
        .map(|aqi| environment::aqi_forecast(aqi, AQI_FORECAST_DAYS, rng));
    let lightning_risk = environment::lightning_risk(city.id, zone);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let parcel_info = ParcelInfo {
        area_sqm: area_sqm.round() as u64,
        perimeter_m: request.parcel.perimeter_m().round() as u64,
        centroid: [centroid.x, centroid.y],
        coordinates: request
            .parcel
            .vertices()
            .iter()
            .map(|v| [v.x, v.y])
            .collect(),
    };

    Ok(Report {
        generated_at: Utc::now(),
        city: city.id.to_string(),
        parcel_info,
        pricing,
        zoning_details: verdict.details,
        zoning_source: verdict.source,
        amenities: request.amenities.clone(),
        buildability,
        scenarios,
        traffic,
        ml_confidence: verdict.confidence,
        recommendations,
        aqi_forecast,
        lightning_risk,
        road_condition: request.road_condition.clone(),
    })
}

/// Resolves the zone classification through the oracle-then-local chain.
fn classify_zone<R: Rng>(
    oracle: Option<&dyn ZoningOracle>,
    request: &ReportRequest,
    rng: &mut R,
) -> Result<(ZoneType, ZoningVerdict), ReportError> {
    let mut degraded = None;

    if let Some(oracle) = oracle {
        match oracle.classify(&request.parcel, &request.nearby_areas, &request.city) {
            Ok(verdict) => {
                return Ok((
                    verdict.zone_type,
                    ZoningVerdict {
                        details: envelope_for(verdict.zone_type).clone(),
                        confidence: verdict.confidence,
                        source: ClassificationSource::Model {
                            version: verdict.model_version,
                        },
                    },
                ));
            }
            Err(OracleError::MissingZoningDocuments { city }) => {
                return Err(ReportError::MissingZoningDocuments { city });
            }
            Err(err) => {
                log::warn!("zoning oracle failed, falling back to local classifier: {err}");
                degraded = Some(DegradedReason::OracleUnavailable);
            }
        }
    }

    let confidence = LOCAL_CONFIDENCE_BASE + rng.gen_range(0.0..0.1);

    if request.nearby_areas.is_empty() {
        log::debug!("no nearby areas supplied; defaulting to residential zoning");
        let zone = ZoneType::Residential;
        return Ok((
            zone,
            ZoningVerdict {
                details: envelope_for(zone).clone(),
                confidence,
                source: ClassificationSource::LocalDefault {
                    degraded: degraded.or(Some(DegradedReason::NoNearbyAreas)),
                },
            },
        ));
    }

    let zone = classify(&request.nearby_areas);
    Ok((
        zone,
        ZoningVerdict {
            details: envelope_for(zone).clone(),
            confidence,
            source: ClassificationSource::LocalVote { degraded },
        },
    ))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    struct GoodOracle;

    impl ZoningOracle for GoodOracle {
        fn classify(
            &self,
            _parcel: &Parcel,
            _nearby: &[NearbyArea],
            _city: &str,
        ) -> Result<OracleVerdict, OracleError> {
            Ok(OracleVerdict {
                zone_type: ZoneType::Commercial,
                confidence: 0.93,
                model_version: "zoning-rf-v2".to_string(),
            })
        }
    }

    struct DownOracle;

    impl ZoningOracle for DownOracle {
        fn classify(
            &self,
            _parcel: &Parcel,
            _nearby: &[NearbyArea],
            _city: &str,
        ) -> Result<OracleVerdict, OracleError> {
            Err(OracleError::Unavailable("connection refused".to_string()))
        }
    }

    struct DoclessOracle;

    impl ZoningOracle for DoclessOracle {
        fn classify(
            &self,
            _parcel: &Parcel,
            _nearby: &[NearbyArea],
            city: &str,
        ) -> Result<OracleVerdict, OracleError> {
            Err(OracleError::MissingZoningDocuments {
                city: city.to_string(),
            })
        }
    }

    fn nearby(zone: ZoneType, price: f64) -> NearbyArea {
        NearbyArea {
            name: "Indiranagar".to_string(),
            zone_type: zone,
            price_per_sqft: price,
            lng: 77.64,
            lat: 12.97,
            far: None,
            population: None,
        }
    }

    fn request() -> ReportRequest {
        ReportRequest {
            city: "bangalore".to_string(),
            parcel: Parcel::from_lng_lat(&[
                (77.590, 12.910),
                (77.590, 12.911),
                (77.591, 12.911),
                (77.591, 12.910),
            ]),
            nearby_areas: vec![
                nearby(ZoneType::Commercial, 9500.0),
                nearby(ZoneType::Commercial, 10_500.0),
                nearby(ZoneType::Residential, 8000.0),
            ],
            amenities: AmenityCatalog::default(),
            current_aqi: Some(100),
            road_condition: Some("Paved (Asphalt), Good".to_string()),
        }
    }

    #[test]
    fn invalid_parcel_is_rejected_up_front() {
        let mut req = request();
        req.parcel = Parcel::from_lng_lat(&[(77.59, 12.91), (77.60, 12.92)]);
        let err = generate_report(&req, None, &mut ChaCha8Rng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, ReportError::InvalidParcel));
    }

    #[test]
    fn local_vote_wins_without_an_oracle() {
        let report =
            generate_report(&request(), None, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();
        assert_eq!(
            report.zoning_source,
            ClassificationSource::LocalVote { degraded: None }
        );
        assert_eq!(
            report.zoning_details,
            envelope_for(ZoneType::Commercial).clone()
        );
        assert!(report.ml_confidence >= LOCAL_CONFIDENCE_BASE);
        assert!(report.ml_confidence < LOCAL_CONFIDENCE_BASE + 0.1);
    }

    #[test]
    fn no_nearby_areas_defaults_to_residential() {
        let mut req = request();
        req.nearby_areas.clear();
        let report = generate_report(&req, None, &mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        assert_eq!(
            report.zoning_source,
            ClassificationSource::LocalDefault {
                degraded: Some(DegradedReason::NoNearbyAreas),
            }
        );
        assert_eq!(
            report.zoning_details,
            envelope_for(ZoneType::Residential).clone()
        );
    }

    #[test]
    fn oracle_verdict_is_used_when_available() {
        let report = generate_report(
            &request(),
            Some(&GoodOracle),
            &mut ChaCha8Rng::seed_from_u64(4),
        )
        .unwrap();
        assert_eq!(
            report.zoning_source,
            ClassificationSource::Model {
                version: "zoning-rf-v2".to_string(),
            }
        );
        assert!((report.ml_confidence - 0.93).abs() < f64::EPSILON);
    }

    #[test]
    fn oracle_outage_degrades_to_local_vote() {
        let report = generate_report(
            &request(),
            Some(&DownOracle),
            &mut ChaCha8Rng::seed_from_u64(5),
        )
        .unwrap();
        assert_eq!(
            report.zoning_source,
            ClassificationSource::LocalVote {
                degraded: Some(DegradedReason::OracleUnavailable),
            }
        );
    }

    #[test]
    fn oracle_outage_with_no_areas_records_the_outage() {
        let mut req = request();
        req.nearby_areas.clear();
        let report = generate_report(
            &req,
            Some(&DownOracle),
            &mut ChaCha8Rng::seed_from_u64(6),
        )
        .unwrap();
        assert_eq!(
            report.zoning_source,
            ClassificationSource::LocalDefault {
                degraded: Some(DegradedReason::OracleUnavailable),
            }
        );
    }

    #[test]
    fn missing_documents_abort_generation() {
        let err = generate_report(
            &request(),
            Some(&DoclessOracle),
            &mut ChaCha8Rng::seed_from_u64(7),
        )
        .unwrap_err();
        match err {
            ReportError::MissingZoningDocuments { city } => assert_eq!(city, "bangalore"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn environmental_supplements_ride_along() {
        let report =
            generate_report(&request(), None, &mut ChaCha8Rng::seed_from_u64(8)).unwrap();
        assert_eq!(report.aqi_forecast.as_ref().unwrap().len(), AQI_FORECAST_DAYS);
        assert_eq!(
            report.road_condition.as_deref(),
            Some("Paved (Asphalt), Good")
        );
        // commercial vote in a high-risk city
        assert!(report.lightning_risk.warning.is_some());
    }

    #[test]
    fn aqi_is_omitted_without_a_current_reading() {
        let mut req = request();
        req.current_aqi = None;
        let report = generate_report(&req, None, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert!(report.aqi_forecast.is_none());
    }

    #[test]
    fn unknown_city_falls_back_to_the_default() {
        let mut req = request();
        req.city = "atlantis".to_string();
        let report = generate_report(&req, None, &mut ChaCha8Rng::seed_from_u64(10)).unwrap();
        assert_eq!(report.city, "bangalore");
        assert_eq!(report.pricing.currency, "\u{20b9}");
    }

    #[test]
    fn report_serializes_to_camel_case_json() {
        let report =
            generate_report(&request(), None, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["parcelInfo"]["areaSqm"].is_u64());
        assert!(json["mlConfidence"].is_f64());
        assert!(json["zoningSource"]["kind"].is_string());
        assert_eq!(json["recommendations"][0]["type"], "info");
        assert_eq!(json["scenarios"].as_array().unwrap().len(), 3);
        assert!(json["traffic"]["peakHourTrips"].is_u64());
    }

    #[test]
    fn parcel_numbers_flow_into_the_report() {
        let report =
            generate_report(&request(), None, &mut ChaCha8Rng::seed_from_u64(12)).unwrap();
        assert!(report.parcel_info.area_sqm > 0);
        assert!(report.parcel_info.perimeter_m > 0);
        assert_eq!(report.parcel_info.coordinates.len(), 4);
        assert!(report.traffic.daily_trips > 0);
        assert!(report.pricing.estimated_value.max > report.pricing.estimated_value.min);
    }
}
