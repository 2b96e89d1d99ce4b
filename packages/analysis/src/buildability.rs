//! Buildability scoring: a fixed-budget weighted sum over zoning, site
//! area, and amenity proximity.
//!
//! The point budget is 25 + 20 + 20 + 20 + 15; the total reaches 100 only
//! when every factor hits its best-case branch. Amenity categories with no
//! data earn a reduced "limited" factor rather than crediting proximity
//! that was never measured.

use parcelscope_report_models::{
    Amenity, AmenityCatalog, BuildabilityScore, FactorStatus, Grade, ScoringFactor,
};
use parcelscope_zoning_models::RegulatoryEnvelope;

/// Scores how favorable a parcel is for development.
#[must_use]
pub fn score_buildability(
    envelope: &RegulatoryEnvelope,
    area_sqm: f64,
    amenities: &AmenityCatalog,
) -> BuildabilityScore {
    let mut factors = Vec::with_capacity(5);

    // Zoning compliance: an envelope with a FAR band is compliant.
    if envelope.far.max > 0.0 {
        factors.push(factor("Zoning Compliance", 25, FactorStatus::Excellent));
    } else {
        factors.push(factor("Zoning Compliance", 0, FactorStatus::Limited));
    }

    if area_sqm > 500.0 {
        factors.push(factor("Site Area", 20, FactorStatus::Good));
    } else {
        factors.push(factor("Site Area", 10, FactorStatus::Fair));
    }

    factors.push(proximity_factor(
        "School Proximity",
        average_distance(&amenities.schools),
        2.0,
        (20, 10, 5),
    ));

    factors.push(proximity_factor(
        "Transport Access",
        nearest_distance(&amenities.transport),
        2.0,
        (20, 10, 5),
    ));

    factors.push(proximity_factor(
        "Healthcare Access",
        average_distance(&amenities.hospitals),
        3.0,
        (15, 8, 3),
    ));

    let score: u8 = factors.iter().map(|f| f.score).sum();

    BuildabilityScore {
        score,
        grade: grade_for(score),
        factors,
    }
}

/// Maps a score to its letter grade at the 85/75/65/55 thresholds.
#[must_use]
pub const fn grade_for(score: u8) -> Grade {
    if score > 85 {
        Grade::APlus
    } else if score > 75 {
        Grade::A
    } else if score > 65 {
        Grade::BPlus
    } else if score > 55 {
        Grade::B
    } else {
        Grade::C
    }
}

fn factor(name: &str, score: u8, status: FactorStatus) -> ScoringFactor {
    ScoringFactor {
        name: name.to_string(),
        score,
        status,
    }
}

/// Builds a proximity factor from a measured distance against a threshold.
///
/// `points` is `(near, far, missing)`: the award when the distance beats the
/// threshold, when it does not, and when the category had no data at all.
fn proximity_factor(
    name: &str,
    distance_km: Option<f64>,
    threshold_km: f64,
    points: (u8, u8, u8),
) -> ScoringFactor {
    let (near, far, missing) = points;
    match distance_km {
        Some(d) if d < threshold_km => factor(name, near, FactorStatus::Excellent),
        Some(_) => factor(name, far, FactorStatus::Good),
        None => factor(name, missing, FactorStatus::Limited),
    }
}

fn average_distance(amenities: &[Amenity]) -> Option<f64> {
    if amenities.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = amenities.len() as f64;
    Some(amenities.iter().map(|a| a.distance_km).sum::<f64>() / n)
}

fn nearest_distance(amenities: &[Amenity]) -> Option<f64> {
    amenities
        .iter()
        .map(|a| a.distance_km)
        .min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcelscope_zoning::envelope_for;
    use parcelscope_zoning_models::ZoneType;

    fn amenity(name: &str, distance_km: f64) -> Amenity {
        Amenity {
            name: name.to_string(),
            distance_km,
            walking_time_min: None,
            driving_time_min: None,
        }
    }

    fn full_catalog() -> AmenityCatalog {
        AmenityCatalog {
            schools: vec![amenity("Local School", 1.0), amenity("High School", 2.0)],
            hospitals: vec![amenity("City Hospital", 2.0)],
            transport: vec![amenity("Metro Station", 1.0), amenity("Bus Stop", 3.0)],
            parks: vec![],
        }
    }

    #[test]
    fn best_case_scores_100_and_grades_a_plus() {
        // avg schools 1.5km, nearest transit 1.0km, avg hospitals 2.0km
        let catalog = AmenityCatalog {
            schools: vec![amenity("A", 1.0), amenity("B", 2.0)],
            hospitals: vec![amenity("H", 2.0)],
            transport: vec![amenity("M", 1.0)],
            parks: vec![],
        };
        let result = score_buildability(envelope_for(ZoneType::Residential), 600.0, &catalog);
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, Grade::APlus);
        assert_eq!(result.factors.len(), 5);
    }

    #[test]
    fn small_site_takes_the_fair_branch() {
        let result = score_buildability(envelope_for(ZoneType::Residential), 400.0, &full_catalog());
        let site = result
            .factors
            .iter()
            .find(|f| f.name == "Site Area")
            .unwrap();
        assert_eq!(site.score, 10);
        assert_eq!(site.status, FactorStatus::Fair);
    }

    #[test]
    fn missing_amenity_category_is_limited() {
        let result = score_buildability(
            envelope_for(ZoneType::Residential),
            600.0,
            &AmenityCatalog::default(),
        );
        // 25 + 20 + 5 + 5 + 3
        assert_eq!(result.score, 58);
        assert_eq!(result.grade, Grade::B);
        assert!(
            result
                .factors
                .iter()
                .filter(|f| f.status == FactorStatus::Limited)
                .count()
                == 3
        );
    }

    #[test]
    fn score_never_exceeds_100() {
        let result = score_buildability(envelope_for(ZoneType::Commercial), 10_000.0, &full_catalog());
        assert!(result.score <= 100);
    }

    #[test]
    fn grade_thresholds_are_exclusive() {
        assert_eq!(grade_for(86), Grade::APlus);
        assert_eq!(grade_for(85), Grade::A);
        assert_eq!(grade_for(76), Grade::A);
        assert_eq!(grade_for(75), Grade::BPlus);
        assert_eq!(grade_for(66), Grade::BPlus);
        assert_eq!(grade_for(65), Grade::B);
        assert_eq!(grade_for(56), Grade::B);
        assert_eq!(grade_for(55), Grade::C);
        assert_eq!(grade_for(0), Grade::C);
    }
}
