//! Environmental supplements: AQI forecast and lightning risk.

use parcelscope_report_models::{LightningRisk, LightningRiskLevel};
use parcelscope_zoning_models::ZoneType;
use rand::Rng;

/// Cities with elevated lightning strike frequency.
const HIGH_RISK_CITIES: [&str; 4] = ["bangalore", "kolkata", "ranchi", "bhubaneswar"];

const HIGH_RISK_WARNING: &str = "High Lightning Risk Area. Install advanced lightning \
     protection systems (LPS) as per IS/IEC 62305.";
const MODERATE_RISK_WARNING: &str =
    "Moderate Lightning Risk. Basic lightning protection recommended.";

/// Forecasts AQI for the next `days` days from a current reading.
///
/// A bounded random walk with mild reversion toward the starting value;
/// a placeholder for the real forecasting backend, so only the shape and
/// bounds are contractual: `days` non-negative integers.
pub fn aqi_forecast<R: Rng + ?Sized>(current_aqi: u32, days: usize, rng: &mut R) -> Vec<u32> {
    let baseline = f64::from(current_aqi);
    let mut level = baseline;
    let mut forecast = Vec::with_capacity(days);

    for _ in 0..days {
        let drift = (baseline - level) * 0.1;
        level = (level + drift + rng.gen_range(-8.0..8.0)).max(0.0);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        forecast.push(level.round() as u32);
    }
    forecast
}

/// Assesses lightning risk from the city and the classified zone.
///
/// High-risk cities with tall building types (commercial, mixed) are High;
/// other development in those cities is Moderate; everywhere else is Low
/// with no warning attached.
#[must_use]
pub fn lightning_risk(city_id: &str, zone: ZoneType) -> LightningRisk {
    if !HIGH_RISK_CITIES.contains(&city_id.to_lowercase().as_str()) {
        return LightningRisk {
            risk_level: LightningRiskLevel::Low,
            warning: None,
        };
    }

    if matches!(zone, ZoneType::Commercial | ZoneType::Mixed) {
        LightningRisk {
            risk_level: LightningRiskLevel::High,
            warning: Some(HIGH_RISK_WARNING.to_string()),
        }
    } else {
        LightningRisk {
            risk_level: LightningRiskLevel::Moderate,
            warning: Some(MODERATE_RISK_WARNING.to_string()),
        }
    }
}
