//! The external zoning inference backend seam.
//!
//! The real backend lives outside this workspace; callers adapt it behind
//! [`ZoningOracle`]. The assembler treats every oracle failure except
//! missing zoning documents as degradable: it falls back to the local
//! majority-vote classifier and records why.

use parcelscope_geometry::Parcel;
use parcelscope_zoning_models::{NearbyArea, ZoneType};
use thiserror::Error;

/// A successful oracle classification.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleVerdict {
    /// The predicted zone type.
    pub zone_type: ZoneType,
    /// The model's own confidence in `[0, 1]`.
    pub confidence: f64,
    /// Backend model version string, carried into the report.
    pub model_version: String,
}

/// Failures the oracle can report.
#[derive(Debug, Error)]
pub enum OracleError {
    /// No zoning regulation documents have been uploaded for the city.
    ///
    /// This is a user-facing precondition, not a transient fault, and is
    /// the only oracle error the assembler refuses to degrade past.
    #[error("no zoning regulations found for {city}; upload documents first")]
    MissingZoningDocuments {
        /// The city id the lookup was made for.
        city: String,
    },
    /// The backend was unreachable or returned an unusable response.
    #[error("zoning oracle unavailable: {0}")]
    Unavailable(String),
}

/// An external classifier the report assembler may consult before falling
/// back to the local majority vote.
pub trait ZoningOracle {
    /// Classifies the parcel's zone type.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::MissingZoningDocuments`] when the city has no
    /// uploaded regulations, or [`OracleError::Unavailable`] for any
    /// transient backend failure.
    fn classify(
        &self,
        parcel: &Parcel,
        nearby: &[NearbyArea],
        city: &str,
    ) -> Result<OracleVerdict, OracleError>;
}
