#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Zoning rule table and local zone classification.
//!
//! The rule table is the domain ground truth for regulatory envelopes absent
//! city-specific documents. The classifier is the local fallback path: when
//! no external inference backend is available it infers a parcel's dominant
//! zone from the labeled areas around it.

pub mod classify;
pub mod rules;

pub use classify::classify;
pub use rules::envelope_for;
