#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Deterministic estimators over a classified parcel.
//!
//! Everything here is synchronous arithmetic over inputs the caller already
//! holds: the buildability scorer, the scenario generator, the pricing
//! estimator, and the trip-generation estimator. Only the market-trend
//! jitter draws randomness, through a caller-supplied [`rand::Rng`].

pub mod buildability;
pub mod pricing;
pub mod scenarios;
pub mod traffic;

pub use buildability::score_buildability;
pub use pricing::estimate_pricing;
pub use scenarios::generate_scenarios;
pub use traffic::{congestion_for, estimate_trip_generation};
