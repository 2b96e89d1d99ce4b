#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Building placement within a parcel polygon.
//!
//! A greedy randomized accept/reject sampler, not an optimal packer: it
//! samples candidate positions in the parcel's bounding box and keeps the
//! ones whose footprints are contained in the parcel with adequate spacing
//! from earlier acceptances. Running out of attempts degrades to fewer
//! buildings, and ultimately to a single centroid placement. It never
//! produces an error or an empty result.

pub mod engine;
pub mod export;
pub mod templates;

pub use engine::{BuildingPlacement, PlacementConfig, building_count_for, place_buildings};
pub use export::placements_to_geojson;
pub use templates::{BuildingTemplate, default_catalog};
