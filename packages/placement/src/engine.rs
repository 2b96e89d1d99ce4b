//! Constrained random placement of building footprints inside a parcel.

use geo::Coord;
use parcelscope_geometry::{
    Parcel,
    units::{METERS_PER_DEGREE, meters_to_degrees},
};
use rand::Rng;

use crate::templates::{BuildingTemplate, default_catalog};

/// Tunable knobs for the placement sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Minimum clearance between building footprints, in meters.
    pub min_spacing_m: f64,
    /// Upper bound on placements regardless of parcel size.
    pub max_buildings: usize,
    /// Sampling attempts allowed per requested building.
    pub attempts_per_building: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_spacing_m: 3.0,
            max_buildings: 8,
            attempts_per_building: 20,
        }
    }
}

/// A single accepted building placement.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingPlacement {
    /// Stable identifier, `building-1` upward in acceptance order.
    pub id: String,
    /// Footprint center in `(longitude, latitude)`.
    pub center: Coord<f64>,
    /// Rotation of the footprint about its center, degrees.
    pub rotation_deg: f64,
    /// The template this placement instantiates.
    pub template: BuildingTemplate,
    /// The rotated footprint ring (4 corners, open), when it fits the parcel.
    ///
    /// `None` only for the centroid fallback on a parcel too small to hold
    /// the footprint at all.
    pub footprint: Option<Vec<Coord<f64>>>,
}

/// How many buildings a parcel of `area_sqm` should request.
///
/// Each building reserves its footprint plus the spacing margin on every
/// side; the result is clamped to `1..=max_buildings` so even a sliver of a
/// parcel requests one building and a campus-sized one stays renderable.
#[must_use]
pub fn building_count_for(
    area_sqm: f64,
    template: &BuildingTemplate,
    config: &PlacementConfig,
) -> usize {
    let effective_sqm = (template.width_m + 2.0 * config.min_spacing_m)
        * (template.length_m + 2.0 * config.min_spacing_m);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let raw = (area_sqm / effective_sqm).floor().max(0.0) as usize;
    raw.clamp(1, config.max_buildings)
}

/// Places buildings inside `parcel` by greedy randomized accept/reject
/// sampling over the bounding box.
///
/// Every accepted footprint is fully contained in the parcel and keeps
/// center distance to its peers of at least the sum of their footprint
/// half-diagonals plus the configured spacing, so footprints cannot overlap
/// at any rotation. Exhausting the attempt budget is not an error; the
/// function degrades to fewer buildings, and in the worst case to a single
/// placement at the parcel centroid.
pub fn place_buildings<R: Rng + ?Sized>(
    parcel: &Parcel,
    catalog: &[BuildingTemplate],
    config: &PlacementConfig,
    rng: &mut R,
) -> Vec<BuildingPlacement> {
    let fallback_catalog;
    let catalog = if catalog.is_empty() {
        log::warn!("empty building catalog, using the built-in templates");
        fallback_catalog = default_catalog();
        &fallback_catalog
    } else {
        catalog
    };

    let count = building_count_for(parcel.area_sqm(), &catalog[0], config);
    if count == 1 {
        return vec![centroid_placement(parcel, &catalog[0])];
    }

    let Some(bounds) = parcel.bounding_rect() else {
        return vec![centroid_placement(parcel, &catalog[0])];
    };
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return vec![centroid_placement(parcel, &catalog[0])];
    }

    let mut accepted: Vec<BuildingPlacement> = Vec::with_capacity(count);
    let budget = count * config.attempts_per_building;

    for _ in 0..budget {
        if accepted.len() == count {
            break;
        }

        let center = Coord {
            x: rng.gen_range(bounds.min().x..bounds.max().x),
            y: rng.gen_range(bounds.min().y..bounds.max().y),
        };
        if !parcel.contains(center) {
            continue;
        }

        let template = &catalog[rng.gen_range(0..catalog.len())];
        let rotation_deg = rng.gen_range(0.0..360.0);

        let ring = footprint_ring(center, rotation_deg, template);
        if !ring.iter().all(|corner| parcel.contains(*corner)) {
            continue;
        }

        let too_close = accepted.iter().any(|other| {
            let required_m =
                template.radius_m() + other.template.radius_m() + config.min_spacing_m;
            center_distance_m(center, other.center) < required_m
        });
        if too_close {
            continue;
        }

        accepted.push(BuildingPlacement {
            id: format!("building-{}", accepted.len() + 1),
            center,
            rotation_deg,
            template: template.clone(),
            footprint: Some(ring),
        });
    }

    if accepted.is_empty() {
        log::debug!("placement sampling exhausted, falling back to centroid");
        return vec![centroid_placement(parcel, &catalog[0])];
    }

    if accepted.len() < count {
        log::debug!(
            "placed {placed} of {count} requested buildings",
            placed = accepted.len(),
        );
    }
    accepted
}

/// The guaranteed-success placement: one building at the parcel centroid,
/// unrotated. The footprint is attached only when it actually fits.
fn centroid_placement(parcel: &Parcel, template: &BuildingTemplate) -> BuildingPlacement {
    let center = parcel.centroid();
    let ring = footprint_ring(center, 0.0, template);
    let footprint = ring
        .iter()
        .all(|corner| parcel.contains(*corner))
        .then_some(ring);

    BuildingPlacement {
        id: "building-1".to_string(),
        center,
        rotation_deg: 0.0,
        template: template.clone(),
        footprint,
    }
}

/// The four footprint corners rotated about `center`, in ring order.
fn footprint_ring(
    center: Coord<f64>,
    rotation_deg: f64,
    template: &BuildingTemplate,
) -> Vec<Coord<f64>> {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let hw = template.width_m / 2.0;
    let hl = template.length_m / 2.0;

    [(-hw, -hl), (hw, -hl), (hw, hl), (-hw, hl)]
        .iter()
        .map(|&(dx, dy)| Coord {
            x: center.x + meters_to_degrees(dx.mul_add(cos, -(dy * sin))),
            y: center.y + meters_to_degrees(dx.mul_add(sin, dy * cos)),
        })
        .collect()
}

/// Planar distance between two centers in meters, using the isotropic
/// meters-per-degree factor the footprints themselves are projected with.
fn center_distance_m(a: Coord<f64>, b: Coord<f64>) -> f64 {
    ((a.x - b.x) * METERS_PER_DEGREE).hypot((a.y - b.y) * METERS_PER_DEGREE)
}
