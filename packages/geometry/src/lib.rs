#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry engine for parcel polygons drawn on a map.
//!
//! A [`Parcel`] is an ordered ring of `(longitude, latitude)` vertices. Area
//! and perimeter use a planar approximation with per-axis meters-per-degree
//! scaling rather than a true geodesic formula; downstream pricing and
//! scenario numbers depend on reproducing that approximation exactly, so the
//! `geo` crate is used only for containment and bounding boxes here, never
//! for area.

pub mod units;

use geo::{BoundingRect, Contains, Coord, LineString, Point, Polygon, Rect};

use crate::units::{METERS_PER_DEGREE_LAT, METERS_PER_DEGREE_LNG};

/// A parcel polygon in geographic coordinates.
///
/// The ring is stored open: if the caller supplies a closing vertex that
/// repeats the first, it is dropped at construction so vertex-based
/// computations (notably the vertex-mean centroid) are not skewed toward the
/// start of the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    vertices: Vec<Coord<f64>>,
}

impl Parcel {
    /// Creates a parcel from an ordered vertex ring.
    #[must_use]
    pub fn new(mut vertices: Vec<Coord<f64>>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    /// Creates a parcel from `(longitude, latitude)` pairs.
    #[must_use]
    pub fn from_lng_lat(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().map(|&(x, y)| Coord { x, y }).collect())
    }

    /// The open vertex ring (no closing duplicate).
    #[must_use]
    pub fn vertices(&self) -> &[Coord<f64>] {
        &self.vertices
    }

    /// Whether the parcel has at least 3 distinct vertices.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut distinct: Vec<Coord<f64>> = Vec::new();
        for v in &self.vertices {
            if !distinct.contains(v) {
                distinct.push(*v);
            }
            if distinct.len() >= 3 {
                return true;
            }
        }
        false
    }

    /// Planar shoelace area in square meters, with each axis scaled by its
    /// meters-per-degree factor.
    ///
    /// Degenerate rings (fewer than 3 vertices) yield `0.0`.
    #[must_use]
    pub fn area_sqm(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let xi = self.vertices[i].x * METERS_PER_DEGREE_LNG;
            let yi = self.vertices[i].y * METERS_PER_DEGREE_LAT;
            let xj = self.vertices[j].x * METERS_PER_DEGREE_LNG;
            let yj = self.vertices[j].y * METERS_PER_DEGREE_LAT;
            area += xi * yj - xj * yi;
        }
        (area / 2.0).abs()
    }

    /// Perimeter in meters: sum of straight-line edge lengths under the same
    /// per-axis scaling as [`Self::area_sqm`].
    #[must_use]
    pub fn perimeter_m(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }

        let mut perimeter = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let dx = (self.vertices[j].x - self.vertices[i].x) * METERS_PER_DEGREE_LNG;
            let dy = (self.vertices[j].y - self.vertices[i].y) * METERS_PER_DEGREE_LAT;
            perimeter += dx.hypot(dy);
        }
        perimeter
    }

    /// Arithmetic mean of the vertices.
    ///
    /// This is the drawing tool's notion of a parcel center, not the
    /// area-weighted centroid.
    #[must_use]
    pub fn centroid(&self) -> Coord<f64> {
        if self.vertices.is_empty() {
            return Coord { x: 0.0, y: 0.0 };
        }

        #[allow(clippy::cast_precision_loss)]
        let n = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold(Coord { x: 0.0, y: 0.0 }, |acc, v| Coord {
                x: acc.x + v.x,
                y: acc.y + v.y,
            });
        Coord {
            x: sum.x / n,
            y: sum.y / n,
        }
    }

    /// Whether `point` lies strictly inside the parcel.
    ///
    /// Points exactly on the boundary count as outside. Always `false` for
    /// degenerate parcels.
    #[must_use]
    pub fn contains(&self, point: Coord<f64>) -> bool {
        if !self.is_valid() {
            return false;
        }
        self.to_polygon().contains(&Point::from(point))
    }

    /// Axis-aligned bounding rectangle, or `None` for an empty ring.
    #[must_use]
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.to_polygon().bounding_rect()
    }

    /// The parcel as a closed [`geo::Polygon`].
    #[must_use]
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(LineString::from(self.vertices.clone()), vec![])
    }
}
