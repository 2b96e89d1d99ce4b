//! `GeoJSON` export of accepted placements for the rendering collaborator.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::engine::BuildingPlacement;

/// Converts placements into a `GeoJSON` `FeatureCollection`.
///
/// Placements with a footprint become `Polygon` features with a closed
/// exterior ring; footprint-less fallback placements become `Point`
/// features at the building center. Template metadata rides along as
/// feature properties.
#[must_use]
pub fn placements_to_geojson(placements: &[BuildingPlacement]) -> FeatureCollection {
    let features = placements
        .iter()
        .map(|placement| {
            let geometry = placement.footprint.as_ref().map_or_else(
                || Geometry::new(Value::Point(vec![placement.center.x, placement.center.y])),
                |ring| {
                    let mut positions: Vec<Vec<f64>> =
                        ring.iter().map(|c| vec![c.x, c.y]).collect();
                    if let Some(first) = positions.first().cloned() {
                        positions.push(first);
                    }
                    Geometry::new(Value::Polygon(vec![positions]))
                },
            );

            Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(properties_for(placement)),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn properties_for(placement: &BuildingPlacement) -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), json!(placement.id));
    properties.insert("name".to_string(), json!(placement.template.name));
    properties.insert("height".to_string(), json!(placement.template.height_m));
    properties.insert("color".to_string(), json!(placement.template.color));
    properties.insert("rotation".to_string(), json!(placement.rotation_deg));
    properties
}
