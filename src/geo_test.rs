use serde_json::json;

use super::*;

fn square() -> Geometry {
    Geometry::Polygon(vec![vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]])
}

// =============================================================
// Geometry serde
// =============================================================

#[test]
fn point_serializes_as_geojson() {
    let v = serde_json::to_value(Geometry::Point([1.5, -2.0])).unwrap();
    assert_eq!(v, json!({ "type": "Point", "coordinates": [1.5, -2.0] }));
}

#[test]
fn polygon_deserializes_from_geojson() {
    let g: Geometry = serde_json::from_value(json!({
        "type": "Polygon",
        "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]],
    }))
    .unwrap();
    assert_eq!(g, square());
}

#[test]
fn unknown_geometry_type_is_rejected() {
    let res: Result<Geometry, _> = serde_json::from_value(json!({ "type": "Circle", "coordinates": [0, 0] }));
    assert!(res.is_err());
}

// =============================================================
// Geometry accessors
// =============================================================

#[test]
fn is_point_only_for_single_point() {
    assert!(Geometry::Point([0.0, 0.0]).is_point());
    assert!(!Geometry::MultiPoint(vec![[0.0, 0.0]]).is_point());
    assert!(!square().is_point());
}

#[test]
fn type_names_match_geojson() {
    assert_eq!(square().type_name(), "Polygon");
    assert_eq!(Geometry::LineString(vec![]).type_name(), "LineString");
    assert_eq!(Geometry::MultiPolygon(vec![]).type_name(), "MultiPolygon");
}

#[test]
fn positions_include_ring_closure() {
    assert_eq!(square().positions().len(), 5);
}

#[test]
fn vertices_skip_ring_closure() {
    let v = square().vertices();
    assert_eq!(v, vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
}

#[test]
fn vertices_of_multipolygon_skip_each_closure() {
    let g = Geometry::MultiPolygon(vec![
        vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
        vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]],
    ]);
    assert_eq!(g.vertices().len(), 6);
}

#[test]
fn vertices_of_line_keep_all_positions() {
    let g = Geometry::LineString(vec![[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
    assert_eq!(g.vertices().len(), 3);
}

#[test]
fn map_positions_preserves_shape() {
    let moved = square().map_positions(|[x, y]| [x + 10.0, y]);
    let Geometry::Polygon(rings) = moved else {
        panic!("expected polygon");
    };
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0][0], [10.0, 0.0]);
    assert_eq!(rings[0][4], [10.0, 0.0]);
}

// =============================================================
// Feature
// =============================================================

#[test]
fn feature_without_properties_deserializes() {
    let f: Feature = serde_json::from_value(json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [1, 2] },
    }))
    .unwrap();
    assert!(f.properties.is_empty());
    assert_eq!(f.geometry, Geometry::Point([1.0, 2.0]));
}

#[test]
fn feature_serializes_type_tag() {
    let v = serde_json::to_value(Feature::new(Geometry::Point([0.0, 0.0]))).unwrap();
    assert_eq!(v["type"], "Feature");
    assert_eq!(v["properties"], json!({}));
}

#[test]
fn property_str_reads_strings_only() {
    let mut props = Properties::new();
    props.insert("name".into(), json!("parcel"));
    props.insert("area".into(), json!(12));
    let f = Feature::with_properties(square(), props);
    assert_eq!(f.property_str("name"), Some("parcel"));
    assert_eq!(f.property_str("area"), None);
    assert_eq!(f.property_str("missing"), None);
}
