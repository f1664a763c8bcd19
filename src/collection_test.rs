use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::geo::Properties;

fn named(geometry: Geometry, name: &str) -> Feature {
    let mut props = Properties::new();
    props.insert("name".into(), json!(name));
    Feature::with_properties(geometry, props)
}

fn three() -> FeatureCollection {
    FeatureCollection::new(vec![
        named(Geometry::Point([0.0, 0.0]), "a"),
        named(Geometry::LineString(vec![[0.0, 0.0], [1.0, 1.0]]), "b"),
        named(Geometry::Point([5.0, 5.0]), "c"),
    ])
}

// =============================================================
// Construction / access
// =============================================================

#[test]
fn new_keeps_order() {
    let fc = three();
    assert_eq!(fc.len(), 3);
    assert!(!fc.is_empty());
    let names: Vec<_> = fc.iter().filter_map(|f| f.property_str("name")).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn default_is_empty() {
    let fc = FeatureCollection::default();
    assert!(fc.is_empty());
    assert!(fc.get(0).is_none());
}

#[test]
fn collect_from_features() {
    let fc: FeatureCollection = (0..4_u8).map(|i| Feature::new(Geometry::Point([f64::from(i), 0.0]))).collect();
    assert_eq!(fc.len(), 4);
}

#[test]
fn from_json_parses_geojson() {
    let raw = json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [1, 2] }, "properties": { "id": 7 } },
        ],
    })
    .to_string();
    let fc = FeatureCollection::from_json(&raw).unwrap();
    assert_eq!(fc.len(), 1);
    assert_eq!(fc.get(0).unwrap().properties["id"], json!(7));
}

#[test]
fn from_json_rejects_garbage() {
    let err = FeatureCollection::from_json("{not json").unwrap_err();
    assert!(matches!(err, GeoEditError::InvalidJson(_)));
}

#[test]
fn serializes_type_tag() {
    let v = serde_json::to_value(three()).unwrap();
    assert_eq!(v["type"], "FeatureCollection");
    assert_eq!(v["features"].as_array().map(Vec::len), Some(3));
}

// =============================================================
// replace_geometry
// =============================================================

#[test]
fn replace_geometry_returns_new_value() {
    let original = three();
    let updated = original.replace_geometry(1, Geometry::Point([9.0, 9.0])).unwrap();

    assert_eq!(updated.get(1).unwrap().geometry, Geometry::Point([9.0, 9.0]));
    assert_eq!(original.get(1).unwrap().geometry, Geometry::LineString(vec![[0.0, 0.0], [1.0, 1.0]]));
}

#[test]
fn replace_geometry_keeps_properties() {
    let updated = three().replace_geometry(2, Geometry::Point([1.0, 1.0])).unwrap();
    assert_eq!(updated.get(2).unwrap().property_str("name"), Some("c"));
}

#[test]
fn replace_geometry_shares_untouched_features() {
    let original = three();
    let updated = original.replace_geometry(1, Geometry::Point([9.0, 9.0])).unwrap();

    assert!(Arc::ptr_eq(original.get_shared(0).unwrap(), updated.get_shared(0).unwrap()));
    assert!(Arc::ptr_eq(original.get_shared(2).unwrap(), updated.get_shared(2).unwrap()));
    assert!(!Arc::ptr_eq(original.get_shared(1).unwrap(), updated.get_shared(1).unwrap()));
}

#[test]
fn replace_geometry_keeps_length() {
    let updated = three().replace_geometry(0, Geometry::Point([1.0, 1.0])).unwrap();
    assert_eq!(updated.len(), 3);
}

#[test]
fn replace_geometry_out_of_bounds_errors() {
    let err = three().replace_geometry(3, Geometry::Point([0.0, 0.0])).unwrap_err();
    assert!(matches!(err, GeoEditError::IndexOutOfBounds { index: 3, len: 3 }));
    assert!(err.to_string().contains("out of bounds"));
}
