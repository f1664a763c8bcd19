//! Geometry model: positions, GeoJSON-shaped geometries, and features.
//!
//! Positions are `[longitude, latitude]` pairs in map coordinates. The serde
//! layout follows GeoJSON (`{"type": "Polygon", "coordinates": [...]}`) so
//! collections can be loaded from and written back to the host verbatim.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A map-space coordinate pair: `[x, y]` (longitude, latitude).
pub type Position = [f64; 2];

/// Property bag carried by a feature.
pub type Properties = Map<String, Value>;

/// A vector geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    /// Rings are closed: the first and last position coincide.
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl Geometry {
    /// Whether this is a single `Point` (not a `MultiPoint`).
    #[must_use]
    pub fn is_point(&self) -> bool {
        matches!(self, Self::Point(_))
    }

    /// GeoJSON type name of this geometry.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::MultiPoint(_) => "MultiPoint",
            Self::LineString(_) => "LineString",
            Self::MultiLineString(_) => "MultiLineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Every position in document order, ring-closing duplicates included.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        match self {
            Self::Point(p) => vec![*p],
            Self::MultiPoint(ps) | Self::LineString(ps) => ps.clone(),
            Self::MultiLineString(lines) | Self::Polygon(lines) => lines.iter().flatten().copied().collect(),
            Self::MultiPolygon(polys) => polys.iter().flatten().flatten().copied().collect(),
        }
    }

    /// Distinct vertices: like [`Geometry::positions`] but skipping the closing
    /// position of each polygon ring.
    #[must_use]
    pub fn vertices(&self) -> Vec<Position> {
        fn open_ring(ring: &[Position]) -> &[Position] {
            match ring.split_last() {
                Some((_, rest)) if !rest.is_empty() => rest,
                _ => ring,
            }
        }
        match self {
            Self::Polygon(rings) => rings.iter().flat_map(|r| open_ring(r)).copied().collect(),
            Self::MultiPolygon(polys) => polys.iter().flatten().flat_map(|r| open_ring(r)).copied().collect(),
            other => other.positions(),
        }
    }

    /// Build a new geometry of the same shape with every position mapped through `f`.
    #[must_use]
    pub fn map_positions<F>(&self, f: F) -> Self
    where
        F: Fn(Position) -> Position,
    {
        let line = |ps: &Vec<Position>| ps.iter().map(|p| f(*p)).collect::<Vec<_>>();
        match self {
            Self::Point(p) => Self::Point(f(*p)),
            Self::MultiPoint(ps) => Self::MultiPoint(line(ps)),
            Self::LineString(ps) => Self::LineString(line(ps)),
            Self::MultiLineString(lines) => Self::MultiLineString(lines.iter().map(line).collect()),
            Self::Polygon(rings) => Self::Polygon(rings.iter().map(line).collect()),
            Self::MultiPolygon(polys) => {
                Self::MultiPolygon(polys.iter().map(|rings| rings.iter().map(line).collect()).collect())
            }
        }
    }
}

/// GeoJSON `"type": "Feature"` marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureTag {
    #[default]
    Feature,
}

/// A geometry plus its open-ended properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default)]
    pub tag: FeatureTag,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Properties,
}

impl Feature {
    /// A feature with no properties.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self { tag: FeatureTag::Feature, geometry, properties: Properties::new() }
    }

    /// A feature carrying the given properties.
    #[must_use]
    pub fn with_properties(geometry: Geometry, properties: Properties) -> Self {
        Self { tag: FeatureTag::Feature, geometry, properties }
    }

    /// String-valued property lookup. `None` when absent or not a string.
    #[must_use]
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}
