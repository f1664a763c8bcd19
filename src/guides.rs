//! Guide features: the selection box outline, the rotate handle and its
//! connecting line, and the pivot marker.
//!
//! Guides are rendering-only. They are rebuilt from scratch on every call and
//! nothing here keeps state between calls.

#[cfg(test)]
#[path = "guides_test.rs"]
mod guides_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collection::CollectionTag;
use crate::geo::{Feature, Geometry, Position, Properties};
use crate::geomath::{bbox, bbox_polygon, centroid, distance, line_slice, midpoint, polygon_to_line, rotate_about, rotate_planar};
use crate::input::{EDIT_HANDLE_TYPE_ROTATE, GUIDE_TYPE_EDIT_HANDLE};

/// `guideType` value for the rotation pivot marker.
pub const GUIDE_TYPE_PIVOT: &str = "pivot";

/// Guide features handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideFeatureCollection {
    #[serde(rename = "type", default)]
    tag: CollectionTag,
    pub features: Vec<Feature>,
}

impl GuideFeatureCollection {
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self { tag: CollectionTag::FeatureCollection, features }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }
}

/// The rotate handle point and the line joining it to the box's top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RotateHandlers {
    pub rotate_handle: Feature,
    pub rotate_line: Feature,
}

fn guide_properties(pairs: &[(&str, &str)]) -> Properties {
    pairs.iter().map(|(k, v)| ((*k).to_string(), Value::from(*v))).collect()
}

/// The pivot marker shown while a rotation is in progress.
#[must_use]
pub fn pivot_marker(pivot: Position) -> Feature {
    Feature::with_properties(Geometry::Point(pivot), guide_properties(&[("guideType", GUIDE_TYPE_PIVOT)]))
}

/// Rotate handle tagged so the picking layer recognizes it.
#[must_use]
pub fn rotate_handle(at: Position) -> Feature {
    Feature::with_properties(
        Geometry::Point(at),
        guide_properties(&[("guideType", GUIDE_TYPE_EDIT_HANDLE), ("editHandleType", EDIT_HANDLE_TYPE_ROTATE)]),
    )
}

/// Derive the rotate handle and line from the enveloping box of a selection.
///
/// The box boundary is walked vertex by vertex. The edge whose midpoint has
/// the greatest y is the top edge; ties keep the first such edge. The rotate
/// line runs from the top-edge midpoint along the edge's perpendicular for
/// `longest edge / divisor`, and the handle sits at its far end.
///
/// Returns `None` when the box has no edges.
#[must_use]
pub fn rotate_handlers(bounding_box: &Geometry, divisor: f64) -> Option<RotateHandlers> {
    let coords = bounding_box.positions();

    let mut top: Option<(Position, [Position; 2])> = None;
    let mut longest_edge = 0.0_f64;
    for pair in coords.windows(2) {
        let (previous, coord) = (pair[0], pair[1]);
        let mid = midpoint(coord, previous);
        if top.is_none_or(|(top_mid, _)| mid[1] > top_mid[1]) {
            top = Some((mid, [coord, previous]));
        }
        longest_edge = longest_edge.max(distance(coord, previous));
    }
    let (top_mid, top_edge) = top?;

    let perpendicular = top_edge.map(|p| rotate_planar(p, -90.0, top_mid));
    let length = longest_edge / divisor;
    let line = line_slice(top_mid, [top_mid[0], top_mid[1] + length], &perpendicular)?;
    let handle_at = *line.last()?;

    tracing::trace!(?top_mid, longest_edge, length, "rotate handle derived");
    Some(RotateHandlers { rotate_handle: rotate_handle(handle_at), rotate_line: Feature::new(Geometry::LineString(line)) })
}

/// Enveloping box of `geometries` as a closed polygon.
///
/// With a view bearing, each geometry is first turned back by the bearing
/// about its own centroid, the axis-aligned box of that is taken, and the box
/// is turned forward by the bearing about the turned-back selection's centroid.
/// The box edges then line up with the screen instead of north.
#[must_use]
pub fn selection_box(geometries: &[Geometry], view_bearing: Option<f64>) -> Option<Geometry> {
    let Some(bearing) = view_bearing else {
        return bbox(geometries).map(bbox_polygon);
    };

    let unrotated: Vec<Geometry> = geometries
        .iter()
        .filter_map(|g| centroid([g]).map(|c| rotate_about(g, -bearing, c)))
        .collect();
    let pivot = centroid(&unrotated)?;
    let aligned = bbox_polygon(bbox(&unrotated)?);
    Some(rotate_about(&aligned, bearing, pivot))
}

/// Guide set shown while idle or armed: box outline, handle, rotate line.
#[must_use]
pub fn selection_guides(geometries: &[Geometry], view_bearing: Option<f64>, divisor: f64) -> GuideFeatureCollection {
    let Some(bounding_box) = selection_box(geometries, view_bearing) else {
        return GuideFeatureCollection::empty();
    };
    let Some(handlers) = rotate_handlers(&bounding_box, divisor) else {
        return GuideFeatureCollection::empty();
    };
    GuideFeatureCollection::new(vec![
        Feature::new(polygon_to_line(&bounding_box)),
        handlers.rotate_handle,
        handlers.rotate_line,
    ])
}
