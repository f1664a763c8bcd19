//! Immutable feature collection.
//!
//! Updates never touch the receiver: [`FeatureCollection::replace_geometry`]
//! returns a new collection whose untouched features are the same `Arc`
//! allocations as the original's, so only the replaced feature is copied.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::GeoEditError;
use crate::geo::{Feature, Geometry};

/// GeoJSON `"type": "FeatureCollection"` marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionTag {
    #[default]
    FeatureCollection,
}

/// An ordered, structurally shared collection of features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    tag: CollectionTag,
    features: Vec<Arc<Feature>>,
}

impl FeatureCollection {
    /// Create a collection owning `features`.
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self { tag: CollectionTag::FeatureCollection, features: features.into_iter().map(Arc::new).collect() }
    }

    /// Parse a GeoJSON feature collection.
    pub fn from_json(raw: &str) -> Result<Self, GeoEditError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Feature at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index).map(AsRef::as_ref)
    }

    /// Shared handle to the feature at `index`, if present.
    #[must_use]
    pub fn get_shared(&self, index: usize) -> Option<&Arc<Feature>> {
        self.features.get(index)
    }

    /// Iterate features in order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().map(AsRef::as_ref)
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the collection holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Return a copy of this collection with feature `index`'s geometry
    /// replaced. The feature's properties and every other feature are kept.
    pub fn replace_geometry(&self, index: usize, geometry: Geometry) -> Result<Self, GeoEditError> {
        let Some(current) = self.features.get(index) else {
            return Err(GeoEditError::IndexOutOfBounds { index, len: self.features.len() });
        };
        let replaced = Feature::with_properties(geometry, current.properties.clone());

        let mut features = self.features.clone();
        features[index] = Arc::new(replaced);
        Ok(Self { tag: self.tag, features })
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
