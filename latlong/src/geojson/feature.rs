use serde::{Deserialize, Serialize};

use super::GeoJsonGeometry;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureCollectionTag {
    #[default]
    FeatureCollection,
}

/// GeoJSON feature: a geometry with arbitrary properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<P> {
    #[serde(rename = "type")]
    tag: FeatureTag,
    /// Geometry of the feature.
    pub geometry: GeoJsonGeometry,
    /// Properties of the feature.
    pub properties: P,
}

impl<P> Feature<P> {
    /// Creates a new feature.
    pub fn new(geometry: impl Into<GeoJsonGeometry>, properties: P) -> Self {
        Self {
            tag: FeatureTag::Feature,
            geometry: geometry.into(),
            properties,
        }
    }
}

/// GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection<P> {
    #[serde(rename = "type")]
    tag: FeatureCollectionTag,
    /// Features of the collection.
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features: Vec::new(),
        }
    }

    /// Appends a feature to the collection.
    pub fn add_feature(&mut self, feature: Feature<P>) -> &mut Self {
        self.features.push(feature);
        self
    }
}

impl<P> Default for FeatureCollection<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FromIterator<Feature<P>> for FeatureCollection<P> {
    fn from_iter<T: IntoIterator<Item = Feature<P>>>(iter: T) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features: iter.into_iter().collect(),
        }
    }
}
