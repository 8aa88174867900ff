//! Feature Alignment

use crate::vocabulary::FeatureVocabulary;
use census_record::Profile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Feature vector for model input.
///
/// One entry per vocabulary name, in vocabulary order: 1.0/0.0 for one-hot
/// positions, the raw value for numeric pass-through positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values in vocabulary order
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// Wrap raw values produced elsewhere
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// One-hot feature name for a categorical field value
pub fn one_hot_name(field: &str, category: &str) -> String {
    format!("{field}_{category}")
}

/// Generate the sparse named features of one profile.
///
/// Numeric fields pass through under their own name; each categorical field
/// yields a single `{field}_{value}` feature set to 1.0. Every category not
/// observed in this profile is absent from the map, which downstream
/// alignment reads as 0.0.
pub fn encode(profile: &Profile) -> HashMap<String, f64> {
    let mut features = HashMap::with_capacity(
        profile.numeric_fields().len() + profile.categorical_fields().len(),
    );

    for (name, value) in profile.numeric_fields() {
        features.insert(name.to_string(), value);
    }
    for (field, category) in profile.categorical_fields() {
        features.insert(one_hot_name(field, category), 1.0);
    }

    features
}

/// Aligns freshly encoded profiles with a model's feature vocabulary.
///
/// Output column order strictly follows the vocabulary, never generation
/// order; names the vocabulary lacks are dropped and names the profile did
/// not produce are zero-filled. Unknown categories therefore contribute
/// nothing rather than failing.
pub struct FeatureAligner {
    vocabulary: FeatureVocabulary,
}

impl FeatureAligner {
    /// Create an aligner for a model's vocabulary
    pub fn new(vocabulary: FeatureVocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this aligner projects onto
    pub fn vocabulary(&self) -> &FeatureVocabulary {
        &self.vocabulary
    }

    /// Align one profile into a vector of exactly `vocabulary.len()` entries
    pub fn align(&self, profile: &Profile) -> FeatureVector {
        let generated = encode(profile);

        let values: Vec<f64> = self
            .vocabulary
            .names()
            .iter()
            .map(|name| generated.get(name.as_str()).copied().unwrap_or(0.0))
            .collect();

        let dropped = generated
            .keys()
            .filter(|name| !self.vocabulary.contains(name))
            .count();
        if dropped > 0 {
            debug!(dropped, "generated features absent from model vocabulary");
        }

        FeatureVector { values }
    }
}
