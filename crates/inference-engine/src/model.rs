//! Income Model Implementation

use crate::ModelError;
use feature_engine::{FeatureVector, FeatureVocabulary};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// Income bracket predicted by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bracket {
    /// Annual income above 50K
    #[serde(rename = ">50K")]
    Over50K,
    /// Annual income at or below 50K
    #[serde(rename = "<=50K")]
    AtMost50K,
}

impl Bracket {
    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Bracket::Over50K => ">50K",
            Bracket::AtMost50K => "<=50K",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prediction result from the model
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Predicted income bracket
    pub bracket: Bracket,
    /// Positive-class (>50K) probability
    pub probability: f64,
}

/// On-disk artifact layout
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    /// Training-time feature vocabulary, in model column order
    feature_names_in: Vec<String>,
    /// One weight per feature name
    coefficients: Vec<f64>,
    /// Bias term
    intercept: f64,
    /// Decision threshold on the positive-class probability
    #[serde(default = "default_threshold")]
    threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// Pre-trained binary income classifier.
///
/// Loaded once at startup and immutable afterwards; sharing it across
/// requests needs no lock.
#[derive(Debug)]
pub struct IncomeModel {
    vocabulary: FeatureVocabulary,
    coefficients: Array1<f64>,
    intercept: f64,
    threshold: f64,
}

impl IncomeModel {
    /// Load and validate a model artifact.
    ///
    /// Any failure here is fatal to startup: the process cannot serve
    /// predictions without a model.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;

        let model = Self::from_parts(
            artifact.feature_names_in,
            artifact.coefficients,
            artifact.intercept,
            artifact.threshold,
        )?;
        info!(
            path = %path.display(),
            features = model.feature_count(),
            "loaded income model artifact"
        );
        Ok(model)
    }

    /// Build a model from already-parsed parts, validating them
    pub fn from_parts(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
        threshold: f64,
    ) -> Result<Self, ModelError> {
        if feature_names.is_empty() {
            return Err(ModelError::InvalidArtifact(
                "feature_names_in is empty".to_string(),
            ));
        }
        if coefficients.len() != feature_names.len() {
            return Err(ModelError::InvalidArtifact(format!(
                "{} coefficients for {} feature names",
                coefficients.len(),
                feature_names.len()
            )));
        }
        if coefficients.iter().any(|c| !c.is_finite()) || !intercept.is_finite() {
            return Err(ModelError::InvalidArtifact(
                "non-finite model weight".to_string(),
            ));
        }
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ModelError::InvalidArtifact(format!(
                "threshold {threshold} outside (0, 1)"
            )));
        }

        Ok(Self {
            vocabulary: FeatureVocabulary::from_names(feature_names),
            coefficients: Array1::from(coefficients),
            intercept,
            threshold,
        })
    }

    /// The training-time feature vocabulary
    pub fn vocabulary(&self) -> &FeatureVocabulary {
        &self.vocabulary
    }

    /// Number of features the model expects
    pub fn feature_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Decision threshold on the positive-class probability
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Positive-class (>50K) probability for an aligned feature vector
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.len() != self.vocabulary.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.vocabulary.len(),
                actual: features.len(),
            });
        }

        let x = ArrayView1::from(features.as_slice());
        let z = self.coefficients.dot(&x) + self.intercept;
        Ok(sigmoid(z))
    }

    /// Predict the income bracket for an aligned feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<Bracket, ModelError> {
        self.classify(features).map(|p| p.bracket)
    }

    /// Predict bracket and probability together
    pub fn classify(&self, features: &FeatureVector) -> Result<Prediction, ModelError> {
        let probability = self.predict_proba(features)?;
        let bracket = if probability >= self.threshold {
            Bracket::Over50K
        } else {
            Bracket::AtMost50K
        };
        Ok(Prediction {
            bracket,
            probability,
        })
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_feature_model() -> IncomeModel {
        // z = age - 50: decision boundary exactly at age 50
        IncomeModel::from_parts(vec!["age".to_string()], vec![1.0], -50.0, 0.5).unwrap()
    }

    #[test]
    fn test_predict_at_decision_boundary() {
        let model = single_feature_model();

        let at_boundary = FeatureVector::from_values(vec![50.0]);
        assert_eq!(model.predict(&at_boundary).unwrap(), Bracket::Over50K);

        let below = FeatureVector::from_values(vec![49.0]);
        assert_eq!(model.predict(&below).unwrap(), Bracket::AtMost50K);

        let above = FeatureVector::from_values(vec![60.0]);
        assert_eq!(model.predict(&above).unwrap(), Bracket::Over50K);
    }

    #[test]
    fn test_predict_proba_is_sigmoid_of_score() {
        let model = single_feature_model();

        let p = model
            .predict_proba(&FeatureVector::from_values(vec![50.0]))
            .unwrap();
        assert!((p - 0.5).abs() < 1e-12);

        let p = model
            .predict_proba(&FeatureVector::from_values(vec![90.0]))
            .unwrap();
        assert!(p > 0.99);
    }

    #[test]
    fn test_shape_mismatch() {
        let model = single_feature_model();
        let err = model
            .predict(&FeatureVector::from_values(vec![1.0, 2.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_rejects_coefficient_count_mismatch() {
        let result = IncomeModel::from_parts(
            vec!["age".to_string(), "hours_per_week".to_string()],
            vec![1.0],
            0.0,
            0.5,
        );
        assert!(matches!(result, Err(ModelError::InvalidArtifact(_))));
    }

    #[test]
    fn test_rejects_non_finite_weights() {
        let result =
            IncomeModel::from_parts(vec!["age".to_string()], vec![f64::NAN], 0.0, 0.5);
        assert!(matches!(result, Err(ModelError::InvalidArtifact(_))));

        let result =
            IncomeModel::from_parts(vec!["age".to_string()], vec![1.0], f64::INFINITY, 0.5);
        assert!(matches!(result, Err(ModelError::InvalidArtifact(_))));
    }

    #[test]
    fn test_rejects_empty_vocabulary_and_bad_threshold() {
        assert!(IncomeModel::from_parts(Vec::new(), Vec::new(), 0.0, 0.5).is_err());
        assert!(
            IncomeModel::from_parts(vec!["age".to_string()], vec![1.0], 0.0, 1.5).is_err()
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = IncomeModel::from_path("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn test_from_path_roundtrip() {
        let path = std::env::temp_dir().join("income_model_roundtrip.json");
        let artifact = serde_json::json!({
            "feature_names_in": ["age", "hours_per_week"],
            "coefficients": [0.05, 0.02],
            "intercept": -3.0
        });
        fs::write(&path, artifact.to_string()).unwrap();

        let model = IncomeModel::from_path(&path).unwrap();
        assert_eq!(model.feature_count(), 2);
        // Threshold falls back to 0.5 when absent from the artifact.
        assert!((model.threshold() - 0.5).abs() < f64::EPSILON);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bracket_labels() {
        assert_eq!(Bracket::Over50K.as_str(), ">50K");
        assert_eq!(Bracket::AtMost50K.as_str(), "<=50K");
        assert_eq!(
            serde_json::to_string(&Bracket::Over50K).unwrap(),
            "\">50K\""
        );
    }
}
