//! Prediction Route

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use census_record::Profile;
use inference_engine::Bracket;

/// Response for the predict endpoint
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Predicted income bracket label
    pub bracket: Bracket,
    /// Positive-class (>50K) probability
    pub probability: f64,
    /// Number of model features the profile was aligned to
    pub model_features: usize,
    /// When the prediction was made
    pub timestamp: DateTime<Utc>,
}

/// Predict the income bracket for one profile.
///
/// One synchronous chain per request: validate, align, predict. The feature
/// vector lives only for the duration of the call.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<Profile>,
) -> Result<Json<PredictResponse>, ApiError> {
    let start = std::time::Instant::now();

    let validation = state.validator.validate_profile(&profile);
    if !validation.valid {
        return Err(ApiError::Validation(
            validation.errors.iter().map(ToString::to_string).collect(),
        ));
    }

    let features = state.aligner.align(&profile);
    let prediction = state
        .model
        .classify(&features)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    counter!("predictions_total", "bracket" => prediction.bracket.as_str()).increment(1);
    histogram!("predict_latency_seconds").record(start.elapsed().as_secs_f64());

    debug!(
        bracket = %prediction.bracket,
        probability = prediction.probability,
        "prediction served"
    );

    Ok(Json(PredictResponse {
        bracket: prediction.bracket,
        probability: prediction.probability,
        model_features: features.len(),
        timestamp: Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inference_engine::IncomeModel;

    fn test_state() -> Arc<AppState> {
        // z = 0.05*age + 0.01*hours + 0.2*male - 0.2*female - 3.0
        let model = IncomeModel::from_parts(
            vec![
                "age".to_string(),
                "hours_per_week".to_string(),
                "sex_Male".to_string(),
                "sex_Female".to_string(),
            ],
            vec![0.05, 0.01, 0.2, -0.2],
            -3.0,
            0.5,
        )
        .unwrap();
        Arc::new(AppState::new(model, "test://model"))
    }

    #[tokio::test]
    async fn test_predict_low_income_profile() {
        let state = test_state();
        let response = predict(State(state), Json(Profile::default())).await.unwrap();

        // Default profile: z = 1.75 + 0.4 + 0.2 - 3.0 < 0
        assert_eq!(response.0.bracket, Bracket::AtMost50K);
        assert!(response.0.probability < 0.5);
        assert_eq!(response.0.model_features, 4);
    }

    #[tokio::test]
    async fn test_predict_high_income_profile() {
        let state = test_state();
        let profile = Profile {
            age: 90,
            hours_per_week: 100,
            ..Profile::default()
        };
        let response = predict(State(state), Json(profile)).await.unwrap();

        // z = 4.5 + 1.0 + 0.2 - 3.0 > 0
        assert_eq!(response.0.bracket, Bracket::Over50K);
        assert!(response.0.probability > 0.5);
    }

    #[tokio::test]
    async fn test_response_serializes_display_labels() {
        let state = test_state();
        let response = predict(State(state), Json(Profile::default())).await.unwrap();

        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["bracket"], "<=50K");
        assert_eq!(json["model_features"], 4);
    }

    #[tokio::test]
    async fn test_predict_rejects_out_of_range_profile() {
        let state = test_state();
        let profile = Profile {
            age: 10,
            hours_per_week: 150,
            ..Profile::default()
        };

        let err = predict(State(state), Json(profile)).await.unwrap_err();
        match err {
            ApiError::Validation(details) => assert_eq!(details.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
