//! Form Schema Route
//!
//! Describes the input form to clients: every categorical field's options in
//! form order, numeric ranges, and default selections.

use axum::Json;
use census_record::{
    Education, MaritalStatus, NativeCountry, Occupation, Profile, Race, Relationship, Sex,
    Workclass,
};
use serde::Serialize;

/// Response for the schema endpoint
#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub numeric: Vec<NumericField>,
    pub categorical: Vec<CategoricalField>,
}

/// A numeric form field with its valid range
#[derive(Debug, Serialize)]
pub struct NumericField {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// A categorical form field with its closed option set
#[derive(Debug, Serialize)]
pub struct CategoricalField {
    pub name: &'static str,
    pub options: Vec<&'static str>,
    pub default: &'static str,
}

fn categorical<T: Copy>(
    name: &'static str,
    all: &[T],
    as_str: fn(&T) -> &'static str,
) -> CategoricalField {
    let options: Vec<&'static str> = all.iter().map(as_str).collect();
    CategoricalField {
        name,
        default: options[0],
        options,
    }
}

/// Get the form schema
pub async fn get_schema() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        numeric: vec![
            NumericField {
                name: "age",
                min: Profile::AGE_RANGE.0,
                max: Profile::AGE_RANGE.1,
                default: Profile::AGE_DEFAULT,
            },
            NumericField {
                name: "hours_per_week",
                min: Profile::HOURS_RANGE.0,
                max: Profile::HOURS_RANGE.1,
                default: Profile::HOURS_DEFAULT,
            },
        ],
        categorical: vec![
            categorical("workclass", &Workclass::ALL, Workclass::as_str),
            categorical("education", &Education::ALL, Education::as_str),
            categorical("marital_status", &MaritalStatus::ALL, MaritalStatus::as_str),
            categorical("occupation", &Occupation::ALL, Occupation::as_str),
            categorical("relationship", &Relationship::ALL, Relationship::as_str),
            categorical("race", &Race::ALL, Race::as_str),
            categorical("sex", &Sex::ALL, Sex::as_str),
            categorical("native_country", &NativeCountry::ALL, NativeCountry::as_str),
        ],
    })
}
