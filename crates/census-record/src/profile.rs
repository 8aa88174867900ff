//! Demographic Profile

use crate::category::{
    Education, MaritalStatus, NativeCountry, Occupation, Race, Relationship, Sex, Workclass,
};
use serde::{Deserialize, Serialize};

/// One demographic observation, as collected by the input form.
///
/// All fields are always populated; the form supplies defaults, so there is
/// no missing-value handling anywhere downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years
    pub age: u32,
    /// Employment class
    pub workclass: Workclass,
    /// Highest education level
    pub education: Education,
    /// Marital status
    pub marital_status: MaritalStatus,
    /// Occupation group
    pub occupation: Occupation,
    /// Household relationship
    pub relationship: Relationship,
    /// Race
    pub race: Race,
    /// Sex
    pub sex: Sex,
    /// Working hours per week
    pub hours_per_week: u32,
    /// Country of origin
    pub native_country: NativeCountry,
}

impl Profile {
    /// Valid age range offered by the form
    pub const AGE_RANGE: (u32, u32) = (18, 90);
    /// Valid hours-per-week range offered by the form
    pub const HOURS_RANGE: (u32, u32) = (1, 100);
    /// Form default for age
    pub const AGE_DEFAULT: u32 = 35;
    /// Form default for hours per week
    pub const HOURS_DEFAULT: u32 = 40;

    /// Numeric fields as (name, value) pairs, in form order
    pub fn numeric_fields(&self) -> [(&'static str, f64); 2] {
        [
            ("age", f64::from(self.age)),
            ("hours_per_week", f64::from(self.hours_per_week)),
        ]
    }

    /// Categorical fields as (name, category) pairs, in form order
    pub fn categorical_fields(&self) -> [(&'static str, &'static str); 8] {
        [
            ("workclass", self.workclass.as_str()),
            ("education", self.education.as_str()),
            ("marital_status", self.marital_status.as_str()),
            ("occupation", self.occupation.as_str()),
            ("relationship", self.relationship.as_str()),
            ("race", self.race.as_str()),
            ("sex", self.sex.as_str()),
            ("native_country", self.native_country.as_str()),
        ]
    }
}

impl Default for Profile {
    /// The form's default selections: sliders at 35 / 40, every select on
    /// its first option.
    fn default() -> Self {
        Self {
            age: Self::AGE_DEFAULT,
            workclass: Workclass::Private,
            education: Education::Bachelors,
            marital_status: MaritalStatus::NeverMarried,
            occupation: Occupation::TechSupport,
            relationship: Relationship::Wife,
            race: Race::White,
            sex: Sex::Male,
            hours_per_week: Self::HOURS_DEFAULT,
            native_country: NativeCountry::UnitedStates,
        }
    }
}
