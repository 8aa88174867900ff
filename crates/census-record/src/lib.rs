//! Demographic Record Types
//!
//! Provides the demographic profile consumed by the prediction pipeline and
//! the closed categorical enumerations offered by the input form.

mod category;
mod profile;

pub use category::{
    Education, MaritalStatus, NativeCountry, Occupation, Race, Relationship, Sex, UnknownCategory,
    Workclass,
};
pub use profile::Profile;
