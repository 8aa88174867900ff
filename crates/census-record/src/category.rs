//! Categorical Enumerations
//!
//! Each field the form offers is a closed enum. The string form of every
//! variant matches the training data's category spelling exactly, since
//! those spellings become one-hot feature names downstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string that is not a known category of the given field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {field} category: {value}")]
pub struct UnknownCategory {
    pub field: &'static str,
    pub value: String,
}

/// Employment class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workclass {
    Private,
    #[serde(rename = "Self-emp-not-inc")]
    SelfEmpNotInc,
    #[serde(rename = "Self-emp-inc")]
    SelfEmpInc,
    #[serde(rename = "Federal-gov")]
    FederalGov,
    #[serde(rename = "Local-gov")]
    LocalGov,
    #[serde(rename = "State-gov")]
    StateGov,
    #[serde(rename = "Without-pay")]
    WithoutPay,
    #[serde(rename = "Never-worked")]
    NeverWorked,
}

impl Workclass {
    /// All variants in form order
    pub const ALL: [Self; 8] = [
        Self::Private,
        Self::SelfEmpNotInc,
        Self::SelfEmpInc,
        Self::FederalGov,
        Self::LocalGov,
        Self::StateGov,
        Self::WithoutPay,
        Self::NeverWorked,
    ];

    /// Canonical category spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::SelfEmpNotInc => "Self-emp-not-inc",
            Self::SelfEmpInc => "Self-emp-inc",
            Self::FederalGov => "Federal-gov",
            Self::LocalGov => "Local-gov",
            Self::StateGov => "State-gov",
            Self::WithoutPay => "Without-pay",
            Self::NeverWorked => "Never-worked",
        }
    }
}

/// Highest education level attained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    Bachelors,
    #[serde(rename = "HS-grad")]
    HsGrad,
    #[serde(rename = "11th")]
    Eleventh,
    Masters,
    #[serde(rename = "9th")]
    Ninth,
    #[serde(rename = "Some-college")]
    SomeCollege,
    #[serde(rename = "Assoc-acdm")]
    AssocAcdm,
    #[serde(rename = "Assoc-voc")]
    AssocVoc,
    Doctorate,
    #[serde(rename = "5th-6th")]
    FifthSixth,
}

impl Education {
    /// All variants in form order
    pub const ALL: [Self; 10] = [
        Self::Bachelors,
        Self::HsGrad,
        Self::Eleventh,
        Self::Masters,
        Self::Ninth,
        Self::SomeCollege,
        Self::AssocAcdm,
        Self::AssocVoc,
        Self::Doctorate,
        Self::FifthSixth,
    ];

    /// Canonical category spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bachelors => "Bachelors",
            Self::HsGrad => "HS-grad",
            Self::Eleventh => "11th",
            Self::Masters => "Masters",
            Self::Ninth => "9th",
            Self::SomeCollege => "Some-college",
            Self::AssocAcdm => "Assoc-acdm",
            Self::AssocVoc => "Assoc-voc",
            Self::Doctorate => "Doctorate",
            Self::FifthSixth => "5th-6th",
        }
    }
}

/// Marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[serde(rename = "Never-married")]
    NeverMarried,
    #[serde(rename = "Married-civ-spouse")]
    MarriedCivSpouse,
    Divorced,
    Separated,
    Widowed,
    #[serde(rename = "Married-spouse-absent")]
    MarriedSpouseAbsent,
}

impl MaritalStatus {
    /// All variants in form order
    pub const ALL: [Self; 6] = [
        Self::NeverMarried,
        Self::MarriedCivSpouse,
        Self::Divorced,
        Self::Separated,
        Self::Widowed,
        Self::MarriedSpouseAbsent,
    ];

    /// Canonical category spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeverMarried => "Never-married",
            Self::MarriedCivSpouse => "Married-civ-spouse",
            Self::Divorced => "Divorced",
            Self::Separated => "Separated",
            Self::Widowed => "Widowed",
            Self::MarriedSpouseAbsent => "Married-spouse-absent",
        }
    }
}

/// Occupation group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupation {
    #[serde(rename = "Tech-support")]
    TechSupport,
    #[serde(rename = "Craft-repair")]
    CraftRepair,
    #[serde(rename = "Other-service")]
    OtherService,
    Sales,
    #[serde(rename = "Exec-managerial")]
    ExecManagerial,
    #[serde(rename = "Prof-specialty")]
    ProfSpecialty,
    #[serde(rename = "Handlers-cleaners")]
    HandlersCleaners,
    #[serde(rename = "Machine-op-inspct")]
    MachineOpInspct,
    #[serde(rename = "Adm-clerical")]
    AdmClerical,
    #[serde(rename = "Farming-fishing")]
    FarmingFishing,
    #[serde(rename = "Transport-moving")]
    TransportMoving,
}

impl Occupation {
    /// All variants in form order
    pub const ALL: [Self; 11] = [
        Self::TechSupport,
        Self::CraftRepair,
        Self::OtherService,
        Self::Sales,
        Self::ExecManagerial,
        Self::ProfSpecialty,
        Self::HandlersCleaners,
        Self::MachineOpInspct,
        Self::AdmClerical,
        Self::FarmingFishing,
        Self::TransportMoving,
    ];

    /// Canonical category spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TechSupport => "Tech-support",
            Self::CraftRepair => "Craft-repair",
            Self::OtherService => "Other-service",
            Self::Sales => "Sales",
            Self::ExecManagerial => "Exec-managerial",
            Self::ProfSpecialty => "Prof-specialty",
            Self::HandlersCleaners => "Handlers-cleaners",
            Self::MachineOpInspct => "Machine-op-inspct",
            Self::AdmClerical => "Adm-clerical",
            Self::FarmingFishing => "Farming-fishing",
            Self::TransportMoving => "Transport-moving",
        }
    }
}

/// Household relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    Wife,
    #[serde(rename = "Own-child")]
    OwnChild,
    Husband,
    #[serde(rename = "Not-in-family")]
    NotInFamily,
    #[serde(rename = "Other-relative")]
    OtherRelative,
    Unmarried,
}

impl Relationship {
    /// All variants in form order
    pub const ALL: [Self; 6] = [
        Self::Wife,
        Self::OwnChild,
        Self::Husband,
        Self::NotInFamily,
        Self::OtherRelative,
        Self::Unmarried,
    ];

    /// Canonical category spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wife => "Wife",
            Self::OwnChild => "Own-child",
            Self::Husband => "Husband",
            Self::NotInFamily => "Not-in-family",
            Self::OtherRelative => "Other-relative",
            Self::Unmarried => "Unmarried",
        }
    }
}

/// Race as recorded in the census data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    White,
    Black,
    #[serde(rename = "Asian-Pac-Islander")]
    AsianPacIslander,
    #[serde(rename = "Amer-Indian-Eskimo")]
    AmerIndianEskimo,
    Other,
}

impl Race {
    /// All variants in form order
    pub const ALL: [Self; 5] = [
        Self::White,
        Self::Black,
        Self::AsianPacIslander,
        Self::AmerIndianEskimo,
        Self::Other,
    ];

    /// Canonical category spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::AsianPacIslander => "Asian-Pac-Islander",
            Self::AmerIndianEskimo => "Amer-Indian-Eskimo",
            Self::Other => "Other",
        }
    }
}

/// Sex as recorded in the census data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// All variants in form order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Canonical category spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Country of origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeCountry {
    #[serde(rename = "United-States")]
    UnitedStates,
    Mexico,
    Philippines,
    Germany,
    Canada,
    India,
    England,
    China,
    Cuba,
}

impl NativeCountry {
    /// All variants in form order
    pub const ALL: [Self; 9] = [
        Self::UnitedStates,
        Self::Mexico,
        Self::Philippines,
        Self::Germany,
        Self::Canada,
        Self::India,
        Self::England,
        Self::China,
        Self::Cuba,
    ];

    /// Canonical category spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnitedStates => "United-States",
            Self::Mexico => "Mexico",
            Self::Philippines => "Philippines",
            Self::Germany => "Germany",
            Self::Canada => "Canada",
            Self::India => "India",
            Self::England => "England",
            Self::China => "China",
            Self::Cuba => "Cuba",
        }
    }
}

macro_rules! impl_str_traits {
    ($($ty:ty => $field:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownCategory;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::ALL
                        .iter()
                        .copied()
                        .find(|v| v.as_str() == s)
                        .ok_or_else(|| UnknownCategory {
                            field: $field,
                            value: s.to_string(),
                        })
                }
            }
        )*
    };
}

impl_str_traits! {
    Workclass => "workclass",
    Education => "education",
    MaritalStatus => "marital_status",
    Occupation => "occupation",
    Relationship => "relationship",
    Race => "race",
    Sex => "sex",
    NativeCountry => "native_country",
}
