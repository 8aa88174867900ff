//! Feature Engineering Engine
//!
//! Turns a single demographic profile into the fixed-width numeric vector
//! the trained classifier expects: one-hot encode the categorical fields,
//! pass numeric fields through, then project everything onto the model's
//! training-time feature vocabulary.

mod aligner;
mod vocabulary;

pub use aligner::{encode, one_hot_name, FeatureAligner, FeatureVector};
pub use vocabulary::FeatureVocabulary;
