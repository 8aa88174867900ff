//! Validation Error Types

use thiserror::Error;

/// Errors during profile validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}
