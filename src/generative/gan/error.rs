//! GAN record error types

use thiserror::Error;

/// Errors raised while building records or using framework handles
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GanError {
    #[error("{schema} expects {expected} fields, got {got}")]
    ArityMismatch { schema: &'static str, expected: usize, got: usize },

    #[error("{schema} has no field named `{field}`")]
    UnknownField { schema: &'static str, field: String },

    #[error("{schema} is missing field `{field}`")]
    MissingField { schema: &'static str, field: &'static str },

    #[error("{schema} field `{field}` given more than once")]
    DuplicateField { schema: &'static str, field: String },

    #[error("{schema} field `{field}` expects a {expected}, got a {got}")]
    FieldType {
        schema: &'static str,
        field: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("{schema}: `{left}` has {left_len} entries but `{right}` has {right_len}")]
    LengthMismatch {
        schema: &'static str,
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    #[error("Label {label} out of range for {num_classes} classes")]
    InvalidLabel { label: usize, num_classes: usize },

    #[error("Invalid scale: {0} (must be > 0.0)")]
    InvalidScale(f32),

    #[error("Op `{op}` failed: {reason}")]
    OpFailed { op: String, reason: String },
}

/// Result type for GAN record operations
pub type Result<T> = std::result::Result<T, GanError>;
