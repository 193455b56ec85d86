use thiserror::Error;

/// Errors raised at the data boundary where shapes arrive as untyped values.
///
/// Geometry on already-typed shapes never fails: degenerate input yields the
/// mathematically correct empty answer instead.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unrecognized shape kind: {value}")]
    UnrecognizedShapeKind { value: String },
    #[error("invalid {kind} shape: {message}")]
    InvalidShape { kind: &'static str, message: String },
}

impl GeometryError {
    pub fn unrecognized(value: &serde_json::Value) -> Self {
        GeometryError::UnrecognizedShapeKind {
            value: value.to_string(),
        }
    }
}
