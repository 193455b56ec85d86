// Constants and the shared numeric tolerance policy

use serde::{Deserialize, Serialize};

// Tolerances
pub const EPSILON: f64 = 1e-8; // Squared-distance threshold for point equality, sign and determinant tests
pub const HASH_PRECISION: usize = 6; // Decimal digits kept in shape hash keys

/// Tolerance settings threaded through every equality and sign decision.
///
/// The public convenience functions use [`GeometryConfig::default`], which mirrors
/// [`EPSILON`] and [`HASH_PRECISION`]. Pass an explicit config to probe boundary
/// behavior at other tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub epsilon: f64,
    pub hash_precision: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            hash_precision: HASH_PRECISION,
        }
    }
}

impl GeometryConfig {
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon,
            ..Self::default()
        }
    }

    /// `true` if `value` is within epsilon of zero
    #[inline]
    pub fn approx_zero(&self, value: f64) -> bool {
        value.abs() < self.epsilon
    }

    #[inline]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        self.approx_zero(a - b)
    }

    /// `a <= b` with epsilon slack (closed boundary)
    #[inline]
    pub fn le(&self, a: f64, b: f64) -> bool {
        a <= b + self.epsilon
    }

    /// `a < b` by more than epsilon (open boundary)
    #[inline]
    pub fn lt(&self, a: f64, b: f64) -> bool {
        a < b - self.epsilon
    }

    /// Sign of `value` with everything within epsilon of zero mapped to 0
    #[inline]
    pub fn sign(&self, value: f64) -> i8 {
        if self.approx_zero(value) {
            0
        } else if value > 0.0 {
            1
        } else {
            -1
        }
    }

    /// Format a coordinate for hash keys, normalizing negative zero
    pub fn hash_coordinate(&self, value: f64) -> String {
        let formatted = format!("{:.*}", self.hash_precision, value);
        if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
            formatted[1..].to_string()
        } else {
            formatted
        }
    }
}
