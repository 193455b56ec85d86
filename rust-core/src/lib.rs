//! 2D game geometry library
//!
//! Shape representations, point and point-pair algebra, a symmetric collision
//! matrix over eight shape kinds, exact intersection queries, and Delaunay /
//! Voronoi mesh construction. Everything is pure and floating point, governed by
//! one shared tolerance policy in [`config`].

pub mod config;
pub mod error;
pub mod geometries;
pub mod mesh;

pub use config::GeometryConfig;
pub use error::GeometryError;

/// Common result type used by the command-line front end
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
