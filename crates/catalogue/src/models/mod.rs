//! Catalogue data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::CatalogueReader;
pub use types::{Bus, BusStatistics, CatalogueError, Coordinates, Result, RouteDistances, RouteKind, Stop};
