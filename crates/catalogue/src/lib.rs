//! # transport-catalogue
//!
//! In-memory catalogue of a public-transport network: named stops with
//! coordinates, named bus routes over those stops, and recorded distances
//! between stops.
//!
//! ## Features
//!
//! - **Route statistics**: real length, great-circle length and curvature,
//!   measured once when a bus is added
//! - **Directional distances**: recorded per ordered stop pair, with reverse
//!   and great-circle fallback
//! - **Stop index**: which buses serve a stop, in name order
//! - **Frozen catalogue**: a read-only, thread-shareable view once built
//!
//! ## Example
//!
//! ```
//! use transport_catalogue::prelude::*;
//!
//! let mut catalogue = TransportCatalogue::new();
//! catalogue.add_stop("Tolstopaltsevo", 55.611087, 37.20829)?;
//! catalogue.add_stop("Marushkino", 55.595884, 37.209755)?;
//! catalogue.add_stop_distance("Tolstopaltsevo", "Marushkino", 3900)?;
//! catalogue.add_bus("256", &["Tolstopaltsevo", "Marushkino"], true)?;
//!
//! let stats = catalogue.bus_statistics("256").unwrap();
//! assert_eq!(stats.stop_count, 2);
//! assert_eq!(stats.real_distance, 3900.0);
//! assert!(stats.curvature > 1.0);
//!
//! let frozen = catalogue.freeze();
//! assert!(frozen.buses_through_stop("Marushkino").unwrap().contains("256"));
//! # Ok::<(), CatalogueError>(())
//! ```

pub mod catalogue;
pub mod distance;
pub mod identifiers;
pub mod index;
pub mod models;
pub mod spatial;
pub mod store;

// Re-exports for convenience
pub mod prelude {
    pub use crate::catalogue::{FrozenCatalogue, TransportCatalogue};
    pub use crate::distance::DistanceSource;
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::spatial::great_circle_distance;
}

pub use prelude::*;
