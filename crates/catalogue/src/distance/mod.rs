//! Pairwise stop distances and per-route aggregation.

pub mod route;
pub mod table;

pub use route::measure_route;
pub use table::{DistanceSource, DistanceTable};
