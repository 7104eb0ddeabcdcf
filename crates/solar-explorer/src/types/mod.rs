//! Core types for the explorer

pub mod body;
pub mod query;
pub mod response;
pub mod sort;

pub use body::CelestialBody;
pub use query::SortQuery;
pub use response::BodyListResponse;
pub use sort::{SortDirection, SortField, SortKey};
