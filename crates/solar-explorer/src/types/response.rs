//! API response types

use serde::{Deserialize, Serialize};

use super::body::CelestialBody;
use super::sort::{SortDirection, SortField};

/// Response for the body list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyListResponse {
    /// Records in display order
    pub bodies: Vec<CelestialBody>,
    /// Number of records
    pub total_count: usize,
    /// Field the records are ordered by, `None` for file order
    pub sort: Option<SortField>,
    /// Direction flag
    pub direction: SortDirection,
}
