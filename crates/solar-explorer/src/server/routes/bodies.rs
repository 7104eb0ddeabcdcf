//! Dataset endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{BodyListResponse, CelestialBody, SortQuery};

/// GET /solar_system_data.json - The working set as loaded
pub async fn dataset(State(state): State<AppState>) -> Result<Json<Vec<CelestialBody>>> {
    let bodies = state.bodies()?;
    Ok(Json(bodies.as_ref().clone()))
}

/// GET /api/bodies - List bodies in the requested order
pub async fn list_bodies(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<BodyListResponse>> {
    let (field, direction) = query.parse()?;
    let view = state.view(field, direction)?;
    let sort = view.active_field();
    let bodies = view.into_records();

    Ok(Json(BodyListResponse {
        total_count: bodies.len(),
        bodies,
        sort,
        direction,
    }))
}

/// GET /api/bodies/:name - Get a specific body
pub async fn get_body(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CelestialBody>> {
    Ok(Json(state.find_body(&name)?))
}
