//! Chart and worker script endpoints

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};

use crate::chart::generate_chart;
use crate::error::Result;
use crate::render::SERVICE_WORKER_JS;
use crate::server::state::AppState;
use crate::types::SortQuery;

/// GET /chart.svg - Radius bar chart, optionally sorted
pub async fn chart_svg(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<impl IntoResponse> {
    let (field, direction) = query.parse()?;
    let view = state.view(field, direction)?;
    let svg = generate_chart(view.records(), &state.config().chart)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

/// GET /sw.js - Offline-caching worker
pub async fn service_worker() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        SERVICE_WORKER_JS,
    )
}
