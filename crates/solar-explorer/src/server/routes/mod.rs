//! Routes for the explorer server

pub mod assets;
pub mod bodies;
pub mod page;

use axum::{extract::State, routing::get, Json, Router};

use crate::server::state::AppState;

/// Page, dataset and asset routes
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(page::index))
        .route("/solar_system_data.json", get(bodies::dataset))
        .route("/chart.svg", get(assets::chart_svg))
        .route("/sw.js", get(assets::service_worker))
}

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/bodies", get(bodies::list_bodies))
        .route("/bodies/:name", get(bodies::get_body))
        .route("/info", get(info))
}

/// API info endpoint
async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let dataset_size = state.bodies().map(|b| b.len()).ok();

    Json(serde_json::json!({
        "name": "solar-explorer",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Sortable table of solar-system bodies",
        "dataset": {
            "source": state.config().dataset.source,
            "bodies": dataset_size,
            "loaded_at": state.loaded_at(),
            "error": state.load_error(),
        },
        "endpoints": {
            "GET /": "Explorer page (?sort=<field>&dir=asc|desc)",
            "GET /solar_system_data.json": "Dataset in file order",
            "GET /chart.svg": "Radius bar chart",
            "GET /sw.js": "Offline-caching worker",
            "GET /api/bodies": "Sorted bodies (?sort=<field>&dir=asc|desc)",
            "GET /api/bodies/:name": "Get one body by name",
            "GET /health": "Liveness",
            "GET /ready": "Dataset loaded"
        }
    }))
}
