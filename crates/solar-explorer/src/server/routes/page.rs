//! Page endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};

use crate::chart::generate_chart;
use crate::error::Result;
use crate::render::{Page, TableBody};
use crate::server::state::AppState;
use crate::types::SortQuery;

/// GET / - Render the explorer page
///
/// A dataset that failed to load still renders the page, with an error
/// banner over an empty table and status 503.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<(StatusCode, Html<String>)> {
    let (field, direction) = query.parse()?;
    let config = state.config();

    if let Some(message) = state.load_error() {
        let table = TableBody::default();
        let html = Page::new(&config.server.title, &table)
            .with_sort(field.unwrap_or_default(), direction)
            .with_error(message)
            .with_service_worker(config.server.service_worker)
            .render();
        return Ok((StatusCode::SERVICE_UNAVAILABLE, Html(html)));
    }

    let view = state.view(field, direction)?;
    let table = view.render();
    let chart = config
        .chart
        .enabled
        .then(|| generate_chart(view.records(), &config.chart))
        .transpose()?;

    let mut page = Page::new(&config.server.title, &table)
        .with_sort(view.field(), view.direction())
        .with_service_worker(config.server.service_worker);
    if let Some(svg) = chart.as_deref() {
        page = page.with_chart(svg);
    }

    tracing::debug!(
        "Rendered {} rows (sort: {:?}, dir: {})",
        table.len(),
        view.active_field(),
        view.direction()
    );

    Ok((StatusCode::OK, Html(page.render())))
}
