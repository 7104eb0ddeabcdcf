//! solar-explorer: sortable table of solar-system bodies
//!
//! Loads a JSON dataset of celestial bodies, renders it as an HTML table and
//! reorders it by a selected field and direction. A radius bar chart is
//! available as an explicitly activated extra, and the project's CSV sources
//! can be converted into the JSON dataset.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`loader`] | [`DataLoader`](loader::DataLoader): one read of a file or URL |
//! | [`view`] | [`ViewModel`]: working set, sort field and direction flag |
//! | [`render`] | [`TableBody`](render::TableBody) and the explorer [`Page`](render::Page) |
//! | [`chart`] | Radius bar chart as SVG |
//! | [`ingestion`] | CSV to JSON dataset conversion |
//! | [`server`] | axum routes and shared state |

pub mod chart;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod loader;
pub mod render;
pub mod server;
pub mod types;
pub mod view;

pub use config::ExplorerConfig;
pub use error::{Error, Result};
pub use types::{CelestialBody, SortDirection, SortField};
pub use view::ViewModel;
