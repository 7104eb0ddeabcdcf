//! Application state for the explorer server

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::ExplorerConfig;
use crate::error::{Error, Result};
use crate::loader::DataLoader;
use crate::types::{CelestialBody, SortDirection, SortField};
use crate::view::ViewModel;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: ExplorerConfig,
    /// Outcome of the startup load
    dataset: Dataset,
}

/// Working set as loaded, or why it is missing
enum Dataset {
    Loaded {
        bodies: Arc<Vec<CelestialBody>>,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

impl AppState {
    /// Load the configured dataset once and build the state
    ///
    /// A failed load is kept as state rather than returned: the page then
    /// reports it and `/ready` answers 503.
    pub async fn new(config: ExplorerConfig) -> Self {
        let source = config.dataset_source();
        tracing::info!("Loading dataset from {}", source);

        match DataLoader::new().load(&source).await {
            Ok(bodies) => Self::with_bodies(config, bodies),
            Err(e) => {
                tracing::error!("Failed to load dataset from {}: {}", source, e);
                Self::with_load_error(config, e.to_string())
            }
        }
    }

    /// State over an already loaded working set
    pub fn with_bodies(config: ExplorerConfig, bodies: Vec<CelestialBody>) -> Self {
        Self::build(
            config,
            Dataset::Loaded {
                bodies: Arc::new(bodies),
                loaded_at: Utc::now(),
            },
        )
    }

    /// State for a dataset that failed to load
    pub fn with_load_error(config: ExplorerConfig, message: impl Into<String>) -> Self {
        Self::build(
            config,
            Dataset::Failed {
                message: message.into(),
            },
        )
    }

    fn build(config: ExplorerConfig, dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, dataset }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &ExplorerConfig {
        &self.inner.config
    }

    /// Working set in file order
    pub fn bodies(&self) -> Result<Arc<Vec<CelestialBody>>> {
        match &self.inner.dataset {
            Dataset::Loaded { bodies, .. } => Ok(Arc::clone(bodies)),
            Dataset::Failed { message } => Err(Error::DatasetUnavailable(message.clone())),
        }
    }

    /// Load failure message, if any
    pub fn load_error(&self) -> Option<&str> {
        match &self.inner.dataset {
            Dataset::Loaded { .. } => None,
            Dataset::Failed { message } => Some(message.as_str()),
        }
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        match &self.inner.dataset {
            Dataset::Loaded { loaded_at, .. } => Some(*loaded_at),
            Dataset::Failed { .. } => None,
        }
    }

    /// Fresh view model over a copy of the working set, sorted as requested
    pub fn view(&self, field: Option<SortField>, direction: SortDirection) -> Result<ViewModel> {
        let bodies = self.bodies()?;
        let mut view = ViewModel::new(bodies.as_ref().clone());
        view.apply(field, direction);
        Ok(view)
    }

    /// Find a body by exact name
    pub fn find_body(&self, name: &str) -> Result<CelestialBody> {
        self.bodies()?
            .iter()
            .find(|body| body.name == name)
            .cloned()
            .ok_or_else(|| Error::BodyNotFound(name.to_string()))
    }

    /// Ready once the dataset has loaded
    pub fn is_ready(&self) -> bool {
        matches!(self.inner.dataset, Dataset::Loaded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::with_bodies(
            ExplorerConfig::default(),
            vec![
                CelestialBody::new("Earth").with_radius(6371.0),
                CelestialBody::new("Mars").with_radius(3390.0),
            ],
        )
    }

    #[test]
    fn test_view_sorts_a_copy() {
        let state = state();
        let view = state
            .view(Some(SortField::RadiusKm), SortDirection::Ascending)
            .unwrap();
        assert_eq!(view.records()[0].name, "Mars");
        assert_eq!(state.bodies().unwrap()[0].name, "Earth");
    }

    #[test]
    fn test_find_body() {
        let state = state();
        assert_eq!(state.find_body("Mars").unwrap().radius_km, Some(3390.0));
        assert!(matches!(state.find_body("mars"), Err(Error::BodyNotFound(_))));
    }

    #[test]
    fn test_readiness_follows_dataset() {
        assert!(state().is_ready());
        assert!(state().loaded_at().is_some());
        assert!(!AppState::with_load_error(ExplorerConfig::default(), "boom").is_ready());
    }

    #[test]
    fn test_failed_load() {
        let state = AppState::with_load_error(ExplorerConfig::default(), "connection refused");
        assert!(!state.is_ready());
        assert_eq!(state.load_error(), Some("connection refused"));
        assert!(state.loaded_at().is_none());
        assert!(matches!(
            state.view(None, SortDirection::default()),
            Err(Error::DatasetUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_new_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ExplorerConfig::default();
        config.dataset.source = dir.path().join("absent.json").display().to_string();

        let state = AppState::new(config).await;
        assert!(!state.is_ready());
        assert!(state.load_error().is_some());
    }

    #[tokio::test]
    async fn test_new_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bodies.json");
        std::fs::write(&path, r#"[{"name": "Venus", "satellites": 0}]"#).unwrap();
        let mut config = ExplorerConfig::default();
        config.dataset.source = path.display().to_string();

        let state = AppState::new(config).await;
        assert!(state.is_ready());
        assert_eq!(state.bodies().unwrap().len(), 1);
    }
}
