//! Dataset loading from a file or an HTTP(S) URL

use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::CelestialBody;

/// Where the JSON dataset lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Path(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Classify a configured source string
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::Url(source.to_string())
        } else {
            Self::Path(PathBuf::from(source))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Parse a JSON document into an ordered sequence of records
pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<CelestialBody>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Reads the dataset once per call; no retry and no caching
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    client: reqwest::Client,
}

impl DataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a single read of the source and parse it
    pub async fn load(&self, source: &DatasetSource) -> Result<Vec<CelestialBody>> {
        let bytes = match source {
            DatasetSource::Path(path) => tokio::fs::read(path).await?,
            DatasetSource::Url(url) => self.fetch(url).await?,
        };
        let bodies = parse_dataset(&bytes)?;
        tracing::info!("Loaded {} bodies from {}", bodies.len(), source);
        Ok(bodies)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching dataset from {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name": "Earth", "satellites": 1, "radius_km": 6371, "semi_major_axis_au": 1.0, "eccentricity": 0.0167, "density_g_cm3": 5.51},
        {"name": "Mars", "satellites": 2, "radius_km": 3390, "semi_major_axis_au": 1.524, "eccentricity": 0.0934, "density_g_cm3": 3.93}
    ]"#;

    #[test]
    fn test_source_classification() {
        assert_eq!(
            DatasetSource::parse("https://example.org/data.json"),
            DatasetSource::Url("https://example.org/data.json".to_string())
        );
        assert_eq!(
            DatasetSource::parse("solar_system_data.json"),
            DatasetSource::Path(PathBuf::from("solar_system_data.json"))
        );
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let bodies = parse_dataset(SAMPLE.as_bytes()).unwrap();
        let names: Vec<&str> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Earth", "Mars"]);
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert!(parse_dataset(b"[]").unwrap().is_empty());
        assert!(matches!(parse_dataset(b"{\"name\":"), Err(Error::Json(_))));
        assert!(matches!(parse_dataset(b"{}"), Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_integral_float_counts() {
        let bodies = parse_dataset(
            br#"[{"name": "Earth", "satellites": 1.0, "radius_km": 6371},
                 {"name": "Mars", "satellites": 2, "radius_km": 3390}]"#,
        )
        .unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].satellites, Some(1));
        assert_eq!(bodies[1].satellites, Some(2));
    }

    /// Serve `SAMPLE` at `/bodies.json` and a 404 at `/missing.json`
    async fn serve_dataset() -> String {
        use axum::{http::StatusCode, routing::get, Router};

        let app = Router::new()
            .route("/bodies.json", get(|| async { SAMPLE }))
            .route("/missing.json", get(|| async { StatusCode::NOT_FOUND }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn local_loader() -> DataLoader {
        DataLoader {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_load_from_url() {
        let base = serve_dataset().await;
        let bodies = local_loader()
            .load(&DatasetSource::parse(&format!("{}/bodies.json", base)))
            .await
            .unwrap();
        let names: Vec<&str> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Earth", "Mars"]);
    }

    #[tokio::test]
    async fn test_load_url_error_status() {
        let base = serve_dataset().await;
        let url = format!("{}/missing.json", base);
        let result = local_loader().load(&DatasetSource::parse(&url)).await;
        match result {
            Err(Error::HttpStatus { url: failed, status }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bodies.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let bodies = DataLoader::new()
            .load(&DatasetSource::Path(path))
            .await
            .unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[1].radius_km, Some(3390.0));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DataLoader::new()
            .load(&DatasetSource::Path(dir.path().join("absent.json")))
            .await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
