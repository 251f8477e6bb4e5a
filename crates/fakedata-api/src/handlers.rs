//! HTTP request handlers
//!
//! GraphQL traffic goes through [`crate::graphql`]; this module serves the
//! plain JSON endpoints next to it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fakedata_store::{DataSource, StoreCounts};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::authentication::Authenticator;
use crate::graphql::{build_schema, AppSchema};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only data source
    pub store: Arc<dyn DataSource>,

    /// Executable GraphQL schema
    pub schema: AppSchema,
}

impl AppState {
    /// Create new application state and build the schema over `store`
    pub fn new(store: Arc<dyn DataSource>, authenticator: Arc<Authenticator>) -> Self {
        let schema = build_schema(store.clone(), authenticator);
        Self { store, schema }
    }
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy
    Healthy,
    /// Serving, but with no data
    Degraded,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub counts: StoreCounts,
}

impl IntoResponse for HealthResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Health check endpoint
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> HealthResponse {
    debug!("Health check requested");

    let counts = state.store.counts();
    let status = if counts.users == 0 {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        counts,
    }
}

/// Version information
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Semantic version
    pub version: String,

    /// Package name
    pub name: String,
}

/// Get API version information
#[instrument]
pub async fn version_info() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::test_support::{app_state, STORE};
    use fakedata_store::{GeneratorConfig, InMemoryStore};

    #[tokio::test]
    async fn test_health_reports_counts() {
        let response = health_check(State(app_state(STORE.clone()))).await;

        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(
            response.counts,
            StoreCounts {
                users: 10,
                albums: 100,
                photos: 1000,
            }
        );
    }

    #[tokio::test]
    async fn test_health_degraded_without_users() {
        let empty = InMemoryStore::generate(&GeneratorConfig::new(0, 10, 10)).unwrap();
        let response = health_check(State(app_state(Arc::new(empty)))).await;

        assert_eq!(response.status, HealthStatus::Degraded);
        assert_eq!(response.counts, StoreCounts::default());
    }

    #[tokio::test]
    async fn test_health_response_json() {
        let response = health_check(State(app_state(STORE.clone()))).await;

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["counts"]["albums"], 100);

        let parsed: HealthResponse = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.status, HealthStatus::Healthy);
        assert_eq!(parsed.counts, response.counts);
    }

    #[tokio::test]
    async fn test_version_info() {
        let Json(info) = version_info().await;

        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.name, "fakedata-api");
    }
}
