//! API route definitions
//!
//! This module defines all API routes and builds the router.

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::{
    graphql::{graphql_handler, playground_source},
    handlers::{health_check, version_info, AppState},
};

/// Route configuration
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Path serving GraphQL requests
    pub graphql_path: String,

    /// Serve GraphiQL on `GET` of the GraphQL path
    pub enable_playground: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            graphql_path: "/graphql".to_string(),
            enable_playground: true,
        }
    }
}

impl RouteConfig {
    /// Create a new route config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GraphQL path
    pub fn with_graphql_path(mut self, path: impl Into<String>) -> Self {
        self.graphql_path = path.into();
        self
    }

    /// Enable/disable the playground
    pub fn with_playground(mut self, enable: bool) -> Self {
        self.enable_playground = enable;
        self
    }
}

/// Build the API router with all routes
pub fn build_router(state: AppState, config: &RouteConfig) -> Router {
    // Build public routes
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version_info))
        .with_state(state.clone());

    // Build GraphQL route
    let mut graphql = post(graphql_handler);
    if config.enable_playground {
        debug!(path = %config.graphql_path, "GraphQL playground enabled");
        let page = playground_source(&config.graphql_path);
        graphql = graphql.get(move || {
            let page = page.clone();
            async move { Html(page) }
        });
    }
    let graphql_route = Router::new()
        .route(&config.graphql_path, graphql)
        .with_state(state.schema);

    Router::new().merge(public_routes).merge(graphql_route)
}
