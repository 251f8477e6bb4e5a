//! Fake Data API Layer
//!
//! This crate serves the generated user/album/photo graph over GraphQL using
//! async-graphql on top of Axum.
//!
//! # Architecture
//!
//! The API layer is organized into:
//!
//! - **GraphQL**: Schema, query and mutation resolvers, source narrowing
//! - **Authentication**: Credential checks and JWT issuance for `login`
//! - **Handlers**: Health and version endpoints
//! - **Routes**: Route definitions and router configuration
//! - **Middleware**: Tower middleware for tracing, CORS, compression and request IDs
//!
//! # Example
//!
//! ```rust,no_run
//! use fakedata_api::{build_api_server, AppState, Authenticator, JwtConfig, JwtManager};
//! use fakedata_store::{DataSource, GeneratorConfig, InMemoryStore};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store: Arc<dyn DataSource> =
//!     Arc::new(InMemoryStore::generate(&GeneratorConfig::default())?);
//! let jwt = Arc::new(JwtManager::new(JwtConfig::new("secret"))?);
//! let authenticator = Arc::new(Authenticator::new(store.clone(), jwt));
//!
//! let app = build_api_server(AppState::new(store, authenticator));
//! # Ok(())
//! # }
//! ```

pub mod authentication;
pub mod graphql;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod routes;

// Re-export main types for convenience
pub use authentication::{AuthError, Authenticator};
pub use graphql::{
    build_schema, graphql_handler, playground_source, AppSchema, Mutation as GraphQLMutation,
    Query as GraphQLQuery, Source, SourceMismatch,
};
pub use handlers::{AppState, HealthResponse, HealthStatus, VersionInfo};
pub use jwt::{Claims, JwtConfig, JwtConfigError, JwtManager, TokenError};
pub use middleware::{CorsConfig, MiddlewareConfig, UuidRequestIdGenerator};
pub use routes::{build_router, RouteConfig};

use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
};

/// Build a complete API server with default routes and middleware
pub fn build_api_server(state: AppState) -> Router {
    build_api_server_with_config(state, &RouteConfig::default(), MiddlewareConfig::default())
}

/// Build API server with custom route and middleware configuration
///
/// # Example
///
/// ```rust,no_run
/// use fakedata_api::{build_api_server_with_config, AppState, MiddlewareConfig, RouteConfig};
///
/// # fn example(state: AppState) {
/// let routes = RouteConfig::new().with_playground(false);
/// let middleware = MiddlewareConfig::new().with_compression(false);
///
/// let app = build_api_server_with_config(state, &routes, middleware);
/// # }
/// ```
pub fn build_api_server_with_config(
    state: AppState,
    route_config: &RouteConfig,
    middleware_config: MiddlewareConfig,
) -> Router {
    let mut router = build_router(state, route_config);

    router = router.layer(middleware_config.cors.into_layer());

    if middleware_config.enable_compression {
        router = router.layer(CompressionLayer::new());
    }

    if middleware_config.enable_tracing {
        router = router.layer(middleware::trace_layer());
    }

    // Set must wrap Propagate so generated ids reach the response
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(
            UuidRequestIdGenerator::default(),
        ))
}
