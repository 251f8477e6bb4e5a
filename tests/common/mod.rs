//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests including
//! server setup and GraphQL request helpers.

#![allow(dead_code)]

use fakedata_api::{
    build_api_server_with_config, AppState, Authenticator, JwtConfig, JwtManager,
    MiddlewareConfig, RouteConfig,
};
use fakedata_store::{DataSource, GeneratorConfig, InMemoryStore};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

pub const TEST_SECRET: &str = "test-secret-key-for-integration-tests";

/// Default-sized dataset, generated once per test binary
static STORE: Lazy<Arc<dyn DataSource>> = Lazy::new(|| {
    Arc::new(
        InMemoryStore::generate(&GeneratorConfig::default()).expect("Failed to generate dataset"),
    )
});

/// Test application state
pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn DataSource>,
    pub jwt_manager: Arc<JwtManager>,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_routes(RouteConfig::default()).await
    }

    /// Create a test application with custom routes
    pub async fn with_routes(routes: RouteConfig) -> Self {
        let store = STORE.clone();

        let jwt_config = JwtConfig::new(TEST_SECRET)
            .with_issuer("test")
            .with_audience("test")
            .with_expiration(3600);
        let jwt_manager =
            Arc::new(JwtManager::new(jwt_config).expect("Failed to create JWT manager"));

        let authenticator = Arc::new(Authenticator::new(store.clone(), jwt_manager.clone()));
        let app = build_api_server_with_config(
            AppState::new(store.clone(), authenticator),
            &routes,
            MiddlewareConfig::default(),
        );

        // Start server on random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = listener.local_addr().expect("Failed to get local address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to start test server");
        });

        Self {
            address: format!("http://{}", address),
            store,
            jwt_manager,
        }
    }

    /// Get base URL
    pub fn url(&self) -> &str {
        &self.address
    }

    /// Create HTTP client
    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .expect("Failed to build client")
    }

    /// POST a GraphQL request and return the decoded response body
    pub async fn graphql(&self, query: &str, variables: Value) -> Value {
        let response = self
            .client()
            .post(format!("{}/graphql", self.url()))
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .expect("Failed to send request");

        assert_success(&response);
        parse_json(response).await
    }

    /// POST a GraphQL request that must succeed and return its `data`
    pub async fn query(&self, query: &str) -> Value {
        let mut body = self.graphql(query, json!({})).await;
        assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
        body["data"].take()
    }
}

/// Ids of a list of GraphQL objects
pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("Expected a list")
        .iter()
        .map(|item| item["id"].as_i64().expect("Expected an integer id"))
        .collect()
}

/// Error messages of a GraphQL response
pub fn error_messages(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["message"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Parse JSON response
pub async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> T {
    response
        .json::<T>()
        .await
        .expect("Failed to parse JSON response")
}

/// Assert response status
pub fn assert_status(response: &reqwest::Response, expected: reqwest::StatusCode) {
    assert_eq!(
        response.status(),
        expected,
        "Expected status {}, got {}",
        expected,
        response.status()
    );
}

/// Assert response is successful (2xx)
pub fn assert_success(response: &reqwest::Response) {
    assert!(
        response.status().is_success(),
        "Expected success status, got {}",
        response.status()
    );
}
