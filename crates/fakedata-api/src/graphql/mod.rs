//! GraphQL API implementation
//!
//! This module exposes the user/album/photo graph and the `login` mutation
//! using async-graphql, and serves a GraphiQL playground.

pub mod mutation;
pub mod query;
pub mod source;
pub mod types;

use async_graphql::{
    extensions::Tracing, http::GraphiQLSource, Context, EmptySubscription, Error, Result,
    Schema,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use fakedata_store::DataSource;
use std::sync::Arc;

use crate::authentication::Authenticator;

pub use mutation::Mutation;
pub use query::Query;
pub use source::{Source, SourceMismatch};

/// GraphQL schema type
pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the GraphQL schema
pub fn build_schema(store: Arc<dyn DataSource>, authenticator: Arc<Authenticator>) -> AppSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .data(authenticator)
        .extension(Tracing)
        .finish()
}

/// GraphQL handler
pub async fn graphql_handler(
    State(schema): State<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL page posting queries to `endpoint`
pub fn playground_source(endpoint: &str) -> String {
    GraphiQLSource::build()
        .endpoint(endpoint)
        .title("Fake Data GraphQL Playground")
        .finish()
}

pub(crate) fn data_source<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn DataSource>> {
    ctx.data::<Arc<dyn DataSource>>()
}

/// Report `result`'s error on the response and resolve the field to null.
///
/// A resolver that returns `Err` drops the field from its parent object, so
/// nullable fields go through here instead.
pub(crate) fn nullable<T, E>(ctx: &Context<'_>, result: std::result::Result<T, E>) -> Option<T>
where
    E: Into<Error>,
{
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let err = err.into().into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(err));
            None
        }
    }
}

/// Nullable list with nullable items, as `[T]` in the schema
pub(crate) fn nullable_list<T, U: From<T>>(items: Vec<T>) -> Option<Vec<Option<U>>> {
    Some(items.into_iter().map(|item| Some(U::from(item))).collect())
}

/// Negative limits are rejected by the argument validator before this point.
pub(crate) fn limit_arg(limit: Option<i32>) -> Option<usize> {
    limit.and_then(|l| usize::try_from(l).ok())
}


#[cfg(test)]
mod tests {
    use super::test_support::SCHEMA;
    use super::*;

    #[test]
    fn test_schema_creation() {
        let sdl = SCHEMA.sdl();

        assert!(sdl.contains("type Query"));
        assert!(sdl.contains("type Mutation"));
        assert!(sdl.contains("type User"));
        assert!(sdl.contains("type Album"));
        assert!(sdl.contains("type Photo"));
        assert!(sdl.contains("type Authentication"));
    }

    #[test]
    fn test_limit_arg() {
        assert_eq!(limit_arg(None), None);
        assert_eq!(limit_arg(Some(0)), Some(0));
        assert_eq!(limit_arg(Some(7)), Some(7));
        assert_eq!(limit_arg(Some(-1)), None);
    }
}
