//! GraphQL mutation resolvers

use async_graphql::{Context, Object};
use std::sync::Arc;

use super::nullable;
use super::types::GqlAuthentication;
use crate::authentication::Authenticator;

/// Root Mutation type for GraphQL
pub struct Mutation;

#[Object]
impl Mutation {
    /// Exchange an email and password for a signed token
    async fn login(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "email of the user")] email: String,
        #[graphql(desc = "password of the user", secret)] password: String,
    ) -> Option<GqlAuthentication> {
        let authenticator = nullable(ctx, ctx.data::<Arc<Authenticator>>())?;

        let authentication = nullable(ctx, authenticator.login(&email, &password))?;
        Some(GqlAuthentication::from(authentication))
    }
}

#[cfg(test)]
mod tests {
    use crate::graphql::test_support::{SCHEMA, STORE};
    use async_graphql::{Request, Variables};
    use serde_json::json;

    const LOGIN: &str = r#"
        mutation Login($email: String!, $password: String!) {
            login(email: $email, password: $password) {
                token
                user { id email }
            }
        }
    "#;

    fn login_request(email: &str, password: &str) -> Request {
        Request::new(LOGIN).variables(Variables::from_json(json!({
            "email": email,
            "password": password,
        })))
    }

    #[tokio::test]
    async fn test_login_returns_token_and_user() {
        let expected = STORE.get_user(5);
        let res = SCHEMA
            .execute(login_request("user5@example.com", "password5"))
            .await;

        assert!(res.errors.is_empty(), "unexpected errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();

        assert!(!data["login"]["token"].as_str().unwrap().is_empty());
        assert_eq!(data["login"]["user"]["id"], expected.id);
        assert_eq!(data["login"]["user"]["email"], expected.email.as_str());
    }

    #[tokio::test]
    async fn test_bad_credentials_share_one_error() {
        for (email, password) in [
            ("nobody@example.com", "password5"),
            ("user5@example.com", "wrong"),
        ] {
            let res = SCHEMA.execute(login_request(email, password)).await;

            assert_eq!(res.errors.len(), 1);
            assert_eq!(res.errors[0].message, "invalid email or password");
            assert_eq!(res.errors[0].path.len(), 1);
            assert_eq!(res.data.into_json().unwrap(), json!({ "login": null }));
        }
    }
}
