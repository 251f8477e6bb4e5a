//! GraphQL query resolvers
//!
//! This module implements all GraphQL query operations.

use async_graphql::{Context, Object};
use fakedata_core::{take_limit, EntityId};

use super::types::{GqlAlbum, GqlPhoto, GqlUser};
use super::{data_source, limit_arg, nullable, nullable_list};

/// Root Query type for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Get a user by ID
    async fn user(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the user")] id: EntityId,
    ) -> Option<GqlUser> {
        let store = nullable(ctx, data_source(ctx))?;
        Some(GqlUser::from(store.get_user(id)))
    }

    /// List all users
    async fn users(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "limit the number of users", validator(minimum = 0))] limit: Option<i32>,
    ) -> Option<Vec<Option<GqlUser>>> {
        let store = nullable(ctx, data_source(ctx))?;
        nullable_list(take_limit(store.get_users(), limit_arg(limit)))
    }

    /// Get an album by ID
    async fn album(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the album")] id: EntityId,
    ) -> Option<GqlAlbum> {
        let store = nullable(ctx, data_source(ctx))?;
        Some(GqlAlbum::from(store.get_album(id)))
    }

    /// List albums, optionally only those owned by one user
    async fn albums(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the owning user")] userid: Option<EntityId>,
        #[graphql(desc = "limit the number of albums", validator(minimum = 0))] limit: Option<i32>,
    ) -> Option<Vec<Option<GqlAlbum>>> {
        let store = nullable(ctx, data_source(ctx))?;

        let albums = match userid {
            Some(user_id) => store.get_albums_by_user_id(user_id),
            None => store.get_albums(),
        };

        nullable_list(take_limit(albums, limit_arg(limit)))
    }

    /// Get a photo by ID
    async fn photo(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the photo")] id: EntityId,
    ) -> Option<GqlPhoto> {
        let store = nullable(ctx, data_source(ctx))?;
        Some(GqlPhoto::from(store.get_photo(id)))
    }

    /// List photos, optionally only those in one album
    async fn photos(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "id of the containing album")] albumid: Option<EntityId>,
        #[graphql(desc = "limit the number of photos", validator(minimum = 0))] limit: Option<i32>,
    ) -> Option<Vec<Option<GqlPhoto>>> {
        let store = nullable(ctx, data_source(ctx))?;

        let photos = match albumid {
            Some(album_id) => store.get_photos_by_album_id(album_id),
            None => store.get_photos(),
        };

        nullable_list(take_limit(photos, limit_arg(limit)))
    }
}
