//! GraphQL schema types
//!
//! Each object wraps a [`Source`] rather than a concrete entity; fields
//! narrow the source before reading from it. Identifier fields are non-null;
//! every other field resolves to null when narrowing fails.

use async_graphql::{Context, Object, Result};
use fakedata_core::{take_limit, Album, Authentication, EntityId, Photo, User};

use super::source::{Source, SourceMismatch};
use super::{data_source, limit_arg, nullable, nullable_list};

/// GraphQL representation of a User
#[derive(Clone)]
pub struct GqlUser(Source);

impl GqlUser {
    /// Wrap an arbitrary source; fields fail if it is not a user
    pub fn from_source(source: Source) -> Self {
        Self(source)
    }

    fn user(&self) -> Result<&User, SourceMismatch> {
        self.0.narrow()
    }
}

impl From<User> for GqlUser {
    fn from(user: User) -> Self {
        Self(Source::User(user))
    }
}

/// A user.
#[Object(name = "User")]
impl GqlUser {
    /// The id of the user.
    async fn id(&self) -> Result<EntityId> {
        Ok(self.user()?.id)
    }

    /// The name of the user.
    async fn name(&self, ctx: &Context<'_>) -> Option<&str> {
        nullable(ctx, self.user()).map(|user| user.name.as_str())
    }

    /// The username of the user.
    async fn username(&self, ctx: &Context<'_>) -> Option<&str> {
        nullable(ctx, self.user()).map(|user| user.username.as_str())
    }

    /// The email of the user.
    async fn email(&self, ctx: &Context<'_>) -> Option<&str> {
        nullable(ctx, self.user()).map(|user| user.email.as_str())
    }

    /// The user's albums.
    async fn albums(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "limit the number of albums", validator(minimum = 0))] limit: Option<
            i32,
        >,
    ) -> Option<Vec<Option<GqlAlbum>>> {
        let user = nullable(ctx, self.user())?;
        let store = nullable(ctx, data_source(ctx))?;

        nullable_list(take_limit(
            store.get_albums_by_user_id(user.id),
            limit_arg(limit),
        ))
    }
}

/// GraphQL representation of an Album
#[derive(Clone)]
pub struct GqlAlbum(Source);

impl GqlAlbum {
    /// Wrap an arbitrary source; fields fail if it is not an album
    pub fn from_source(source: Source) -> Self {
        Self(source)
    }

    fn album(&self) -> Result<&Album, SourceMismatch> {
        self.0.narrow()
    }
}

impl From<Album> for GqlAlbum {
    fn from(album: Album) -> Self {
        Self(Source::Album(album))
    }
}

/// An album.
#[Object(name = "Album")]
impl GqlAlbum {
    /// The id of the album.
    async fn id(&self) -> Result<EntityId> {
        Ok(self.album()?.id)
    }

    /// The id of the user.
    async fn userid(&self) -> Result<EntityId> {
        Ok(self.album()?.user_id)
    }

    /// The description of the album.
    async fn description(&self, ctx: &Context<'_>) -> Option<&str> {
        nullable(ctx, self.album()).map(|album| album.description.as_str())
    }

    /// The album's photos.
    async fn photos(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "limit the number of photos", validator(minimum = 0))] limit: Option<
            i32,
        >,
    ) -> Option<Vec<Option<GqlPhoto>>> {
        let album = nullable(ctx, self.album())?;
        let store = nullable(ctx, data_source(ctx))?;

        nullable_list(take_limit(
            store.get_photos_by_album_id(album.id),
            limit_arg(limit),
        ))
    }
}

/// GraphQL representation of a Photo
#[derive(Clone)]
pub struct GqlPhoto(Source);

impl GqlPhoto {
    /// Wrap an arbitrary source; fields fail if it is not a photo
    pub fn from_source(source: Source) -> Self {
        Self(source)
    }

    fn photo(&self) -> Result<&Photo, SourceMismatch> {
        self.0.narrow()
    }
}

impl From<Photo> for GqlPhoto {
    fn from(photo: Photo) -> Self {
        Self(Source::Photo(photo))
    }
}

/// A photo.
#[Object(name = "Photo")]
impl GqlPhoto {
    /// The id of the photo.
    async fn id(&self) -> Result<EntityId> {
        Ok(self.photo()?.id)
    }

    /// The id of the album.
    async fn albumid(&self) -> Result<EntityId> {
        Ok(self.photo()?.album_id)
    }

    /// The description of the photo.
    async fn description(&self, ctx: &Context<'_>) -> Option<&str> {
        nullable(ctx, self.photo()).map(|photo| photo.description.as_str())
    }
}

/// GraphQL representation of a login result
#[derive(Clone)]
pub struct GqlAuthentication(Source);

impl GqlAuthentication {
    /// Wrap an arbitrary source; fields fail if it is not a login result
    pub fn from_source(source: Source) -> Self {
        Self(source)
    }

    fn authentication(&self) -> Result<&Authentication, SourceMismatch> {
        self.0.narrow()
    }
}

impl From<Authentication> for GqlAuthentication {
    fn from(authentication: Authentication) -> Self {
        Self(Source::Authentication(authentication))
    }
}

/// Result of a successful login.
#[Object(name = "Authentication")]
impl GqlAuthentication {
    /// Authentication token
    async fn token(&self, ctx: &Context<'_>) -> Option<&str> {
        nullable(ctx, self.authentication()).map(|authentication| authentication.token.as_str())
    }

    /// The authenticated user
    async fn user(&self, ctx: &Context<'_>) -> Option<GqlUser> {
        nullable(ctx, self.authentication()).map(|auth| GqlUser::from(auth.user.clone()))
    }
}
