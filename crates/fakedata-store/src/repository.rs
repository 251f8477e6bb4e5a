//! Data access abstraction
//!
//! This module defines the DataSource trait consumed by the API layer,
//! allowing the generated in-memory store to be swapped for another backend.

use fakedata_core::{Album, EntityId, Photo, User};
use serde::{Deserialize, Serialize};

/// Number of entities held by a data source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub users: usize,
    pub albums: usize,
    pub photos: usize,
}

/// Read-only access to the user/album/photo graph.
///
/// Every lookup is total: unknown identifiers produce the entity's zero
/// value and empty filters produce an empty `Vec`. Lists are returned in
/// ascending identifier order.
pub trait DataSource: Send + Sync {
    /// All users
    fn get_users(&self) -> Vec<User>;

    /// All albums
    fn get_albums(&self) -> Vec<Album>;

    /// All photos
    fn get_photos(&self) -> Vec<Photo>;

    /// User by ID, or `User::default()`
    fn get_user(&self, id: EntityId) -> User;

    /// Album by ID, or `Album::default()`
    fn get_album(&self, id: EntityId) -> Album;

    /// Photo by ID, or `Photo::default()`
    fn get_photo(&self, id: EntityId) -> Photo;

    /// User by email address
    fn get_user_with_email(&self, email: &str) -> Option<User>;

    /// Albums owned by `user_id`
    fn get_albums_by_user_id(&self, user_id: EntityId) -> Vec<Album>;

    /// Photos stored in `album_id`
    fn get_photos_by_album_id(&self, album_id: EntityId) -> Vec<Photo>;

    /// Collection sizes
    fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.get_users().len(),
            albums: self.get_albums().len(),
            photos: self.get_photos().len(),
        }
    }
}
