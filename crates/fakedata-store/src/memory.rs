//! In-memory DataSource implementation
//!
//! Entities live in `BTreeMap`s keyed by identifier so that every list
//! comes back in ascending ID order without an explicit sort. The store is
//! never mutated after construction and can be shared across threads.

use fakedata_core::{Album, EntityId, Photo, User};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

use crate::error::{StoreError, StoreResult};
use crate::generator::{generate, Dataset, GeneratorConfig};
use crate::repository::{DataSource, StoreCounts};

/// Immutable, ID-indexed user/album/photo graph
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: BTreeMap<EntityId, User>,
    albums: BTreeMap<EntityId, Album>,
    photos: BTreeMap<EntityId, Photo>,
    user_ids_by_email: HashMap<String, EntityId>,
}

impl InMemoryStore {
    /// Build a store from a dataset, enforcing referential integrity.
    ///
    /// Fails on duplicate identifiers, duplicate non-empty emails, albums
    /// pointing at missing users and photos pointing at missing albums.
    pub fn from_dataset(dataset: Dataset) -> StoreResult<Self> {
        let users = index_by_id(dataset.users, |u| u.id, "user")?;
        let albums = index_by_id(dataset.albums, |a| a.id, "album")?;
        let photos = index_by_id(dataset.photos, |p| p.id, "photo")?;

        let mut user_ids_by_email = HashMap::with_capacity(users.len());
        for user in users.values().filter(|u| !u.email.is_empty()) {
            if user_ids_by_email.insert(user.email.clone(), user.id).is_some() {
                return Err(StoreError::UniqueViolation(format!(
                    "email {} is used by more than one user",
                    user.email
                )));
            }
        }

        if let Some(album) = albums.values().find(|a| !users.contains_key(&a.user_id)) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "album {} references missing user {}",
                album.id, album.user_id
            )));
        }

        if let Some(photo) = photos.values().find(|p| !albums.contains_key(&p.album_id)) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "photo {} references missing album {}",
                photo.id, photo.album_id
            )));
        }

        debug!(
            users = users.len(),
            albums = albums.len(),
            photos = photos.len(),
            "In-memory store ready"
        );

        Ok(Self {
            users,
            albums,
            photos,
            user_ids_by_email,
        })
    }

    /// Generate a dataset and load it
    pub fn generate(config: &GeneratorConfig) -> StoreResult<Self> {
        Self::from_dataset(generate(config)?)
    }
}

fn index_by_id<T>(
    items: Vec<T>,
    id: impl Fn(&T) -> EntityId,
    kind: &str,
) -> StoreResult<BTreeMap<EntityId, T>> {
    let mut index = BTreeMap::new();
    for item in items {
        let key = id(&item);
        if index.insert(key, item).is_some() {
            return Err(StoreError::UniqueViolation(format!(
                "duplicate {} id {}",
                kind, key
            )));
        }
    }
    Ok(index)
}

impl DataSource for InMemoryStore {
    fn get_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    fn get_albums(&self) -> Vec<Album> {
        self.albums.values().cloned().collect()
    }

    fn get_photos(&self) -> Vec<Photo> {
        self.photos.values().cloned().collect()
    }

    fn get_user(&self, id: EntityId) -> User {
        trace!(id, "get_user");
        self.users.get(&id).cloned().unwrap_or_default()
    }

    fn get_album(&self, id: EntityId) -> Album {
        trace!(id, "get_album");
        self.albums.get(&id).cloned().unwrap_or_default()
    }

    fn get_photo(&self, id: EntityId) -> Photo {
        trace!(id, "get_photo");
        self.photos.get(&id).cloned().unwrap_or_default()
    }

    fn get_user_with_email(&self, email: &str) -> Option<User> {
        self.user_ids_by_email
            .get(email)
            .and_then(|id| self.users.get(id))
            .cloned()
    }

    fn get_albums_by_user_id(&self, user_id: EntityId) -> Vec<Album> {
        trace!(user_id, "get_albums_by_user_id");
        self.albums
            .values()
            .filter(|album| album.user_id == user_id)
            .cloned()
            .collect()
    }

    fn get_photos_by_album_id(&self, album_id: EntityId) -> Vec<Photo> {
        trace!(album_id, "get_photos_by_album_id");
        self.photos
            .values()
            .filter(|photo| photo.album_id == album_id)
            .cloned()
            .collect()
    }

    fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            albums: self.albums.len(),
            photos: self.photos.len(),
        }
    }
}
