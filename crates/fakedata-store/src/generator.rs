//! Deterministic fake data generation
//!
//! Identifiers are computed rather than random: user `i` owns albums
//! `[i * albums_per_user, (i + 1) * albums_per_user)` and album `j` owns
//! photos `[j * photos_per_album, (j + 1) * photos_per_album)`. Tests rely on
//! this to predict exact relationship slices.

use fakedata_core::{Album, EntityId, Photo, User};
use std::ops::Range;
use tracing::info;

use crate::credentials::{hash_password, HashingConfig};
use crate::error::{StoreError, StoreResult};

/// Default number of users
pub const DEFAULT_USERS: usize = 10;

/// Default number of albums per user
pub const DEFAULT_ALBUMS_PER_USER: usize = 10;

/// Default number of photos per album
pub const DEFAULT_PHOTOS_PER_ALBUM: usize = 10;

/// Shape of the generated graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of users
    pub users: usize,

    /// Albums owned by each user
    pub albums_per_user: usize,

    /// Photos in each album
    pub photos_per_album: usize,

    /// Cost parameters for the generated password hashes
    pub hashing: HashingConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS,
            albums_per_user: DEFAULT_ALBUMS_PER_USER,
            photos_per_album: DEFAULT_PHOTOS_PER_ALBUM,
            hashing: HashingConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a config with the given counts and default hashing
    pub fn new(users: usize, albums_per_user: usize, photos_per_album: usize) -> Self {
        Self {
            users,
            albums_per_user,
            photos_per_album,
            ..Default::default()
        }
    }

    /// Set hashing parameters
    pub fn with_hashing(mut self, hashing: HashingConfig) -> Self {
        self.hashing = hashing;
        self
    }

    /// Total number of albums
    pub fn total_albums(&self) -> Option<usize> {
        self.users.checked_mul(self.albums_per_user)
    }

    /// Total number of photos
    pub fn total_photos(&self) -> Option<usize> {
        self.total_albums()?.checked_mul(self.photos_per_album)
    }

    /// Every generated identifier must fit in an `EntityId`
    pub fn validate(&self) -> StoreResult<()> {
        let max = EntityId::MAX as usize;

        let fits = self.users <= max
            && self.total_albums().is_some_and(|n| n <= max)
            && self.total_photos().is_some_and(|n| n <= max);

        if !fits {
            return Err(StoreError::InvalidConfig(format!(
                "{} users x {} albums x {} photos exceeds the identifier range",
                self.users, self.albums_per_user, self.photos_per_album
            )));
        }

        Ok(())
    }
}

/// A generated user/album/photo graph, each collection in ascending ID order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub albums: Vec<Album>,
    pub photos: Vec<Photo>,
}

/// Email address assigned to generated user `id`
pub fn user_email(id: EntityId) -> String {
    format!("user{}@example.com", id)
}

/// Plaintext password assigned to generated user `id`
pub fn user_password(id: EntityId) -> String {
    format!("password{}", id)
}

/// Generate the full graph described by `config`
pub fn generate(config: &GeneratorConfig) -> StoreResult<Dataset> {
    config.validate()?;

    let users = (0..config.users as EntityId)
        .map(|id| generate_user(id, &config.hashing))
        .collect::<StoreResult<Vec<_>>>()?;

    let albums: Vec<Album> = users
        .iter()
        .flat_map(|user| {
            owned_ids(user.id, config.albums_per_user)
                .map(move |id| Album::new(id, user.id, format!("Album {}", id)))
        })
        .collect();

    let photos: Vec<Photo> = albums
        .iter()
        .flat_map(|album| {
            owned_ids(album.id, config.photos_per_album)
                .map(move |id| Photo::new(id, album.id, format!("Photo {}", id)))
        })
        .collect();

    info!(
        users = users.len(),
        albums = albums.len(),
        photos = photos.len(),
        "Generated fake dataset"
    );

    Ok(Dataset {
        users,
        albums,
        photos,
    })
}

fn generate_user(id: EntityId, hashing: &HashingConfig) -> StoreResult<User> {
    let password_hash = hash_password(&user_password(id), hashing)?;

    Ok(User::new(id, format!("User {}", id), format!("User{}", id))
        .with_email(user_email(id))
        .with_password_hash(password_hash))
}

/// Identifiers of the children owned by `owner`
fn owned_ids(owner: EntityId, per_owner: usize) -> Range<EntityId> {
    // Bounded by GeneratorConfig::validate
    let per_owner = per_owner as EntityId;
    owner * per_owner..(owner + 1) * per_owner
}
