//! Resolver sources
//!
//! Every GraphQL object wraps a [`Source`] and narrows it to the entity it
//! expects before projecting a field. A resolver handed the wrong entity
//! fails with [`SourceMismatch`] instead of producing a silent null.

use fakedata_core::{Album, Authentication, Photo, User};
use thiserror::Error;

/// Value a field resolver is evaluated against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    User(User),
    Album(Album),
    Photo(Photo),
    Authentication(Authentication),
}

impl Source {
    /// GraphQL type name of the wrapped entity
    pub fn type_name(&self) -> &'static str {
        match self {
            Source::User(_) => User::TYPE_NAME,
            Source::Album(_) => Album::TYPE_NAME,
            Source::Photo(_) => Photo::TYPE_NAME,
            Source::Authentication(_) => Authentication::TYPE_NAME,
        }
    }

    /// Narrow to `T`, failing when the source holds a different entity
    pub fn narrow<T: Narrow>(&self) -> Result<&T, SourceMismatch> {
        T::narrow(self).ok_or(SourceMismatch {
            expected: T::TYPE_NAME,
            actual: self.type_name(),
        })
    }
}

/// Resolver invoked against the wrong entity
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("source is not a {expected}")]
pub struct SourceMismatch {
    pub expected: &'static str,
    pub actual: &'static str,
}

/// Entities that can be extracted from a [`Source`]
pub trait Narrow: Sized {
    /// GraphQL type name
    const TYPE_NAME: &'static str;

    fn narrow(source: &Source) -> Option<&Self>;
}

macro_rules! impl_narrow {
    ($ty:ident) => {
        impl Narrow for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn narrow(source: &Source) -> Option<&Self> {
                match source {
                    Source::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Source {
            fn from(inner: $ty) -> Self {
                Source::$ty(inner)
            }
        }
    };
}

impl_narrow!(User);
impl_narrow!(Album);
impl_narrow!(Photo);
impl_narrow!(Authentication);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_matching_type() {
        let source = Source::from(Album::new(4, 0, "Album 4"));
        let album: &Album = source.narrow().unwrap();
        assert_eq!(album.id, 4);
    }

    #[test]
    fn test_narrow_mismatch() {
        let source = Source::from(User::default());
        let err = source.narrow::<Photo>().unwrap_err();

        assert_eq!(err.expected, "Photo");
        assert_eq!(err.actual, "User");
        assert_eq!(err.to_string(), "source is not a Photo");
    }
}
