// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    // Fails with `Error::AlreadyExists` if either the id or
    // the external place id is already taken.
    fn create_location(&self, location: &Location) -> Result<()>;
    fn update_location(&self, location: &Location) -> Result<()>;

    fn get_location(&self, id: &str) -> Result<Location>;
    fn try_get_location_by_place_id(&self, place_id: &str) -> Result<Option<Location>>;

    // Ordered by creation
    fn all_locations(&self) -> Result<Vec<Location>>;
    fn count_locations(&self) -> Result<usize>;
}
