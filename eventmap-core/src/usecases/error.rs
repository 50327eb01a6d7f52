use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The city is missing")]
    City,
    #[error("The country is missing")]
    Country,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid distance")]
    InvalidDistance,
    #[error("Location is not valid")]
    InvalidLocation,
    #[error("Failed to resolve address: {0}")]
    Geocoding(#[source] anyhow::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
