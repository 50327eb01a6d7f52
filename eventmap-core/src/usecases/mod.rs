use crate::entities::*;

mod create_location;
mod error;
mod query_locations;
mod resolve_location;
mod update_location;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    create_location::*, error::Error, query_locations::*, resolve_location::*,
    update_location::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}

/// Trims all parts and rejects missing mandatory parts.
///
/// An empty street is treated as absent.
pub fn prepare_address(city: &str, country: &str, street: Option<&str>) -> Result<Address> {
    let city = city.trim();
    if city.is_empty() {
        return Err(Error::City);
    }
    let country = country.trim();
    if country.is_empty() {
        return Err(Error::Country);
    }
    let street = street
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned);
    Ok(Address {
        street,
        city: city.to_owned(),
        country: country.to_owned(),
    })
}
