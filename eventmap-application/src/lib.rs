#[macro_use]
extern crate log;

mod create_location;
mod query_locations;
mod resolve_location;
mod update_location;

pub mod prelude {
    pub use super::{
        create_location::*, query_locations::*, resolve_location::*, update_location::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use eventmap_core::{entities::*, gateways::geocode::GeoCodingGateway, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use eventmap_db_sqlite::Connections;
}
