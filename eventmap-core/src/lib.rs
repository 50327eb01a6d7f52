pub mod gateways;
pub mod proximity;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use eventmap_entities::{address::*, geo::*, id::*, location::*};
}
