use crate::{address::*, geo::*, id::*};

/// A physical place that events and profiles refer to.
///
/// The external place id is issued by the geocoding provider and
/// identifies at most one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Id,
    pub address: Address,
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
    /// `None` for unresolved locations.
    pub pos: Option<MapPoint>,
}

/// The outcome of resolving a free-text address.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeResult {
    Found(GeocodedPlace),
    /// The provider did not find any match.
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub place_id: String,
    pub formatted_address: Option<String>,
    pub pos: MapPoint,
}

impl GeocodeResult {
    pub fn found(self) -> Option<GeocodedPlace> {
        match self {
            Self::Found(place) => Some(place),
            Self::NotFound => None,
        }
    }
}
