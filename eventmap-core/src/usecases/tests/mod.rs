use super::prelude::*;
use crate::gateways::geocode::GeoCodingGateway;

use anyhow::anyhow;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    result,
};

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub locations: RefCell<Vec<Location>>,
    /// Number of successful create and update operations.
    pub writes: Cell<usize>,
    /// Inserted right before the next create to simulate a race.
    pub concurrent_insert: RefCell<Option<Location>>,
}

impl MockDb {
    pub fn insert(&self, location: Location) -> Location {
        self.locations.borrow_mut().push(location.clone());
        location
    }
}

fn is_taken(locations: &[Location], location: &Location) -> bool {
    locations.iter().any(|l| {
        l.id == location.id || (l.place_id.is_some() && l.place_id == location.place_id)
    })
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: &Location) -> RepoResult<()> {
        if let Some(concurrent) = self.concurrent_insert.borrow_mut().take() {
            self.locations.borrow_mut().push(concurrent);
        }
        if is_taken(&self.locations.borrow(), location) {
            return Err(RepoError::AlreadyExists);
        }
        self.locations.borrow_mut().push(location.clone());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn update_location(&self, location: &Location) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let others: Vec<_> = locations
            .iter()
            .filter(|l| l.id != location.id)
            .cloned()
            .collect();
        if is_taken(&others, location) {
            return Err(RepoError::AlreadyExists);
        }
        let stored = locations
            .iter_mut()
            .find(|l| l.id == location.id)
            .ok_or(RepoError::NotFound)?;
        *stored = location.clone();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn get_location(&self, id: &str) -> RepoResult<Location> {
        self.locations
            .borrow()
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_location_by_place_id(&self, place_id: &str) -> RepoResult<Option<Location>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .find(|l| l.place_id.as_deref() == Some(place_id))
            .cloned())
    }

    fn all_locations(&self) -> RepoResult<Vec<Location>> {
        Ok(self.locations.borrow().clone())
    }

    fn count_locations(&self) -> RepoResult<usize> {
        Ok(self.locations.borrow().len())
    }
}

/// Resolves a fixed set of query strings, everything else is not found.
#[derive(Default)]
pub struct StaticGeoCoder {
    places: HashMap<String, GeocodedPlace>,
    pub calls: Cell<usize>,
}

impl StaticGeoCoder {
    pub fn with(
        mut self,
        query: &str,
        place_id: &str,
        formatted_address: &str,
        (lat, lng): (f64, f64),
    ) -> Self {
        let place = GeocodedPlace {
            place_id: place_id.into(),
            formatted_address: Some(formatted_address.into()),
            pos: MapPoint::from_lat_lng_deg(lat, lng),
        };
        self.places.insert(query.into(), place);
        self
    }
}

impl GeoCodingGateway for StaticGeoCoder {
    fn resolve_address(&self, addr: &Address) -> anyhow::Result<GeocodeResult> {
        self.calls.set(self.calls.get() + 1);
        Ok(self
            .places
            .get(&addr.to_query_string())
            .cloned()
            .map(GeocodeResult::Found)
            .unwrap_or(GeocodeResult::NotFound))
    }
}

pub struct FailingGeoCoder;

impl GeoCodingGateway for FailingGeoCoder {
    fn resolve_address(&self, _: &Address) -> anyhow::Result<GeocodeResult> {
        Err(anyhow!("connection refused"))
    }
}
