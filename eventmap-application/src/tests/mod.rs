pub mod prelude {
    use std::{cell::Cell, collections::HashMap};

    pub use eventmap_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub fn new_location(city: &str, country: &str, lat: f64, lng: f64) -> usecases::NewLocation {
        usecases::NewLocation {
            city: city.into(),
            country: country.into(),
            street: None,
            lat,
            lng,
        }
    }

    #[derive(Default)]
    pub struct StaticGeoCoder {
        places: HashMap<String, GeocodedPlace>,
        pub calls: Cell<usize>,
    }

    impl StaticGeoCoder {
        pub fn with(mut self, query: &str, place_id: &str, (lat, lng): (f64, f64)) -> Self {
            self.places.insert(
                query.into(),
                GeocodedPlace {
                    place_id: place_id.into(),
                    formatted_address: Some(query.into()),
                    pos: MapPoint::from_lat_lng_deg(lat, lng),
                },
            );
            self
        }
    }

    impl eventmap_core::gateways::geocode::GeoCodingGateway for StaticGeoCoder {
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

    impl eventmap_core::gateways::geocode::GeoCodingGateway for FailingGeoCoder {
        fn resolve_address(&self, _: &Address) -> anyhow::Result<GeocodeResult> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            eventmap_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_location(&self, new_location: usecases::NewLocation) -> Id {
            flows::create_location(&self.db_connections, new_location)
                .unwrap()
                .id
        }

        pub fn location(&self, id: &str) -> Location {
            self.db_connections
                .shared()
                .unwrap()
                .get_location(id)
                .unwrap()
        }

        pub fn count_locations(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_locations()
                .unwrap()
        }
    }
}
