pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, location::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.location.id = id.into();
            self
        }
        pub fn street(mut self, street: &str) -> Self {
            self.location.address.street = Some(street.into());
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.location.address.city = city.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.location.address.country = country.into();
            self
        }
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.location.place_id = Some(place_id.into());
            self
        }
        pub fn formatted_address(mut self, formatted_address: &str) -> Self {
            self.location.formatted_address = Some(formatted_address.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = Some(pos);
            self
        }
        pub fn unresolved(mut self) -> Self {
            self.location.pos = None;
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    address: Address {
                        street: None,
                        city: "Stuttgart".into(),
                        country: "Germany".into(),
                    },
                    place_id: None,
                    formatted_address: None,
                    pos: Some(MapPoint::from_lat_lng_deg(0.0, 0.0)),
                },
            }
        }
    }
}
