//! An offline geocoding gateway for development and testing.
//!
//! The JSON file maps address query strings to places:
//!
//! ```json
//! {
//!   "Königstraße 1, Stuttgart, Germany": {
//!     "place_id": "ChIJ...",
//!     "formatted_address": "Königstraße 1, 70173 Stuttgart, Germany",
//!     "lat": 48.777531,
//!     "lng": 9.179364
//!   }
//! }
//! ```

use anyhow::{anyhow, Result};
use eventmap_core::{
    entities::{Address, GeocodeResult, GeocodedPlace, MapPoint},
    gateways::geocode::GeoCodingGateway,
};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

#[derive(Debug, Deserialize)]
struct JsonPlace {
    place_id: String,
    formatted_address: Option<String>,
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Default)]
pub struct JsonFileGeocoder {
    places: HashMap<String, GeocodedPlace>,
}

impl JsonFileGeocoder {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let places = Self::from_json(&json)?;
        log::info!(
            "Loaded {} geocoded place(s) from {}",
            places.places.len(),
            path.display()
        );
        Ok(places)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, JsonPlace> = serde_json::from_str(json)?;
        let places = raw
            .into_iter()
            .map(|(query, place)| {
                let JsonPlace {
                    place_id,
                    formatted_address,
                    lat,
                    lng,
                } = place;
                let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
                    .ok_or_else(|| anyhow!("Invalid coordinates for '{query}': {lat},{lng}"))?;
                let place = GeocodedPlace {
                    place_id,
                    formatted_address,
                    pos,
                };
                Ok((query, place))
            })
            .collect::<Result<_>>()?;
        Ok(Self { places })
    }
}

impl GeoCodingGateway for JsonFileGeocoder {
    fn resolve_address(&self, addr: &Address) -> Result<GeocodeResult> {
        let query = addr.to_query_string();
        let result = self
            .places
            .get(&query)
            .cloned()
            .map(GeocodeResult::Found)
            .unwrap_or(GeocodeResult::NotFound);
        log::debug!("Resolved address '{query}': {result:?}");
        Ok(result)
    }
}
