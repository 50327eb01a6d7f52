use anyhow::Result;
use eventmap_core::{
    entities::{Address, GeocodeResult, GeocodedPlace, MapPoint},
    gateways::geocode::GeoCodingGateway,
};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com";

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// A geocoding gateway based on the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    api_key: String,
    api_base_url: String,
    client: reqwest::blocking::Client,
}

impl GoogleMaps {
    pub fn new(api_key: String, api_base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let api_base_url = api_base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            api_key,
            api_base_url,
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResponseResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponseResult {
    place_id: String,
    formatted_address: Option<String>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, thiserror::Error)]
enum ResponseError {
    #[error("Geocoding request failed with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status {
        status: String,
        message: Option<String>,
    },
    #[error("Invalid coordinates of place {place_id}: {lat},{lng}")]
    Position { place_id: String, lat: f64, lng: f64 },
}

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

fn parse_response(body: &str) -> Result<GeocodeResult> {
    let GeocodeResponse {
        status,
        results,
        error_message,
    } = serde_json::from_str(body)?;
    match status.as_str() {
        STATUS_OK => {}
        STATUS_ZERO_RESULTS => return Ok(GeocodeResult::NotFound),
        _ => {
            return Err(ResponseError::Status {
                status,
                message: error_message,
            }
            .into())
        }
    }
    // The results are ranked
    let Some(GeocodeResponseResult {
        place_id,
        formatted_address,
        geometry: Geometry {
            location: LatLng { lat, lng },
        },
    }) = results.into_iter().next()
    else {
        return Ok(GeocodeResult::NotFound);
    };
    let Some(pos) = MapPoint::try_from_lat_lng_deg(lat, lng) else {
        return Err(ResponseError::Position { place_id, lat, lng }.into());
    };
    Ok(GeocodeResult::Found(GeocodedPlace {
        place_id,
        formatted_address,
        pos,
    }))
}

impl GeoCodingGateway for GoogleMaps {
    fn resolve_address(&self, addr: &Address) -> Result<GeocodeResult> {
        let query = addr.to_query_string();
        let url = format!("{}{GEOCODE_PATH}", self.api_base_url);
        let response = self
            .client
            .get(url)
            .query(&[("address", query.as_str()), ("key", self.api_key.as_str())])
            .send()
            .inspect_err(|err| {
                log::warn!("Failed to resolve address '{query}': {err}");
            })?
            .error_for_status()?;
        let body = response.text()?;
        let result = parse_response(&body)?;
        log::debug!("Resolved address '{query}': {result:?}");
        Ok(result)
    }
}
