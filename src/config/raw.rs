use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("eventmap.default.toml");

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Configures the API key of the Google Maps gateway.
    ///
    /// Google Maps is selected if no other gateway has been chosen.
    pub fn with_google_maps_api_key(mut self, api_key: String) -> Self {
        let geocoding = self.geocoding.get_or_insert_with(Default::default);
        if geocoding.gateway.is_none() {
            geocoding.gateway = Some(GeocodingGateway::GoogleMaps);
        }
        let gateway = self.gateway.get_or_insert_with(Default::default);
        gateway
            .google_maps
            .get_or_insert_with(Default::default)
            .api_key = Some(api_key);
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    GoogleMaps,
    JsonFile,
}

impl GeocodingGateway {
    pub const fn toml_name(self) -> &'static str {
        match self {
            Self::GoogleMaps => "google-maps",
            Self::JsonFile => "json-file",
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google_maps: Option<GoogleMaps>,
    pub json_file: Option<JsonFile>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleMaps {
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JsonFile {
    pub path: PathBuf,
}
