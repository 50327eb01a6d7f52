use crate::config;
use anyhow::Result;
use eventmap_core::gateways::geocode::GeoCodingGateway;
use eventmap_gateways::{google_maps::GoogleMaps, json_file::JsonFileGeocoder};

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Option<Box<dyn GeoCodingGateway>>> {
    let Some(gateway) = &cfg.gateway else {
        log::warn!("No geocoding gateway configured");
        return Ok(None);
    };
    let gw: Box<dyn GeoCodingGateway> = match gateway {
        config::GeocodingGateway::GoogleMaps {
            api_key,
            api_base_url,
        } => {
            log::info!("Use Google Maps geocoding gateway");
            Box::new(GoogleMaps::new(
                api_key.clone(),
                api_base_url.clone(),
                cfg.timeout,
            )?)
        }
        config::GeocodingGateway::JsonFile { path } => {
            log::info!("Use JSON file geocoding gateway ({})", path.display());
            Box::new(JsonFileGeocoder::load(path)?)
        }
    };
    Ok(Some(gw))
}
