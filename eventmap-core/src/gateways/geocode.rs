use crate::entities::{Address, GeocodeResult};

/// Translates free-text addresses into geocoded places.
///
/// Each call is independent: no caching and no retries.
/// `Ok(GeocodeResult::NotFound)` is a regular outcome, whereas
/// transport failures and malformed responses are returned as errors.
pub trait GeoCodingGateway {
    fn resolve_address(&self, addr: &Address) -> anyhow::Result<GeocodeResult>;
}
