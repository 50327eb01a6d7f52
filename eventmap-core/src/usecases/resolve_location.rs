use super::prelude::*;
use crate::gateways::geocode::GeoCodingGateway;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct ResolveLocation {
    pub city    : String,
    pub country : String,
    pub street  : Option<String>,
}

/// An address together with the place it has been resolved to.
#[derive(Debug, Clone)]
pub struct GeocodedLocation {
    address: Address,
    place: GeocodedPlace,
}

/// Resolves the address with the geocoding provider.
///
/// Returns `Ok(None)` if the provider did not find the address.
pub fn geocode_location<G>(geo: &G, input: ResolveLocation) -> Result<Option<GeocodedLocation>>
where
    G: GeoCodingGateway + ?Sized,
{
    let ResolveLocation {
        city,
        country,
        street,
    } = input;
    let address = super::prepare_address(&city, &country, street.as_deref())?;
    let result = geo.resolve_address(&address).map_err(Error::Geocoding)?;
    match result {
        GeocodeResult::Found(place) => {
            log::debug!(
                "Resolved address '{}' as place {}",
                address.to_query_string(),
                place.place_id
            );
            Ok(Some(GeocodedLocation { address, place }))
        }
        GeocodeResult::NotFound => {
            log::warn!(
                "Address '{}' could not be resolved",
                address.to_query_string()
            );
            Ok(None)
        }
    }
}

/// Reuses the location with the same external place id or creates a new one.
///
/// The reused location is refreshed with the latest address and geocode.
pub fn reconcile_location<R>(repo: &R, geocoded: GeocodedLocation) -> Result<Location>
where
    R: LocationRepo,
{
    let GeocodedLocation { address, place } = geocoded;
    if let Some(existing) = repo.try_get_location_by_place_id(&place.place_id)? {
        return refresh_location(repo, existing, address, place);
    }
    let location = Location {
        id: Id::new(),
        address: address.clone(),
        place_id: Some(place.place_id.clone()),
        formatted_address: place.formatted_address.clone(),
        pos: Some(place.pos),
    };
    match repo.create_location(&location) {
        Ok(()) => {
            log::info!(
                "Created location {} for place {}",
                location.id,
                place.place_id
            );
            Ok(location)
        }
        Err(RepoError::AlreadyExists) => {
            // Someone else has inserted the same place in the meantime
            log::warn!(
                "Place {} has already been stored: retrying lookup",
                place.place_id
            );
            let existing = repo
                .try_get_location_by_place_id(&place.place_id)?
                .ok_or(RepoError::NotFound)?;
            refresh_location(repo, existing, address, place)
        }
        Err(err) => Err(err.into()),
    }
}

fn refresh_location<R>(
    repo: &R,
    existing: Location,
    address: Address,
    place: GeocodedPlace,
) -> Result<Location>
where
    R: LocationRepo,
{
    let GeocodedPlace {
        place_id,
        formatted_address,
        pos,
    } = place;
    let refreshed = Location {
        id: existing.id.clone(),
        address,
        place_id: Some(place_id),
        formatted_address,
        pos: Some(pos),
    };
    if refreshed == existing {
        log::debug!("Location {} is up to date", existing.id);
        return Ok(existing);
    }
    repo.update_location(&refreshed)?;
    log::info!("Updated location {}", refreshed.id);
    Ok(refreshed)
}

/// Geocodes the address and reconciles the result with the stored locations.
///
/// Returns `Ok(None)` without touching the repository if the
/// address could not be resolved.
pub fn resolve_location<R, G>(repo: &R, geo: &G, input: ResolveLocation) -> Result<Option<Location>>
where
    R: LocationRepo,
    G: GeoCodingGateway + ?Sized,
{
    geocode_location(geo, input)?
        .map(|geocoded| reconcile_location(repo, geocoded))
        .transpose()
}

/// Rejects operations that depend on an unresolvable address.
pub fn require_location(location: Option<Location>) -> Result<Location> {
    location.ok_or(Error::InvalidLocation)
}
