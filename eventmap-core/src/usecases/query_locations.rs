use super::prelude::*;
use crate::proximity::filter_nearby;

pub fn get_location<R: LocationRepo>(repo: &R, id: &str) -> Result<Location> {
    Ok(repo.get_location(id)?)
}

pub fn all_locations<R: LocationRepo>(repo: &R) -> Result<Vec<Location>> {
    Ok(repo.all_locations()?)
}

/// All locations in the given city, case-insensitive.
pub fn locations_in_city<R>(repo: &R, city: &str, country: &str) -> Result<Vec<Location>>
where
    R: LocationRepo,
{
    let city = city.trim().to_lowercase();
    let country = country.trim().to_lowercase();
    Ok(repo
        .all_locations()?
        .into_iter()
        .filter(|l| {
            l.address.city.to_lowercase() == city && l.address.country.to_lowercase() == country
        })
        .collect())
}

/// All resolved locations within `max_distance_km` around
/// the given position, nearest first.
pub fn nearby_locations<R>(
    repo: &R,
    lat: f64,
    lng: f64,
    max_distance_km: f64,
) -> Result<Vec<(Location, Distance)>>
where
    R: LocationRepo,
{
    let reference = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    if !(max_distance_km.is_finite() && max_distance_km >= 0.0) {
        return Err(Error::InvalidDistance);
    }
    let candidates = repo.all_locations()?;
    log::debug!(
        "Searching {} location(s) within {} km around {}",
        candidates.len(),
        max_distance_km,
        reference
    );
    Ok(filter_nearby(
        reference,
        candidates,
        Distance::from_km(max_distance_km),
    ))
}
