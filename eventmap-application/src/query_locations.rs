use super::*;

pub fn get_location(connections: &sqlite::Connections, id: &str) -> Result<Location> {
    Ok(usecases::get_location(&connections.shared()?, id)?)
}

pub fn all_locations(connections: &sqlite::Connections) -> Result<Vec<Location>> {
    Ok(usecases::all_locations(&connections.shared()?)?)
}

pub fn locations_in_city(
    connections: &sqlite::Connections,
    city: &str,
    country: &str,
) -> Result<Vec<Location>> {
    Ok(usecases::locations_in_city(
        &connections.shared()?,
        city,
        country,
    )?)
}

pub fn nearby_locations(
    connections: &sqlite::Connections,
    lat: f64,
    lng: f64,
    max_distance_km: f64,
) -> Result<Vec<(Location, Distance)>> {
    Ok(usecases::nearby_locations(
        &connections.shared()?,
        lat,
        lng,
        max_distance_km,
    )?)
}
