use super::*;

pub fn create_location(
    connections: &sqlite::Connections,
    new_location: usecases::NewLocation,
) -> Result<Location> {
    let location = connections
        .exclusive()?
        .transaction(|conn| usecases::create_location(conn, new_location))
        .inspect_err(|err| {
            warn!("Failed to store new location: {err}");
        })?;
    info!("Created location {}", location.id);
    Ok(location)
}
