use super::*;

/// Overwrites address and coordinates of a stored location.
pub fn update_location(
    connections: &sqlite::Connections,
    id: &str,
    update: usecases::UpdateLocation,
) -> Result<Location> {
    let location = connections
        .exclusive()?
        .transaction(|conn| usecases::update_location(conn, id, update))
        .inspect_err(|err| {
            warn!("Failed to update location {id}: {err}");
        })?;
    info!("Updated location {}", location.id);
    Ok(location)
}
