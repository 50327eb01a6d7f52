use super::{create_location::prepare_location, prelude::*};

pub type UpdateLocation = super::NewLocation;

/// Overwrites address and coordinates of an existing location.
///
/// Coordinates that have not been obtained by geocoding cannot be
/// associated with an external place, i.e. the external place id and
/// the formatted address are discarded.
pub fn update_location<R>(repo: &R, id: &str, update: UpdateLocation) -> Result<Location>
where
    R: LocationRepo,
{
    let (address, pos) = prepare_location(update)?;
    let old = repo.get_location(id)?;
    let location = Location {
        id: old.id,
        address,
        place_id: None,
        formatted_address: None,
        pos: Some(pos),
    };
    if let Some(place_id) = old.place_id {
        log::info!("Detaching location {} from place {}", location.id, place_id);
    }
    repo.update_location(&location)?;
    Ok(location)
}
