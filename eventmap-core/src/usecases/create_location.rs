use super::prelude::*;

/// A location with caller-supplied coordinates.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub city    : String,
    pub country : String,
    pub street  : Option<String>,
    pub lat     : f64,
    pub lng     : f64,
}

pub(crate) fn prepare_location(new: NewLocation) -> Result<(Address, MapPoint)> {
    let NewLocation {
        city,
        country,
        street,
        lat,
        lng,
    } = new;
    let address = super::prepare_address(&city, &country, street.as_deref())?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    Ok((address, pos))
}

/// Stores a new location without geocoding it.
pub fn create_location<R>(repo: &R, new: NewLocation) -> Result<Location>
where
    R: LocationRepo,
{
    let (address, pos) = prepare_location(new)?;
    let location = Location {
        id: Id::new(),
        address,
        place_id: None,
        formatted_address: None,
        pos: Some(pos),
    };
    log::debug!("Storing new location: {:?}", location);
    repo.create_location(&location)?;
    Ok(location)
}
