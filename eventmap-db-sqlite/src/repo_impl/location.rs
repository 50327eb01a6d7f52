use super::*;

impl LocationRepo for DbReadOnly<'_> {
    fn create_location(&self, _location: &Location) -> Result<()> {
        Err(read_only_violation())
    }
    fn update_location(&self, _location: &Location) -> Result<()> {
        Err(read_only_violation())
    }

    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_location_by_place_id(&self, place_id: &str) -> Result<Option<Location>> {
        try_get_location_by_place_id(&mut self.conn.borrow_mut(), place_id)
    }

    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl LocationRepo for DbReadWrite<'_> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn update_location(&self, location: &Location) -> Result<()> {
        update_location(&mut self.conn.borrow_mut(), location)
    }

    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_location_by_place_id(&self, place_id: &str) -> Result<Option<Location>> {
        try_get_location_by_place_id(&mut self.conn.borrow_mut(), place_id)
    }

    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl LocationRepo for DbConnection<'_> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn update_location(&self, location: &Location) -> Result<()> {
        update_location(&mut self.conn.borrow_mut(), location)
    }

    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_location_by_place_id(&self, place_id: &str) -> Result<Option<Location>> {
        try_get_location_by_place_id(&mut self.conn.borrow_mut(), place_id)
    }

    fn all_locations(&self) -> Result<Vec<Location>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

fn into_new_location(location: &Location) -> models::NewLocation<'_> {
    let Location {
        id,
        address,
        place_id,
        formatted_address,
        pos,
    } = location;
    let (lat, lng) = match pos {
        Some(pos) => (Some(pos.lat().to_raw()), Some(pos.lng().to_raw())),
        None => (None, None),
    };
    models::NewLocation {
        id: id.as_str(),
        street: address.street.as_deref(),
        city: &address.city,
        country: &address.country,
        place_id: place_id.as_deref(),
        formatted_address: formatted_address.as_deref(),
        lat,
        lng,
    }
}

fn load_location(location: models::Location) -> Location {
    let models::Location {
        rowid: _,
        id,
        street,
        city,
        country,
        place_id,
        formatted_address,
        lat,
        lng,
    } = location;
    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => {
            let pos = MapPoint::try_from_raw(lat, lng);
            if pos.is_none() {
                // This should never happen if coordinates have been validated properly on insert
                log::error!("Location {id} has invalid coordinates: lat = {lat}, lng = {lng}");
            }
            pos
        }
        _ => None,
    };
    Location {
        id: id.into(),
        address: Address {
            street,
            city,
            country,
        },
        place_id,
        formatted_address,
        pos,
    }
}

fn create_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    diesel::insert_into(schema::location::table)
        .values(&into_new_location(location))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    use schema::location::dsl;
    let count = diesel::update(schema::location::table.filter(dsl::id.eq(location.id.as_str())))
        .set(&into_new_location(location))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count < 1 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_location(conn: &mut SqliteConnection, id: &str) -> Result<Location> {
    use schema::location::dsl;
    let location = schema::location::table
        .filter(dsl::id.eq(id))
        .first::<models::Location>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_location(location))
}

fn try_get_location_by_place_id(
    conn: &mut SqliteConnection,
    place_id: &str,
) -> Result<Option<Location>> {
    use schema::location::dsl;
    Ok(schema::location::table
        .filter(dsl::place_id.eq(place_id))
        .first::<models::Location>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_location))
}

fn all_locations(conn: &mut SqliteConnection) -> Result<Vec<Location>> {
    use schema::location::dsl;
    Ok(schema::location::table
        .order_by(dsl::rowid)
        .load::<models::Location>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_location)
        .collect())
}

fn count_locations(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::location::dsl;
    let count = schema::location::table
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    usize::try_from(count).map_err(|err| repo::Error::Other(err.into()))
}
