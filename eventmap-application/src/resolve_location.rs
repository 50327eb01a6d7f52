use super::*;

/// Resolves a free-text address to a stored location.
///
/// The geocoding provider is queried before the exclusive database
/// connection is acquired, so that slow lookups don't block other writers.
/// Returns `Ok(None)` without any write if the address could not be found.
pub fn resolve_location(
    connections: &sqlite::Connections,
    geo: &dyn GeoCodingGateway,
    input: usecases::ResolveLocation,
) -> Result<Option<Location>> {
    let Some(geocoded) = usecases::geocode_location(geo, input)? else {
        return Ok(None);
    };
    let location = connections
        .exclusive()?
        .transaction(|conn| usecases::reconcile_location(conn, geocoded))
        .inspect_err(|err| {
            warn!("Failed to store resolved location: {err}");
        })?;
    Ok(Some(location))
}

/// Like [`resolve_location`], but fails if the address could not be found.
pub fn require_location(
    connections: &sqlite::Connections,
    geo: &dyn GeoCodingGateway,
    input: usecases::ResolveLocation,
) -> Result<Location> {
    let location = resolve_location(connections, geo, input)?;
    Ok(usecases::require_location(location)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use std::cell::Cell;

    fn koenigstrasse() -> usecases::ResolveLocation {
        usecases::ResolveLocation {
            city: "Stuttgart".into(),
            country: "Germany".into(),
            street: Some("Königstraße 1".into()),
        }
    }

    fn koenigstrasse_geocoder() -> StaticGeoCoder {
        StaticGeoCoder::default().with(
            "Königstraße 1, Stuttgart, Germany",
            "ChIJ-koenigstrasse",
            (48.777_531, 9.179_364),
        )
    }

    #[test]
    fn resolve_the_same_address_twice() {
        let fixture = BackendFixture::new();
        let geo = koenigstrasse_geocoder();
        let first = flows::resolve_location(&fixture.db_connections, &geo, koenigstrasse())
            .unwrap()
            .unwrap();
        let second = flows::resolve_location(&fixture.db_connections, &geo, koenigstrasse())
            .unwrap()
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(Some("ChIJ-koenigstrasse"), first.place_id.as_deref());
        assert_eq!(2, geo.calls.get());
        assert_eq!(1, fixture.count_locations());
    }

    #[test]
    fn different_spellings_of_the_same_place() {
        let fixture = BackendFixture::new();
        let geo = koenigstrasse_geocoder().with(
            "Koenigstr. 1, Stuttgart, Germany",
            "ChIJ-koenigstrasse",
            (48.777_531, 9.179_364),
        );
        let first = flows::resolve_location(&fixture.db_connections, &geo, koenigstrasse())
            .unwrap()
            .unwrap();
        let mut input = koenigstrasse();
        input.street = Some("Koenigstr. 1".into());
        let second = flows::resolve_location(&fixture.db_connections, &geo, input)
            .unwrap()
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(Some("Koenigstr. 1"), second.address.street.as_deref());
        assert_eq!(1, fixture.count_locations());
        let stored = fixture.location(second.id.as_str());
        assert_eq!(second, stored);
    }

    /// Misses the first lookup by place id as if another
    /// writer had inserted the place right after it.
    struct StaleFirstLookup<'a, R> {
        repo: &'a R,
        missed: Cell<bool>,
    }

    impl<'a, R> StaleFirstLookup<'a, R> {
        fn new(repo: &'a R) -> Self {
            Self {
                repo,
                missed: Cell::new(false),
            }
        }
    }

    type RepoResult<T> = std::result::Result<T, RepoError>;

    impl<R: LocationRepo> LocationRepo for StaleFirstLookup<'_, R> {
        fn create_location(&self, location: &Location) -> RepoResult<()> {
            self.repo.create_location(location)
        }
        fn update_location(&self, location: &Location) -> RepoResult<()> {
            self.repo.update_location(location)
        }
        fn get_location(&self, id: &str) -> RepoResult<Location> {
            self.repo.get_location(id)
        }
        fn try_get_location_by_place_id(&self, place_id: &str) -> RepoResult<Option<Location>> {
            if !self.missed.replace(true) {
                return Ok(None);
            }
            self.repo.try_get_location_by_place_id(place_id)
        }
        fn all_locations(&self) -> RepoResult<Vec<Location>> {
            self.repo.all_locations()
        }
        fn count_locations(&self) -> RepoResult<usize> {
            self.repo.count_locations()
        }
    }

    #[test]
    fn retry_lookup_after_unique_place_id_violation() {
        let fixture = BackendFixture::new();
        let geo = koenigstrasse_geocoder();
        let stored = flows::resolve_location(&fixture.db_connections, &geo, koenigstrasse())
            .unwrap()
            .unwrap();

        let mut input = koenigstrasse();
        input.street = Some(" Königstraße 1 ".into());
        let geocoded = usecases::geocode_location(&geo, input).unwrap().unwrap();
        let reused = fixture
            .db_connections
            .exclusive()
            .unwrap()
            .transaction(|conn| {
                let repo = StaleFirstLookup::new(conn);
                let location = usecases::reconcile_location(&repo, geocoded)?;
                assert!(repo.missed.get());
                Ok::<_, usecases::Error>(location)
            })
            .unwrap();

        assert_eq!(stored.id, reused.id);
        assert_eq!(stored, reused);
        assert_eq!(1, fixture.count_locations());
        assert_eq!(stored, fixture.location(stored.id.as_str()));
    }

    #[test]
    fn unknown_address() {
        let fixture = BackendFixture::new();
        let geo = StaticGeoCoder::default();
        let location =
            flows::resolve_location(&fixture.db_connections, &geo, koenigstrasse()).unwrap();
        assert!(location.is_none());
        assert_eq!(1, geo.calls.get());
        assert_eq!(0, fixture.count_locations());

        let err = flows::require_location(&fixture.db_connections, &geo, koenigstrasse())
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::InvalidLocation))
        ));
    }

    #[test]
    fn geocoding_failures_are_not_swallowed() {
        let fixture = BackendFixture::new();
        let err = flows::resolve_location(&fixture.db_connections, &FailingGeoCoder, koenigstrasse())
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Geocoding(_)))
        ));
        assert_eq!(0, fixture.count_locations());
    }

    #[test]
    fn missing_city() {
        let fixture = BackendFixture::new();
        let geo = koenigstrasse_geocoder();
        let mut input = koenigstrasse();
        input.city = "  ".into();
        assert!(flows::resolve_location(&fixture.db_connections, &geo, input).is_err());
        assert_eq!(0, geo.calls.get());
    }
}
