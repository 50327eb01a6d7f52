#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street  : Option<String>,
    pub city    : String,
    pub country : String,
}

impl Address {
    /// The free-text query for a geocoding provider.
    ///
    /// Joins the non-empty parts in the order street, city, country.
    pub fn to_query_string(&self) -> String {
        let Self {
            street,
            city,
            country,
        } = self;
        [street.as_deref().unwrap_or_default(), city.as_str(), country.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_with_street() {
        let addr = Address {
            street: Some("Königstraße 1".into()),
            city: "Stuttgart".into(),
            country: "Germany".into(),
        };
        assert_eq!("Königstraße 1, Stuttgart, Germany", addr.to_query_string());
    }

    #[test]
    fn query_string_without_street() {
        let mut addr = Address {
            street: None,
            city: "A city".into(),
            country: "A country".into(),
        };
        assert_eq!("A city, A country", addr.to_query_string());
        addr.street = Some("  ".into());
        assert_eq!("A city, A country", addr.to_query_string());
    }
}
