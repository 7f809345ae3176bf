use crate::search::filters::{FilterSet, DEFAULT_STATUS};

/// Builds the ordered query pairs for a property search.
///
/// Pure transformation: `search` comes first when the trimmed term is
/// non-empty, then each filter field that holds a non-default value.
/// Amenities contribute one pair per element in insertion order; `status`
/// is only sent when it differs from [`DEFAULT_STATUS`].
pub fn build_query(term: &str, filters: &FilterSet) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    let term = term.trim();
    if !term.is_empty() {
        pairs.push(("search", term.to_string()));
    }
    if !filters.city.is_empty() {
        pairs.push(("city", filters.city.clone()));
    }
    if let Some(min) = filters.min_price {
        pairs.push(("minPrice", min.to_string()));
    }
    if let Some(max) = filters.max_price {
        pairs.push(("maxPrice", max.to_string()));
    }
    if !filters.bedrooms.is_empty() {
        pairs.push(("bedrooms", filters.bedrooms.clone()));
    }
    if !filters.bathrooms.is_empty() {
        pairs.push(("bathrooms", filters.bathrooms.clone()));
    }
    if !filters.property_type.is_empty() {
        pairs.push(("propertyType", filters.property_type.clone()));
    }
    for amenity in &filters.amenities {
        pairs.push(("amenities", amenity.clone()));
    }
    if filters.status != DEFAULT_STATUS {
        pairs.push(("status", filters.status.clone()));
    }

    pairs
}

/// Renders query pairs as `k=v&k=v` for logs and tests. Percent-encoding is
/// the HTTP layer's job ([`reqwest::RequestBuilder::query`]).
pub fn to_query_string(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_only() {
        let pairs = build_query("apartment", &FilterSet::default());
        assert_eq!(to_query_string(&pairs), "search=apartment");
    }

    #[test]
    fn term_is_trimmed_and_whitespace_is_dropped() {
        let pairs = build_query("  studio  ", &FilterSet::default());
        assert_eq!(to_query_string(&pairs), "search=studio");
        assert!(build_query("   ", &FilterSet::default()).is_empty());
    }

    #[test]
    fn city_and_repeated_amenities() {
        let filters = FilterSet {
            city: "Karen".to_string(),
            amenities: vec!["Parking".to_string(), "Security".to_string()],
            ..FilterSet::default()
        };
        let pairs = build_query("", &filters);
        assert_eq!(
            to_query_string(&pairs),
            "city=Karen&amenities=Parking&amenities=Security"
        );
    }

    #[test]
    fn default_status_is_omitted_non_default_is_sent() {
        let mut filters = FilterSet {
            city: "Nairobi".to_string(),
            ..FilterSet::default()
        };
        assert_eq!(to_query_string(&build_query("", &filters)), "city=Nairobi");

        filters.status = "rented".to_string();
        assert_eq!(
            to_query_string(&build_query("", &filters)),
            "city=Nairobi&status=rented"
        );
    }

    #[test]
    fn full_filter_set_keeps_field_order() {
        let filters = FilterSet {
            city: "Westlands".to_string(),
            min_price: Some(10000),
            max_price: Some(80000),
            bedrooms: "2".to_string(),
            bathrooms: "1".to_string(),
            property_type: "Apartment".to_string(),
            amenities: vec!["Water".to_string()],
            status: FilterSet::default().status,
        };
        assert_eq!(
            to_query_string(&build_query("garden view", &filters)),
            "search=garden view&city=Westlands&minPrice=10000&maxPrice=80000\
             &bedrooms=2&bathrooms=1&propertyType=Apartment&amenities=Water"
        );
    }
}
