use crate::models::PropertyRecord;
use crate::query::state::{Filters, QueryState, SortBy};
use std::cmp::Ordering;
use tracing::debug;

/// Run the filter pipeline and return positions into `records`, in result order.
///
/// Stages run in a fixed order: text search, price range, location, type,
/// bedroom minimum, amenities, then a stable sort. Records are only read.
pub fn matching_indices(records: &[PropertyRecord], state: &QueryState) -> Vec<usize> {
    let needle = state.search_query.to_lowercase();
    let location = state.filters.location.to_lowercase();

    let mut matched: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_search(record, &needle))
        .filter(|(_, record)| matches_price(record, &state.filters))
        .filter(|(_, record)| matches_location(record, &location))
        .filter(|(_, record)| matches_type(record, &state.filters))
        .filter(|(_, record)| matches_bedrooms(record, &state.filters))
        .filter(|(_, record)| matches_amenities(record, &state.filters))
        .map(|(i, _)| i)
        .collect();

    // `sort_by` is stable, so equal keys keep collection order.
    matched.sort_by(|&a, &b| compare(&records[a], &records[b], state.sort_by));

    debug!(
        "Query matched {} of {} listings (sort: {})",
        matched.len(),
        records.len(),
        state.sort_by
    );
    matched
}

/// Filter and sort `records` for `state`, then move the cursor back to page 1.
pub fn apply_filters<'a>(
    records: &'a [PropertyRecord],
    state: &mut QueryState,
) -> Vec<&'a PropertyRecord> {
    let result = matching_indices(records, state)
        .into_iter()
        .map(|i| &records[i])
        .collect();
    state.current_page = 1;
    result
}

/// Restore default filters and clear the search box. Sort order and page size are kept.
pub fn reset_filters(state: &mut QueryState) {
    state.filters = Filters::default();
    state.search_query.clear();
    state.current_page = 1;
}

fn matches_search(record: &PropertyRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &record.title,
        &record.description,
        &record.location.city,
        &record.location.address,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn matches_price(record: &PropertyRecord, filters: &Filters) -> bool {
    // An inverted range matches nothing.
    filters.min_price <= record.price && record.price <= filters.max_price
}

fn matches_location(record: &PropertyRecord, location: &str) -> bool {
    location.is_empty()
        || record.location.city.to_lowercase().contains(location)
        || record.location.state.to_lowercase().contains(location)
}

fn matches_type(record: &PropertyRecord, filters: &Filters) -> bool {
    filters.property_types.is_empty() || filters.property_types.contains(&record.property_type)
}

fn matches_bedrooms(record: &PropertyRecord, filters: &Filters) -> bool {
    filters.bedrooms.map_or(true, |min| record.bedrooms >= min)
}

/// Every requested amenity must be present.
fn matches_amenities(record: &PropertyRecord, filters: &Filters) -> bool {
    filters.amenities.is_subset(&record.amenities)
}

fn compare(a: &PropertyRecord, b: &PropertyRecord, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::PriceAsc => a.price.cmp(&b.price),
        SortBy::PriceDesc => b.price.cmp(&a.price),
        SortBy::Rating => b.rating.total_cmp(&a.rating),
        SortBy::Newest => b.created_at.cmp(&a.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Location, PropertyType};
    use chrono::{TimeZone, Utc};

    fn record(id: &str, price: u64, city: &str, day: u32) -> PropertyRecord {
        PropertyRecord {
            id: id.to_string(),
            title: format!("Listing {id}"),
            description: "Clean and secure".to_string(),
            price,
            location: Location {
                address: format!("{id} Admiralty Way"),
                city: city.to_string(),
                state: city.to_string(),
                coordinates: [6.45, 3.47],
            },
            property_type: PropertyType::Apartment,
            bedrooms: 2,
            bathrooms: 1,
            amenities: Default::default(),
            rating: 4.0,
            availability: Availability::Available,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        }
    }

    fn ids(records: &[&PropertyRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    /// Oldest first, so the default "newest" sort reverses nothing when dates tie.
    fn lagos_trio() -> Vec<PropertyRecord> {
        vec![
            record("a", 500_000, "Lagos", 1),
            record("b", 750_000, "Lagos", 2),
            record("c", 1_000_000, "Lagos", 3),
        ]
    }

    #[test]
    fn default_state_keeps_everything_newest_first() {
        let records = lagos_trio();
        let mut state = QueryState::default();
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["c", "b", "a"]);
    }

    #[test]
    fn default_state_is_identity_when_dates_tie() {
        let records: Vec<_> = (0..5)
            .map(|i| record(&format!("r{i}"), 100_000 * (5 - i), "Abuja", 1))
            .collect();
        let mut state = QueryState::default();
        let result = apply_filters(&records, &mut state);
        assert_eq!(ids(&result), ["r0", "r1", "r2", "r3", "r4"]);
    }

    #[test]
    fn min_price_with_ascending_sort() {
        let records = lagos_trio();
        let mut state = QueryState::default();
        state.filters.min_price = 600_000;
        state.sort_by = SortBy::PriceAsc;

        let result = apply_filters(&records, &mut state);
        let prices: Vec<u64> = result.iter().map(|r| r.price).collect();
        assert_eq!(prices, [750_000, 1_000_000]);
    }

    #[test]
    fn price_range_excludes_everything_outside() {
        let records = lagos_trio();
        let mut state = QueryState::default();
        state.filters.min_price = 500_000;
        state.filters.max_price = 750_000;

        let result = apply_filters(&records, &mut state);
        assert!(result.iter().all(|r| (500_000..=750_000).contains(&r.price)));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let records = lagos_trio();
        let mut state = QueryState::default();
        state.filters.min_price = 900_000;
        state.filters.max_price = 100_000;
        assert!(apply_filters(&records, &mut state).is_empty());
    }

    #[test]
    fn text_search_is_case_insensitive_substring() {
        let mut records = lagos_trio();
        records[1].title = "Modern Apartment in Ikeja".to_string();

        for (query, expected) in [("ikeja", 1), ("IKEJA", 1), ("ikej", 1), ("ikejax", 0)] {
            let mut state = QueryState {
                search_query: query.to_string(),
                ..Default::default()
            };
            assert_eq!(apply_filters(&records, &mut state).len(), expected, "{query}");
        }
    }

    #[test]
    fn text_search_matches_the_query_verbatim() {
        let mut records = lagos_trio();
        records[1].title = "Modern Apartment in Ikeja".to_string();

        for query in ["Ikeja ", "ikeja\n", "   "] {
            let mut state = QueryState {
                search_query: query.to_string(),
                ..Default::default()
            };
            assert!(apply_filters(&records, &mut state).is_empty(), "{query:?}");
        }
    }

    #[test]
    fn location_filter_is_not_trimmed() {
        let records = lagos_trio();
        let mut state = QueryState::default();
        state.filters.location = " lagos".to_string();
        assert!(apply_filters(&records, &mut state).is_empty());
    }

    #[test]
    fn text_search_covers_city_and_address() {
        let records = lagos_trio();
        let mut state = QueryState {
            search_query: "admiralty".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&records, &mut state).len(), 3);

        state.search_query = "LAGOS".to_string();
        assert_eq!(apply_filters(&records, &mut state).len(), 3);
    }

    #[test]
    fn location_filter_matches_city_or_state() {
        let mut records = lagos_trio();
        records[2].location.city = "Gwarinpa".to_string();
        records[2].location.state = "FCT Abuja".to_string();

        let mut state = QueryState::default();
        state.filters.location = "abuja".to_string();
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["c"]);

        state.filters.location = "gwar".to_string();
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["c"]);
    }

    #[test]
    fn property_type_filter_is_membership() {
        let mut records = lagos_trio();
        records[0].property_type = PropertyType::Duplex;
        records[1].property_type = PropertyType::Studio;

        let mut state = QueryState::default();
        state.filters.property_types = [PropertyType::Duplex, PropertyType::Studio].into();
        state.sort_by = SortBy::PriceAsc;
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["a", "b"]);
    }

    #[test]
    fn bedroom_minimum_distinguishes_none_from_zero() {
        let mut records = lagos_trio();
        records[0].bedrooms = 0;
        records[2].bedrooms = 4;

        let mut state = QueryState::default();
        assert_eq!(apply_filters(&records, &mut state).len(), 3);

        state.filters.bedrooms = Some(0);
        assert_eq!(apply_filters(&records, &mut state).len(), 3);

        state.filters.bedrooms = Some(3);
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["c"]);
    }

    #[test]
    fn amenities_require_all_requested() {
        let mut records = lagos_trio();
        records[0].amenities = ["WiFi".to_string()].into();
        records[1].amenities = ["WiFi".to_string(), "Pool".to_string(), "Gym".to_string()].into();

        let mut state = QueryState::default();
        state.filters.amenities = ["WiFi".to_string(), "Pool".to_string()].into();
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["b"]);
    }

    #[test]
    fn price_sorts_are_reverses_and_stable() {
        let records = vec![
            record("a", 300, "Lagos", 1),
            record("b", 100, "Lagos", 1),
            record("c", 200, "Lagos", 1),
            record("d", 100, "Lagos", 1),
        ];
        let mut state = QueryState {
            sort_by: SortBy::PriceAsc,
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["b", "d", "c", "a"]);

        state.sort_by = SortBy::PriceDesc;
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["a", "c", "b", "d"]);
    }

    #[test]
    fn rating_sorts_descending() {
        let mut records = lagos_trio();
        records[0].rating = 4.8;
        records[1].rating = 3.9;
        records[2].rating = 4.8;

        let mut state = QueryState {
            sort_by: SortBy::Rating,
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["a", "c", "b"]);
    }

    #[test]
    fn applying_filters_resets_page() {
        let records = lagos_trio();
        let mut state = QueryState {
            current_page: 4,
            ..Default::default()
        };
        apply_filters(&records, &mut state);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn reset_restores_identity_and_keeps_sort() {
        let records = lagos_trio();
        let mut state = QueryState {
            search_query: "nothing matches this".to_string(),
            sort_by: SortBy::PriceAsc,
            current_page: 3,
            ..Default::default()
        };
        state.filters.bedrooms = Some(9);
        state.filters.location = "Kano".to_string();
        assert!(apply_filters(&records, &mut state).is_empty());

        reset_filters(&mut state);
        assert_eq!(state.sort_by, SortBy::PriceAsc);
        assert_eq!(state.filters, Filters::default());
        assert!(state.search_query.is_empty());
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["a", "b", "c"]);

        reset_filters(&mut state);
        assert_eq!(ids(&apply_filters(&records, &mut state)), ["a", "b", "c"]);
    }

    #[test]
    fn records_are_left_untouched() {
        let records = lagos_trio();
        let before = records.clone();
        let mut state = QueryState {
            sort_by: SortBy::PriceDesc,
            ..Default::default()
        };
        apply_filters(&records, &mut state);
        assert_eq!(records, before);
    }
}
