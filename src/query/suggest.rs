//! Search-as-you-type suggestions.
//!
//! Each query term is scored against a handful of weighted fields. A
//! substring hit earns the field's full weight; failing that, a word within
//! one edit of the term earns half. Only terms of four or more characters
//! are matched fuzzily.

use crate::models::PropertyRecord;

/// Default number of suggestions shown under the search box
pub const SUGGESTION_LIMIT: usize = 8;

const TITLE_WEIGHT: f32 = 3.0;
const CITY_WEIGHT: f32 = 2.0;
const ADDRESS_WEIGHT: f32 = 2.0;
const TYPE_WEIGHT: f32 = 1.5;
const AMENITY_WEIGHT: f32 = 1.0;
const DESCRIPTION_WEIGHT: f32 = 1.0;

const FUZZY_MIN_TERM_LEN: usize = 4;
const FUZZY_MAX_DISTANCE: usize = 1;

/// A scored match
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'a> {
    pub record: &'a PropertyRecord,
    pub score: f32,
}

/// Best [`SUGGESTION_LIMIT`] records for `query`
pub fn suggest<'a>(records: &'a [PropertyRecord], query: &str) -> Vec<Suggestion<'a>> {
    suggest_with_limit(records, query, SUGGESTION_LIMIT)
}

/// Best `limit` records for `query`, highest score first; ties keep collection order.
pub fn suggest_with_limit<'a>(
    records: &'a [PropertyRecord],
    query: &str,
    limit: usize,
) -> Vec<Suggestion<'a>> {
    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();
    if terms.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<Suggestion<'a>> = records
        .iter()
        .map(|record| Suggestion {
            record,
            score: score_record(record, &terms),
        })
        .filter(|s| s.score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

fn score_record(record: &PropertyRecord, terms: &[&str]) -> f32 {
    let title = record.title.to_lowercase();
    let city = record.location.city.to_lowercase();
    let address = record.location.address.to_lowercase();
    let description = record.description.to_lowercase();
    let amenities = record
        .amenities
        .iter()
        .map(|a| a.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let property_type = record.property_type.as_str().replace('-', " ");

    let fields: [(&str, f32); 6] = [
        (title.as_str(), TITLE_WEIGHT),
        (city.as_str(), CITY_WEIGHT),
        (address.as_str(), ADDRESS_WEIGHT),
        (property_type.as_str(), TYPE_WEIGHT),
        (amenities.as_str(), AMENITY_WEIGHT),
        (description.as_str(), DESCRIPTION_WEIGHT),
    ];

    terms
        .iter()
        .map(|term| {
            fields
                .iter()
                .map(|(field, weight)| field_score(field, term, *weight))
                .sum::<f32>()
        })
        .sum()
}

fn field_score(field: &str, term: &str, weight: f32) -> f32 {
    if field.contains(term) {
        return weight;
    }
    let term_chars: Vec<char> = term.chars().collect();
    if term_chars.len() < FUZZY_MIN_TERM_LEN {
        return 0.0;
    }
    let close = field
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| bounded_levenshtein(word, &term_chars, FUZZY_MAX_DISTANCE) <= FUZZY_MAX_DISTANCE);
    if close {
        weight / 2.0
    } else {
        0.0
    }
}

/// Edit distance between `word` and `term`, giving up with `max + 1` once it is exceeded.
fn bounded_levenshtein(word: &str, term: &[char], max: usize) -> usize {
    let word: Vec<char> = word.chars().collect();
    if word.len().abs_diff(term.len()) > max {
        return max + 1;
    }

    let mut prev: Vec<usize> = (0..=term.len()).collect();
    let mut curr = vec![0; term.len() + 1];

    for (i, &c) in word.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for j in 1..=term.len() {
            let cost = usize::from(c != term[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            row_min = row_min.min(curr[j]);
        }
        if row_min > max {
            return max + 1;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[term.len()]
}
