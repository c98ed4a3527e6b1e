use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Category of a rental listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Apartment,
    SelfContain,
    Duplex,
    ShortLet,
    Studio,
    Bungalow,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Apartment,
        PropertyType::SelfContain,
        PropertyType::Duplex,
        PropertyType::ShortLet,
        PropertyType::Studio,
        PropertyType::Bungalow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::SelfContain => "self-contain",
            PropertyType::Duplex => "duplex",
            PropertyType::ShortLet => "short-let",
            PropertyType::Studio => "studio",
            PropertyType::Bungalow => "bungalow",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("unknown property type: {s}"))
    }
}

/// Whether a listing can currently be booked
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Reserved,
    Rented,
}

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    /// `[latitude, longitude]`
    pub coordinates: [f64; 2],
}

/// Core listing data model. Never mutated by the query engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: u64,
    pub location: Location,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub availability: Availability,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_type_parses_loose_spellings() {
        assert_eq!("Self Contain".parse::<PropertyType>(), Ok(PropertyType::SelfContain));
        assert_eq!("short_let".parse::<PropertyType>(), Ok(PropertyType::ShortLet));
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn record_decodes_front_end_json() {
        let value = json!({
            "id": "p1",
            "title": "Modern Apartment in Ikeja",
            "description": "Two bedroom flat",
            "price": 750000,
            "location": {
                "address": "12 Allen Avenue",
                "city": "Lagos",
                "state": "Lagos",
                "coordinates": [6.6018, 3.3515]
            },
            "type": "self-contain",
            "bedrooms": 2,
            "bathrooms": 1,
            "amenities": ["WiFi", "Pool", "WiFi"],
            "rating": 4.5,
            "availability": "reserved",
            "createdAt": "2024-03-01T10:00:00Z"
        });

        let record: PropertyRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.property_type, PropertyType::SelfContain);
        assert_eq!(record.availability, Availability::Reserved);
        assert_eq!(record.amenities.len(), 2);
        assert_eq!(record.location.coordinates, [6.6018, 3.3515]);
    }
}
