use crate::models::{Availability, Location, PropertyRecord, PropertyType};
use crate::sources::traits::RecordSource;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

/// Built-in sample listings, used when no data file or endpoint is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSource;

#[async_trait]
impl RecordSource for MockSource {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        info!("📋 Using built-in sample listings");
        Ok(sample_records())
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}

struct Sample {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: u64,
    address: &'static str,
    city: &'static str,
    state: &'static str,
    coordinates: [f64; 2],
    property_type: PropertyType,
    bedrooms: u32,
    bathrooms: u32,
    amenities: &'static [&'static str],
    rating: f32,
    availability: Availability,
    days_listed: i64,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "lagos-ikeja-1",
        title: "Modern Apartment in Ikeja",
        description: "Serviced two bedroom flat close to the airport and Computer Village.",
        price: 750_000,
        address: "12 Allen Avenue",
        city: "Lagos",
        state: "Lagos",
        coordinates: [6.6018, 3.3515],
        property_type: PropertyType::Apartment,
        bedrooms: 2,
        bathrooms: 2,
        amenities: &["WiFi", "Parking", "Security", "Generator"],
        rating: 4.6,
        availability: Availability::Available,
        days_listed: 3,
    },
    Sample {
        id: "lagos-lekki-1",
        title: "Luxury Duplex in Lekki Phase 1",
        description: "Four bedroom detached duplex with BQ, pool and 24 hour power.",
        price: 6_500_000,
        address: "7 Admiralty Way, Lekki Phase 1",
        city: "Lagos",
        state: "Lagos",
        coordinates: [6.4474, 3.4723],
        property_type: PropertyType::Duplex,
        bedrooms: 4,
        bathrooms: 5,
        amenities: &["WiFi", "Pool", "Parking", "Security", "Gym", "Generator"],
        rating: 4.9,
        availability: Availability::Available,
        days_listed: 10,
    },
    Sample {
        id: "lagos-yaba-1",
        title: "Self Contain near UNILAG",
        description: "Compact self contain for students, water and prepaid meter included.",
        price: 350_000,
        address: "4 Akoka Road, Yaba",
        city: "Lagos",
        state: "Lagos",
        coordinates: [6.5158, 3.3898],
        property_type: PropertyType::SelfContain,
        bedrooms: 1,
        bathrooms: 1,
        amenities: &["Water", "Prepaid Meter"],
        rating: 3.8,
        availability: Availability::Rented,
        days_listed: 25,
    },
    Sample {
        id: "lagos-vi-1",
        title: "Short Let Studio in Victoria Island",
        description: "Fully furnished studio for short stays, cleaning twice a week.",
        price: 1_200_000,
        address: "22 Ajose Adeogun Street",
        city: "Lagos",
        state: "Lagos",
        coordinates: [6.4281, 3.4219],
        property_type: PropertyType::ShortLet,
        bedrooms: 1,
        bathrooms: 1,
        amenities: &["WiFi", "Air Conditioning", "Security"],
        rating: 4.4,
        availability: Availability::Reserved,
        days_listed: 1,
    },
    Sample {
        id: "lagos-surulere-1",
        title: "Family Bungalow in Surulere",
        description: "Three bedroom bungalow with a large compound in a quiet close.",
        price: 1_500_000,
        address: "9 Adeniran Ogunsanya Street",
        city: "Lagos",
        state: "Lagos",
        coordinates: [6.4969, 3.3553],
        property_type: PropertyType::Bungalow,
        bedrooms: 3,
        bathrooms: 2,
        amenities: &["Parking", "Water"],
        rating: 4.1,
        availability: Availability::Available,
        days_listed: 40,
    },
    Sample {
        id: "abuja-wuse-1",
        title: "Studio Apartment in Wuse 2",
        description: "Neat studio within walking distance of Banex Plaza.",
        price: 900_000,
        address: "15 Aminu Kano Crescent",
        city: "Abuja",
        state: "FCT",
        coordinates: [9.0765, 7.4717],
        property_type: PropertyType::Studio,
        bedrooms: 1,
        bathrooms: 1,
        amenities: &["WiFi", "Security", "Air Conditioning"],
        rating: 4.2,
        availability: Availability::Available,
        days_listed: 7,
    },
    Sample {
        id: "abuja-maitama-1",
        title: "Executive Duplex in Maitama",
        description: "Five bedroom duplex with staff quarters, gym and pool.",
        price: 9_500_000,
        address: "3 Gana Street",
        city: "Abuja",
        state: "FCT",
        coordinates: [9.0882, 7.4934],
        property_type: PropertyType::Duplex,
        bedrooms: 5,
        bathrooms: 6,
        amenities: &["Pool", "Gym", "Security", "Generator", "Parking"],
        rating: 4.8,
        availability: Availability::Available,
        days_listed: 14,
    },
    Sample {
        id: "ibadan-bodija-1",
        title: "Spacious Apartment in Bodija",
        description: "Three bedroom flat on the first floor, close to the market.",
        price: 600_000,
        address: "18 Awolowo Avenue, Bodija",
        city: "Ibadan",
        state: "Oyo",
        coordinates: [7.4352, 3.9133],
        property_type: PropertyType::Apartment,
        bedrooms: 3,
        bathrooms: 2,
        amenities: &["Parking", "Water", "Security"],
        rating: 3.9,
        availability: Availability::Available,
        days_listed: 30,
    },
    Sample {
        id: "lagos-lekki-2",
        title: "Cosy Self Contain in Lekki",
        description: "Newly built self contain off Chevron Drive with fitted kitchen.",
        price: 850_000,
        address: "5 Orchid Road, Lekki",
        city: "Lagos",
        state: "Lagos",
        coordinates: [6.4310, 3.5370],
        property_type: PropertyType::SelfContain,
        bedrooms: 1,
        bathrooms: 1,
        amenities: &["Water", "Security", "Prepaid Meter"],
        rating: 4.0,
        availability: Availability::Available,
        days_listed: 5,
    },
];

/// Sample listings in a fixed collection order
pub fn sample_records() -> Vec<PropertyRecord> {
    let now = Utc::now();
    SAMPLES
        .iter()
        .map(|s| PropertyRecord {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            price: s.price,
            location: Location {
                address: s.address.to_string(),
                city: s.city.to_string(),
                state: s.state.to_string(),
                coordinates: s.coordinates,
            },
            property_type: s.property_type,
            bedrooms: s.bedrooms,
            bathrooms: s.bathrooms,
            amenities: s.amenities.iter().map(|a| a.to_string()).collect(),
            rating: s.rating,
            availability: s.availability,
            created_at: now - Duration::days(s.days_listed),
        })
        .collect()
}
