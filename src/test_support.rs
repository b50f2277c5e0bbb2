//! Fixtures shared by unit tests.

use crate::models::{AdvertType, NewProperty, Profile, Property, PropertyType};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Builder for stored properties with sensible defaults
pub struct PropertyBuilder {
    property: Property,
}

impl PropertyBuilder {
    pub fn new(title: &str) -> Self {
        let now = Utc::now();
        Self {
            property: Property {
                id: Uuid::new_v4(),
                user: "asha".to_string(),
                title: title.to_string(),
                slug: crate::utils::slugify(title),
                ref_code: crate::utils::generate_ref_code(),
                description: "A listing.".to_string(),
                country: "India".to_string(),
                city: "Pune".to_string(),
                postal_code: "411045".to_string(),
                street_address: "1 Main Street".to_string(),
                property_number: 1,
                price: Decimal::from(1_000_000),
                tax: Decimal::new(5, 2),
                plot_area: Decimal::from(120),
                number_of_floors: 1,
                number_of_bedrooms: 2,
                number_of_bathrooms: 1,
                property_type: PropertyType::House,
                advert_type: AdvertType::ForSale,
                cover_image: None,
                image1: None,
                image2: None,
                image3: None,
                image4: None,
                published_status: false,
                views: 0,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn owner(mut self, user: &str) -> Self {
        self.property.user = user.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.property.description = description.to_string();
        self
    }

    pub fn street_address(mut self, street_address: &str) -> Self {
        self.property.street_address = street_address.to_string();
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.property.city = city.to_string();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.property.price = Decimal::from(price);
        self
    }

    pub fn bedrooms(mut self, count: u32) -> Self {
        self.property.number_of_bedrooms = count;
        self
    }

    pub fn bathrooms(mut self, count: u32) -> Self {
        self.property.number_of_bathrooms = count;
        self
    }

    pub fn kind(mut self, property_type: PropertyType, advert_type: AdvertType) -> Self {
        self.property.property_type = property_type;
        self.property.advert_type = advert_type;
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.property.published_status = published;
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.property.created_at = Utc::now() - Duration::days(days);
        self
    }

    pub fn build(self) -> Property {
        self.property
    }
}

/// Minimal creation payload
pub fn new_property(title: &str) -> NewProperty {
    NewProperty {
        title: title.to_string(),
        description: "Default description...".to_string(),
        country: "India".to_string(),
        city: "Pune".to_string(),
        postal_code: "411045".to_string(),
        street_address: "1 Main Street".to_string(),
        property_number: 1,
        price: Decimal::from(2_500_000),
        tax: Decimal::new(5, 2),
        plot_area: Decimal::ZERO,
        number_of_floors: 0,
        number_of_bedrooms: 3,
        number_of_bathrooms: 2,
        property_type: PropertyType::Apartment,
        advert_type: AdvertType::ForSale,
        cover_image: None,
        image1: None,
        image2: None,
        image3: None,
        image4: None,
        published_status: true,
    }
}

pub fn profile(username: &str, is_agent: bool) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        username: username.to_string(),
        first_name: String::new(),
        last_name: String::new(),
        email: format!("{username}@example.com"),
        phone_number: "+919876543210".to_string(),
        about: String::new(),
        license: None,
        profile_pic: "/profile_pic_default.png".to_string(),
        gender: Default::default(),
        country: "IN".to_string(),
        city: "Pune".to_string(),
        is_buyer: false,
        is_seller: false,
        is_agent,
        is_top_agent: false,
        rating: None,
        num_reviews: 0,
        created_at: now,
        updated_at: now,
    }
}

/// Published fixture set covering every bucket boundary
#[rustfmt::skip]
pub fn search_fixtures() -> Vec<Property> {
    use AdvertType::*;
    use PropertyType::*;

    vec![
        PropertyBuilder::new("Studio Loft").price(90_000).bedrooms(0).bathrooms(0)
            .kind(Apartment, ForRent).published(true).build(),
        PropertyBuilder::new("Budget Flat").price(100_000).bedrooms(1).bathrooms(1)
            .kind(Apartment, ForSale).published(true).build(),
        PropertyBuilder::new("Family Home").price(4_500_000).bedrooms(3).bathrooms(2)
            .kind(House, ForRent).published(true).build(),
        PropertyBuilder::new("Sea View Villa").price(45_000_000).bedrooms(6).bathrooms(5)
            .description("Quiet and breezy").kind(House, ForSale).published(true).build(),
        PropertyBuilder::new("Hillside Bungalow").price(9_000_000).bedrooms(5).bathrooms(3)
            .description("A VILLA-style retreat").kind(House, ForRent).published(true).build(),
        PropertyBuilder::new("Corner Office").price(20_000_000).bedrooms(0).bathrooms(2)
            .street_address("7 Villa Road").kind(Office, ForRent).published(true).build(),
        PropertyBuilder::new("Grand Hostel").price(800_000_000).bedrooms(20).bathrooms(10)
            .kind(Commercial, ForAuction).published(true).build(),
        PropertyBuilder::new("Guest House").price(600_000_000).bedrooms(19).bathrooms(9)
            .kind(Commercial, ForSale).published(true).build(),
        PropertyBuilder::new("Palace Estate").price(2_000_000_000).bedrooms(40).bathrooms(25)
            .kind(House, ForAuction).published(true).build(),
        PropertyBuilder::new("Hidden Villa").price(50_000).bedrooms(0).bathrooms(1)
            .kind(House, ForRent).published(false).build(),
    ]
}
