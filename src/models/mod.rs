pub mod enquiry;
pub mod profile;
pub mod rating;

pub use enquiry::{Enquiry, NewEnquiry};
pub use profile::{Profile, ProfileUpdate};
pub use rating::{NewRating, Rating};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// 12 digits with 2 after the point
const MAX_PRICE: i64 = 10_000_000_000;

/// Kind of building being advertised
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PropertyType {
    House,
    Apartment,
    Office,
    Warehouse,
    Commercial,
    #[default]
    Other,
}

impl PropertyType {
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Office => "Office",
            PropertyType::Warehouse => "Warehouse",
            PropertyType::Commercial => "Commercial",
            PropertyType::Other => "Other",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the property is being offered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AdvertType {
    #[default]
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "For Auction")]
    ForAuction,
}

impl AdvertType {
    pub fn label(self) -> &'static str {
        match self {
            AdvertType::ForSale => "For Sale",
            AdvertType::ForRent => "For Rent",
            AdvertType::ForAuction => "For Auction",
        }
    }
}

impl fmt::Display for AdvertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: Uuid,
    /// Username of the agent, seller or buyer who listed it
    pub user: String,
    pub title: String,
    pub slug: String,
    pub ref_code: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub street_address: String,
    pub property_number: u32,
    pub price: Decimal,
    /// Fraction of the price, e.g. 0.05
    pub tax: Decimal,
    pub plot_area: Decimal,
    pub number_of_floors: u32,
    pub number_of_bedrooms: u32,
    pub number_of_bathrooms: u32,
    pub property_type: PropertyType,
    pub advert_type: AdvertType,
    pub cover_image: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub image4: Option<String>,
    pub published_status: bool,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Price including tax, both steps rounded to cents
    pub fn final_property_price(&self) -> Decimal {
        let tax_amount = (self.tax * self.price).round_dp(2);
        (self.price + tax_amount).round_dp(2)
    }

    /// Normalise text fields the way every save does
    pub fn normalize_text(&mut self) {
        self.title = title_case(&self.title);
        self.description = capitalize(&self.description);
    }
}

/// Wire representation of a listing
#[derive(Debug, Serialize)]
pub struct PropertyResponse {
    #[serde(flatten)]
    pub property: Property,
    pub final_property_price: Decimal,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        let final_property_price = property.final_property_price();
        Self {
            property,
            final_property_price,
        }
    }
}

/// Payload accepted when listing a new property
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProperty {
    #[validate(
        custom(function = "not_blank"),
        length(max = 250, message = "Ensure this field has no more than 250 characters.")
    )]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    pub country: String,
    pub city: String,
    pub postal_code: String,
    pub street_address: String,
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub property_number: u32,
    #[validate(custom(function = "valid_price"))]
    pub price: Decimal,
    #[serde(default = "default_tax")]
    #[validate(custom(function = "valid_tax"))]
    pub tax: Decimal,
    #[serde(default)]
    pub plot_area: Decimal,
    #[serde(default)]
    pub number_of_floors: u32,
    #[serde(default)]
    pub number_of_bedrooms: u32,
    #[serde(default)]
    pub number_of_bathrooms: u32,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub advert_type: AdvertType,
    #[serde(default = "default_cover_image")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub image1: Option<String>,
    #[serde(default)]
    pub image2: Option<String>,
    #[serde(default)]
    pub image3: Option<String>,
    #[serde(default)]
    pub image4: Option<String>,
    #[serde(default)]
    pub published_status: bool,
}

impl NewProperty {
    /// Build the stored record; slug and ref_code are filled in by the store
    pub fn into_property(self, user: &str, now: DateTime<Utc>) -> Property {
        let mut property = Property {
            id: Uuid::new_v4(),
            user: user.to_string(),
            title: self.title,
            slug: String::new(),
            ref_code: String::new(),
            description: self.description,
            country: self.country,
            city: self.city,
            postal_code: self.postal_code,
            street_address: self.street_address,
            property_number: self.property_number,
            price: self.price,
            tax: self.tax,
            plot_area: self.plot_area,
            number_of_floors: self.number_of_floors,
            number_of_bedrooms: self.number_of_bedrooms,
            number_of_bathrooms: self.number_of_bathrooms,
            property_type: self.property_type,
            advert_type: self.advert_type,
            cover_image: self.cover_image,
            image1: self.image1,
            image2: self.image2,
            image3: self.image3,
            image4: self.image4,
            published_status: self.published_status,
            views: 0,
            created_at: now,
            updated_at: now,
        };
        property.normalize_text();
        property
    }
}

/// Partial update; omitted fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PropertyUpdate {
    #[validate(
        custom(function = "not_blank"),
        length(max = 250, message = "Ensure this field has no more than 250 characters.")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub street_address: Option<String>,
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub property_number: Option<u32>,
    #[validate(custom(function = "valid_price"))]
    pub price: Option<Decimal>,
    #[validate(custom(function = "valid_tax"))]
    pub tax: Option<Decimal>,
    pub plot_area: Option<Decimal>,
    pub number_of_floors: Option<u32>,
    pub number_of_bedrooms: Option<u32>,
    pub number_of_bathrooms: Option<u32>,
    pub property_type: Option<PropertyType>,
    pub advert_type: Option<AdvertType>,
    pub cover_image: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub image4: Option<String>,
    pub published_status: Option<bool>,
}

impl PropertyUpdate {
    /// Merge into an existing record. Returns true when the title changed.
    pub fn apply(self, property: &mut Property) -> bool {
        let title_changed = self
            .title
            .as_ref()
            .is_some_and(|title| title_case(title) != property.title);

        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field { property.$field = value; })*
            };
        }
        merge!(
            title,
            description,
            country,
            city,
            postal_code,
            street_address,
            property_number,
            price,
            tax,
            plot_area,
            number_of_floors,
            number_of_bedrooms,
            number_of_bathrooms,
            property_type,
            advert_type,
            published_status,
        );
        macro_rules! merge_image {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field { property.$field = Some(value); })*
            };
        }
        merge_image!(cover_image, image1, image2, image3, image4);

        property.normalize_text();
        title_changed
    }
}

/// One distinct viewer of a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyView {
    pub id: Uuid,
    pub viewer_ip: String,
    pub property: Uuid,
    pub created_at: DateTime<Utc>,
}

fn default_description() -> String {
    "Default description...".to_string()
}

fn default_tax() -> Decimal {
    Decimal::new(5, 2)
}

fn default_cover_image() -> Option<String> {
    Some("/sample_property_cover_image.jpg".to_string())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("blank", "This field may not be blank."));
    }
    Ok(())
}

fn valid_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative()
        || *price >= Decimal::from(MAX_PRICE)
        || price.normalize().scale() > 2
    {
        return Err(invalid(
            "price",
            "Ensure a non-negative value with at most 12 digits and 2 decimal places.",
        ));
    }
    Ok(())
}

fn valid_tax(tax: &Decimal) -> Result<(), ValidationError> {
    if *tax < Decimal::ZERO || *tax > Decimal::ONE {
        return Err(invalid("tax", "Ensure a fraction between 0 and 1."));
    }
    Ok(())
}

/// Upper-case the first letter of every word, lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Upper-case the first character, lower-case everything after it
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
