use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

/// Public profile of a user of the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_phone_number")]
    pub phone_number: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default = "default_profile_pic")]
    pub profile_pic: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub is_buyer: bool,
    #[serde(default)]
    pub is_seller: bool,
    #[serde(default)]
    pub is_agent: bool,
    #[serde(default)]
    pub is_top_agent: bool,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub num_reviews: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Fields a user may change on their own profile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub about: Option<String>,
    pub license: Option<String>,
    pub profile_pic: Option<String>,
    pub gender: Option<Gender>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub is_buyer: Option<bool>,
    pub is_seller: Option<bool>,
    pub is_agent: Option<bool>,
}

impl ProfileUpdate {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(first_name) = self.first_name {
            profile.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            profile.last_name = last_name;
        }
        if let Some(phone_number) = self.phone_number {
            profile.phone_number = phone_number;
        }
        if let Some(about) = self.about {
            profile.about = about;
        }
        if let Some(license) = self.license {
            profile.license = Some(license);
        }
        if let Some(profile_pic) = self.profile_pic {
            profile.profile_pic = profile_pic;
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        if let Some(country) = self.country {
            profile.country = country;
        }
        if let Some(city) = self.city {
            profile.city = city;
        }
        if let Some(is_buyer) = self.is_buyer {
            profile.is_buyer = is_buyer;
        }
        if let Some(is_seller) = self.is_seller {
            profile.is_seller = is_seller;
        }
        if let Some(is_agent) = self.is_agent {
            profile.is_agent = is_agent;
        }
    }
}

fn default_phone_number() -> String {
    "+919876543210".to_string()
}

fn default_profile_pic() -> String {
    "/profile_pic_default.png".to_string()
}

fn default_country() -> String {
    "IN".to_string()
}
