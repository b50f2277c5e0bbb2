use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::not_blank;

/// Contact request sent through the site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enquiry {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEnquiry {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl NewEnquiry {
    pub fn into_enquiry(self, now: DateTime<Utc>) -> Enquiry {
        Enquiry {
            id: Uuid::new_v4(),
            name: self.name,
            phone_number: self.phone_number,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at: now,
        }
    }
}
