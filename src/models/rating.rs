use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest and highest accepted score: 1=Poor, 2=Fair, 3=Good, 4=Very Good, 5=Excellent
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// A user's review of an agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: Uuid,
    /// Username of the reviewer
    pub rater: String,
    /// Profile id of the reviewed agent
    pub agent: Uuid,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRating {
    /// Raw score; the store checks the range
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

/// Human label for a score, if it is in range
pub fn score_label(score: u8) -> Option<&'static str> {
    match score {
        1 => Some("Poor"),
        2 => Some("Fair"),
        3 => Some("Good"),
        4 => Some("Very Good"),
        5 => Some("Excellent"),
        _ => None,
    }
}
