use crate::models::Property;
use crate::search::buckets::{bathroom_bucket, bedroom_bucket, price_ceiling};
use crate::store::{
    Comparison, CountField, Predicate, PropertyQuery, PropertyStore, StoreResult, TextField,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

/// Label meaning "no constraint" on any search field
pub const ANY: &str = "any";

/// Fields matched by the free-text query
pub const QUERY_FIELDS: [TextField; 3] =
    [TextField::Title, TextField::Description, TextField::StreetAddress];

/// Search form payload. Every field is optional and loosely typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub advert_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub number_of_bedrooms: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub number_of_bathrooms: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub query: Option<String>,
}

impl SearchRequest {
    /// Parse a raw request body. A blank body or JSON `null` is an empty search;
    /// anything else must be a JSON object.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Ok(Self::default()),
            payload @ Value::Object(_) => Self::deserialize(payload),
            _ => Err(serde::de::Error::custom("expected a JSON object")),
        }
    }
}

/// Accept strings as-is and scalars by their text; anything else is absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// The supplied value, unless it is missing, empty or "any"
fn supplied(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .filter(|value| !value.is_empty() && *value != ANY)
}

/// Translate a search payload into a query over published listings.
///
/// Recognised criteria are combined with AND. Bucket labels that are not in
/// the fixed tables are skipped, so a typo widens the search instead of
/// failing it.
pub fn resolve(request: &SearchRequest) -> PropertyQuery {
    let mut query = PropertyQuery::published();

    if let Some(advert_type) = supplied(&request.advert_type) {
        query = query.filter(Predicate::TextIExact(
            TextField::AdvertType,
            advert_type.to_string(),
        ));
    }

    if let Some(property_type) = supplied(&request.property_type) {
        query = query.filter(Predicate::TextIExact(
            TextField::PropertyType,
            property_type.to_string(),
        ));
    }

    if let Some(label) = supplied(&request.price) {
        match price_ceiling(label) {
            Some(ceiling) => query = query.filter(Predicate::Price(Comparison::Lte, ceiling)),
            None => warn!(label, "Unrecognised price bucket, ignoring"),
        }
    }

    if let Some(label) = supplied(&request.number_of_bedrooms) {
        match bedroom_bucket(label) {
            Some(bucket) => query = query.filter(Predicate::Count(CountField::Bedrooms, bucket)),
            None => warn!(label, "Unrecognised bedroom bucket, ignoring"),
        }
    }

    if let Some(label) = supplied(&request.number_of_bathrooms) {
        match bathroom_bucket(label) {
            Some(bucket) => query = query.filter(Predicate::Count(CountField::Bathrooms, bucket)),
            None => warn!(label, "Unrecognised bathroom bucket, ignoring"),
        }
    }

    if let Some(text) = supplied(&request.query) {
        query = query.filter(Predicate::AnyContains(QUERY_FIELDS.to_vec(), text.to_string()));
    }

    query
}

/// Resolve the payload and run it against the store
pub async fn search_properties<S>(store: &S, request: &SearchRequest) -> StoreResult<Vec<Property>>
where
    S: PropertyStore + ?Sized,
{
    let query = resolve(request);
    debug!("Resolved search into {} predicates", query.predicates.len());
    store.find_properties(&query).await
}
