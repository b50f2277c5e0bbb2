use crate::models::Property;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Text columns a predicate can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
    StreetAddress,
    Country,
    City,
    AdvertType,
    PropertyType,
}

impl TextField {
    fn read(self, property: &Property) -> &str {
        match self {
            TextField::Title => &property.title,
            TextField::Description => &property.description,
            TextField::StreetAddress => &property.street_address,
            TextField::Country => &property.country,
            TextField::City => &property.city,
            TextField::AdvertType => property.advert_type.label(),
            TextField::PropertyType => property.property_type.label(),
        }
    }
}

/// Integer columns a predicate can address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    Bedrooms,
    Bathrooms,
}

impl CountField {
    fn read(self, property: &Property) -> u32 {
        match self {
            CountField::Bedrooms => property.number_of_bedrooms,
            CountField::Bathrooms => property.number_of_bathrooms,
        }
    }
}

/// Resolved constraint on a count column. Both range ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountBucket {
    Exactly(u32),
    Between(u32, u32),
    AtLeast(u32),
}

impl CountBucket {
    pub fn contains(self, value: u32) -> bool {
        match self {
            CountBucket::Exactly(n) => value == n,
            CountBucket::Between(lo, hi) => (lo..=hi).contains(&value),
            CountBucket::AtLeast(lo) => value >= lo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Lt,
    Lte,
    Gt,
}

impl Comparison {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Comparison::Eq => ordering == Ordering::Equal,
            Comparison::Lt => ordering == Ordering::Less,
            Comparison::Lte => ordering != Ordering::Greater,
            Comparison::Gt => ordering == Ordering::Greater,
        }
    }
}

/// A single filter over the property collection
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Published(bool),
    Owner(String),
    /// Case-insensitive equality
    TextIExact(TextField, String),
    /// Case-insensitive substring match in any of the fields
    AnyContains(Vec<TextField>, String),
    Price(Comparison, Decimal),
    Count(CountField, CountBucket),
}

impl Predicate {
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            Predicate::Published(status) => property.published_status == *status,
            Predicate::Owner(user) => property.user == *user,
            Predicate::TextIExact(field, value) => {
                field.read(property).to_lowercase() == value.to_lowercase()
            }
            Predicate::AnyContains(fields, needle) => {
                let needle = needle.to_lowercase();
                fields
                    .iter()
                    .any(|field| field.read(property).to_lowercase().contains(&needle))
            }
            Predicate::Price(comparison, bound) => comparison.holds(property.price.cmp(bound)),
            Predicate::Count(field, bucket) => bucket.contains(field.read(property)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Storage order
    #[default]
    Unordered,
    CreatedAsc,
    CreatedDesc,
}

/// Conjunction of predicates plus an optional ordering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyQuery {
    pub predicates: Vec<Predicate>,
    pub order: SortOrder,
}

impl PropertyQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only listings visible to the public
    pub fn published() -> Self {
        Self::new().filter(Predicate::Published(true))
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn order_by(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.predicates.iter().all(|p| p.matches(property))
    }

    /// Apply ordering in place to an already filtered set
    pub fn sort(&self, properties: &mut [Property]) {
        match self.order {
            SortOrder::Unordered => {}
            SortOrder::CreatedAsc => properties.sort_by_key(|p| p.created_at),
            SortOrder::CreatedDesc => {
                properties.sort_by(|a, b| b.created_at.cmp(&a.created_at))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdvertType, PropertyType};
    use crate::test_support::PropertyBuilder;

    #[test]
    fn count_buckets_are_inclusive() {
        let range = CountBucket::Between(3, 5);
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(6));

        assert!(CountBucket::AtLeast(20).contains(20));
        assert!(CountBucket::AtLeast(20).contains(500));
        assert!(!CountBucket::AtLeast(20).contains(19));

        assert!(CountBucket::Exactly(0).contains(0));
        assert!(!CountBucket::Exactly(0).contains(1));
    }

    #[test]
    fn iexact_ignores_case_but_not_substrings() {
        let property = PropertyBuilder::new("Flat")
            .kind(PropertyType::Apartment, AdvertType::ForRent)
            .build();

        assert!(Predicate::TextIExact(TextField::AdvertType, "for RENT".into()).matches(&property));
        assert!(!Predicate::TextIExact(TextField::AdvertType, "rent".into()).matches(&property));
        assert!(
            Predicate::TextIExact(TextField::PropertyType, "APARTMENT".into()).matches(&property)
        );
    }

    #[test]
    fn any_contains_is_disjunctive() {
        let property = PropertyBuilder::new("Plain Flat")
            .street_address("12 Villa Road")
            .build();

        let fields = vec![TextField::Title, TextField::Description, TextField::StreetAddress];
        assert!(Predicate::AnyContains(fields.clone(), "VILLA".into()).matches(&property));
        assert!(!Predicate::AnyContains(fields, "castle".into()).matches(&property));
    }

    #[test]
    fn price_comparisons() {
        let property = PropertyBuilder::new("Priced").price(100_000).build();
        let bound = Decimal::from(100_000);

        assert!(Predicate::Price(Comparison::Lte, bound).matches(&property));
        assert!(Predicate::Price(Comparison::Eq, bound).matches(&property));
        assert!(!Predicate::Price(Comparison::Lt, bound).matches(&property));
        assert!(!Predicate::Price(Comparison::Gt, bound).matches(&property));
    }

    #[test]
    fn query_is_a_conjunction() {
        let property = PropertyBuilder::new("Both").bedrooms(2).published(true).build();

        let query = PropertyQuery::published()
            .filter(Predicate::Count(CountField::Bedrooms, CountBucket::Between(1, 2)));
        assert!(query.matches(&property));

        let query = query.filter(Predicate::Count(CountField::Bathrooms, CountBucket::Exactly(9)));
        assert!(!query.matches(&property));
    }
}
