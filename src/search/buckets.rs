//! Fixed label tables for the search form's dropdowns.
//!
//! Each lookup returns `None` for a label it does not know. Callers treat that
//! the same as "any": the filter is skipped rather than the request rejected.

use crate::store::CountBucket;
use rust_decimal::Decimal;

/// Price dropdown: label to inclusive ceiling in rupees
pub const PRICE_BUCKETS: &[(&str, i64)] = &[
    ("below₹1L", 100_000),
    ("below₹10L", 1_000_000),
    ("below₹50L", 5_000_000),
    ("below₹1Cr", 10_000_000),
    ("below₹10Cr", 100_000_000),
    ("below₹100Cr", 1_000_000_000),
];

pub const BEDROOM_BUCKETS: &[(&str, CountBucket)] = &[
    ("0", CountBucket::Exactly(0)),
    ("1-2", CountBucket::Between(1, 2)),
    ("3-5", CountBucket::Between(3, 5)),
    ("6-10", CountBucket::Between(6, 10)),
    ("10-20", CountBucket::Between(10, 20)),
    ("20+", CountBucket::AtLeast(20)),
];

pub const BATHROOM_BUCKETS: &[(&str, CountBucket)] = &[
    ("0", CountBucket::Exactly(0)),
    ("1-2", CountBucket::Between(1, 2)),
    ("3-5", CountBucket::Between(3, 5)),
    ("6-10", CountBucket::Between(6, 10)),
    ("10+", CountBucket::AtLeast(10)),
];

fn lookup<T: Copy>(table: &[(&str, T)], label: &str) -> Option<T> {
    table
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, value)| *value)
}

pub fn price_ceiling(label: &str) -> Option<Decimal> {
    lookup(PRICE_BUCKETS, label).map(Decimal::from)
}

pub fn bedroom_bucket(label: &str) -> Option<CountBucket> {
    lookup(BEDROOM_BUCKETS, label)
}

pub fn bathroom_bucket(label: &str) -> Option<CountBucket> {
    lookup(BATHROOM_BUCKETS, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_price_label_maps_to_its_ceiling() {
        let expected = [
            ("below₹1L", 100_000),
            ("below₹10L", 1_000_000),
            ("below₹50L", 5_000_000),
            ("below₹1Cr", 10_000_000),
            ("below₹10Cr", 100_000_000),
            ("below₹100Cr", 1_000_000_000),
        ];
        for (label, ceiling) in expected {
            assert_eq!(price_ceiling(label), Some(Decimal::from(ceiling)), "{label}");
        }
    }

    #[test]
    fn unknown_price_labels_are_unconstrained() {
        assert_eq!(price_ceiling("below₹5L"), None);
        assert_eq!(price_ceiling("any"), None);
        assert_eq!(price_ceiling("BELOW₹1L"), None);
        assert_eq!(price_ceiling("100000"), None);
    }

    #[test]
    fn zero_is_exact_not_any() {
        assert_eq!(bedroom_bucket("0"), Some(CountBucket::Exactly(0)));
        assert_eq!(bathroom_bucket("0"), Some(CountBucket::Exactly(0)));
        assert_eq!(bedroom_bucket("any"), None);
    }

    #[test]
    fn open_ended_buckets_only_set_a_floor() {
        assert_eq!(bedroom_bucket("20+"), Some(CountBucket::AtLeast(20)));
        assert_eq!(bathroom_bucket("10+"), Some(CountBucket::AtLeast(10)));
    }

    #[test]
    fn tables_differ_between_bedrooms_and_bathrooms() {
        assert_eq!(bedroom_bucket("10-20"), Some(CountBucket::Between(10, 20)));
        assert_eq!(bathroom_bucket("10-20"), None);
        assert_eq!(bedroom_bucket("10+"), None);
        assert_eq!(bathroom_bucket("20+"), None);
    }
}
