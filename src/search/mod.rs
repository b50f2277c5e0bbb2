pub mod buckets;
pub mod resolver;

pub use resolver::{search_properties, SearchRequest};
