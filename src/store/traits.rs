use crate::models::{
    Enquiry, NewProperty, NewRating, Profile, ProfileUpdate, Property, PropertyUpdate,
    PropertyView, Rating,
};
use crate::store::query::PropertyQuery;
use crate::store::StoreResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Outcome of recording a page view
#[derive(Debug, Clone)]
pub struct ViewOutcome {
    pub property: Property,
    /// False when this IP had already viewed the listing
    pub counted: bool,
}

/// Persistence for listings and their view records
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Every property satisfying the query
    async fn find_properties(&self, query: &PropertyQuery) -> StoreResult<Vec<Property>>;

    async fn property_by_slug(&self, slug: &str) -> StoreResult<Property>;

    /// Insert a listing, assigning its slug and reference code
    async fn create_property(&self, user: &str, new: NewProperty) -> StoreResult<Property>;

    async fn update_property(&self, slug: &str, update: PropertyUpdate) -> StoreResult<Property>;

    /// Remove a listing together with its view records
    async fn delete_property(&self, slug: &str) -> StoreResult<()>;

    /// Count a view once per (property, viewer_ip)
    async fn record_view(&self, slug: &str, viewer_ip: &str) -> StoreResult<ViewOutcome>;

    async fn list_views(&self) -> StoreResult<Vec<PropertyView>>;
}

/// Persistence for users' profiles, agent ratings and enquiries
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn profile_by_username(&self, username: &str) -> StoreResult<Profile>;

    async fn profile_by_id(&self, id: Uuid) -> StoreResult<Profile>;

    async fn update_profile(&self, username: &str, update: ProfileUpdate) -> StoreResult<Profile>;

    /// Agents, optionally restricted to top agents
    async fn list_agents(&self, top_only: bool) -> StoreResult<Vec<Profile>>;

    /// Store a rating and refresh the agent's average and review count
    async fn add_rating(&self, rater: &str, agent: Uuid, new: NewRating) -> StoreResult<Rating>;

    async fn add_enquiry(&self, enquiry: Enquiry) -> StoreResult<Enquiry>;

    async fn list_enquiries(&self) -> StoreResult<Vec<Enquiry>>;
}
