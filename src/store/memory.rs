use crate::models::{
    rating::{score_label, MAX_SCORE, MIN_SCORE},
    Enquiry, NewProperty, NewRating, Profile, ProfileUpdate, Property, PropertyUpdate,
    PropertyView, Rating,
};
use crate::store::{
    AccountStore, PropertyQuery, PropertyStore, SeedData, StoreError, StoreResult, ViewOutcome,
};
use crate::utils::{generate_ref_code, slugify, unique_slug};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    properties: Vec<Property>,
    views: Vec<PropertyView>,
    profiles: Vec<Profile>,
    ratings: Vec<Rating>,
    enquiries: Vec<Enquiry>,
}

impl Tables {
    fn slug_taken(&self, slug: &str, except: Option<Uuid>) -> bool {
        self.properties
            .iter()
            .any(|p| p.slug == slug && Some(p.id) != except)
    }

    fn fresh_ref_code(&self) -> String {
        loop {
            let code = generate_ref_code();
            if !self.properties.iter().any(|p| p.ref_code == code) {
                return code;
            }
        }
    }

    fn property_index(&self, slug: &str) -> StoreResult<usize> {
        self.properties
            .iter()
            .position(|p| p.slug == slug)
            .ok_or(StoreError::NotFound("Property"))
    }

    fn profile_index(&self, username: &str) -> StoreResult<usize> {
        self.profiles
            .iter()
            .position(|p| p.username == username)
            .ok_or(StoreError::NotFound("Profile"))
    }
}

/// In-process store; every table sits behind one lock
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Build a store from seed data, keeping seeded ids, slugs and codes
    pub fn with_seed(seed: SeedData) -> Self {
        info!(
            "Seeding store with {} profiles and {} properties",
            seed.profiles.len(),
            seed.properties.len()
        );
        Self {
            tables: RwLock::new(Tables {
                properties: seed.properties,
                profiles: seed.profiles,
                ..Default::default()
            }),
        }
    }
}

#[async_trait]
impl PropertyStore for MemoryStore {
    async fn find_properties(&self, query: &PropertyQuery) -> StoreResult<Vec<Property>> {
        let tables = self.tables.read().await;
        let mut found: Vec<Property> = tables
            .properties
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect();
        query.sort(&mut found);

        debug!("Query matched {} of {} properties", found.len(), tables.properties.len());
        Ok(found)
    }

    async fn property_by_slug(&self, slug: &str) -> StoreResult<Property> {
        let tables = self.tables.read().await;
        let index = tables.property_index(slug)?;
        Ok(tables.properties[index].clone())
    }

    async fn create_property(&self, user: &str, new: NewProperty) -> StoreResult<Property> {
        let mut tables = self.tables.write().await;
        let mut property = new.into_property(user, Utc::now());

        property.slug = unique_slug(&slugify(&property.title), |s| tables.slug_taken(s, None));
        property.ref_code = tables.fresh_ref_code();

        tables.properties.push(property.clone());
        Ok(property)
    }

    async fn update_property(&self, slug: &str, update: PropertyUpdate) -> StoreResult<Property> {
        let mut tables = self.tables.write().await;
        let index = tables.property_index(slug)?;

        let mut property = tables.properties[index].clone();
        let id = property.id;
        if update.apply(&mut property) {
            property.slug = unique_slug(&slugify(&property.title), |s| tables.slug_taken(s, Some(id)));
        }
        property.ref_code = tables.fresh_ref_code();
        property.updated_at = Utc::now();

        tables.properties[index] = property.clone();
        Ok(property)
    }

    async fn delete_property(&self, slug: &str) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let index = tables.property_index(slug)?;

        let removed = tables.properties.remove(index);
        tables.views.retain(|v| v.property != removed.id);
        Ok(())
    }

    async fn record_view(&self, slug: &str, viewer_ip: &str) -> StoreResult<ViewOutcome> {
        let mut tables = self.tables.write().await;
        let index = tables.property_index(slug)?;
        let property_id = tables.properties[index].id;

        let seen = tables
            .views
            .iter()
            .any(|v| v.property == property_id && v.viewer_ip == viewer_ip);

        if !seen {
            tables.views.push(PropertyView {
                id: Uuid::new_v4(),
                viewer_ip: viewer_ip.to_string(),
                property: property_id,
                created_at: Utc::now(),
            });
            tables.properties[index].views += 1;
        }

        Ok(ViewOutcome {
            property: tables.properties[index].clone(),
            counted: !seen,
        })
    }

    async fn list_views(&self) -> StoreResult<Vec<PropertyView>> {
        Ok(self.tables.read().await.views.clone())
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn profile_by_username(&self, username: &str) -> StoreResult<Profile> {
        let tables = self.tables.read().await;
        let index = tables.profile_index(username)?;
        Ok(tables.profiles[index].clone())
    }

    async fn profile_by_id(&self, id: Uuid) -> StoreResult<Profile> {
        self.tables
            .read()
            .await
            .profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("Profile"))
    }

    async fn update_profile(&self, username: &str, update: ProfileUpdate) -> StoreResult<Profile> {
        let mut tables = self.tables.write().await;
        let index = tables.profile_index(username)?;

        let profile = &mut tables.profiles[index];
        update.apply(profile);
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }

    async fn list_agents(&self, top_only: bool) -> StoreResult<Vec<Profile>> {
        Ok(self
            .tables
            .read()
            .await
            .profiles
            .iter()
            .filter(|p| if top_only { p.is_top_agent } else { p.is_agent })
            .cloned()
            .collect())
    }

    async fn add_rating(&self, rater: &str, agent: Uuid, new: NewRating) -> StoreResult<Rating> {
        let mut tables = self.tables.write().await;
        let index = tables
            .profiles
            .iter()
            .position(|p| p.id == agent)
            .ok_or(StoreError::NotFound("Profile"))?;

        if tables.ratings.iter().any(|r| r.rater == rater && r.agent == agent) {
            return Err(StoreError::Conflict("Profile already reviewed".to_string()));
        }
        if new.rating == 0 {
            return Err(StoreError::Conflict("Please select a rating".to_string()));
        }
        let score = u8::try_from(new.rating)
            .ok()
            .filter(|score| (MIN_SCORE..=MAX_SCORE).contains(score))
            .ok_or_else(|| {
                StoreError::Conflict(format!("Rating must be between {MIN_SCORE} and {MAX_SCORE}"))
            })?;

        let rating = Rating {
            id: Uuid::new_v4(),
            rater: rater.to_string(),
            agent,
            rating: score,
            comment: new.comment,
            created_at: Utc::now(),
        };
        tables.ratings.push(rating.clone());

        let scores: Vec<u8> = tables
            .ratings
            .iter()
            .filter(|r| r.agent == agent)
            .map(|r| r.rating)
            .collect();
        let total: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        let count = scores.len() as u32;

        let profile = &mut tables.profiles[index];
        profile.num_reviews = count;
        profile.rating = Some((Decimal::from(total) / Decimal::from(count)).round_dp(2));
        profile.updated_at = Utc::now();

        info!(
            "{} rated {} as {} ({} reviews)",
            rater,
            profile.username,
            score_label(rating.rating).unwrap_or("?"),
            count
        );

        Ok(rating)
    }

    async fn add_enquiry(&self, enquiry: Enquiry) -> StoreResult<Enquiry> {
        self.tables.write().await.enquiries.push(enquiry.clone());
        Ok(enquiry)
    }

    async fn list_enquiries(&self) -> StoreResult<Vec<Enquiry>> {
        Ok(self.tables.read().await.enquiries.clone())
    }
}
