use crate::error::AppError;
use crate::store::{AccountStore, PropertyStore};
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod enquiries;
mod health;
mod profiles;
mod properties;
mod ratings;

/// Header set by the authenticating gateway in front of this service
pub const USERNAME_HEADER: &str = "x-username";

#[derive(Clone)]
pub struct AppState {
    pub properties: Arc<dyn PropertyStore>,
    pub accounts: Arc<dyn AccountStore>,
}

impl AppState {
    /// Serve both store traits from one backend
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: PropertyStore + AccountStore + 'static,
    {
        Self {
            properties: store.clone(),
            accounts: store,
        }
    }
}

/// Username of the caller, as forwarded by the gateway
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USERNAME_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| CurrentUser(name.to_string()))
            .ok_or(AppError::Unauthenticated)
    }
}

/// `Json` body whose rejections render through `AppError`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/properties", properties::router())
        .nest("/api/v1/profile", profiles::router())
        .nest("/api/v1/ratings", ratings::router())
        .route(
            "/api/v1/enquiries/",
            post(enquiries::create_enquiry_handler).get(enquiries::list_enquiries_handler),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
