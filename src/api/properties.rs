use crate::api::{AppJson, AppState, CurrentUser};
use crate::error::{AppError, AppResult};
use crate::models::{NewProperty, PropertyResponse, PropertyUpdate, PropertyView};
use crate::search::{search_properties, SearchRequest};
use crate::store::{Comparison, Predicate, PropertyQuery, SortOrder, TextField};
use crate::utils::viewer_ip;
use axum::{
    body::Bytes,
    extract::{ConnectInfo, Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use std::{net::SocketAddr, str::FromStr};
use tracing::info;
use validator::Validate;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all/", get(list_all_properties))
        .route("/agents/", get(list_agent_properties))
        .route("/views/", get(list_property_views))
        .route("/create/", post(create_property))
        .route("/search/", post(search_handler))
        .route("/:slug/details/", get(property_details))
        .route("/:slug/update/", put(update_property))
        .route("/:slug/delete/", delete(delete_property))
}

/// Query-string filters for the listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub advert_type: Option<String>,
    pub property_type: Option<String>,
    pub price: Option<String>,
    #[serde(rename = "price__gt")]
    pub price_gt: Option<String>,
    #[serde(rename = "price__lt")]
    pub price_lt: Option<String>,
    /// Whitespace separated terms, each matched against country or city
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ListParams {
    fn apply(self, mut query: PropertyQuery) -> AppResult<PropertyQuery> {
        if let Some(advert_type) = non_empty(self.advert_type) {
            query = query.filter(Predicate::TextIExact(TextField::AdvertType, advert_type));
        }
        if let Some(property_type) = non_empty(self.property_type) {
            query = query.filter(Predicate::TextIExact(TextField::PropertyType, property_type));
        }

        let price_filters = [
            ("price", self.price, Comparison::Eq),
            ("price__gt", self.price_gt, Comparison::Gt),
            ("price__lt", self.price_lt, Comparison::Lt),
        ];
        for (key, raw, comparison) in price_filters {
            if let Some(raw) = non_empty(raw) {
                query = query.filter(Predicate::Price(comparison, parse_decimal(key, &raw)?));
            }
        }

        if let Some(search) = self.search {
            for term in search.split_whitespace() {
                query = query.filter(Predicate::AnyContains(
                    vec![TextField::Country, TextField::City],
                    term.to_string(),
                ));
            }
        }

        let order = match self.ordering.as_deref() {
            Some("created_at") => SortOrder::CreatedAsc,
            _ => SortOrder::CreatedDesc,
        };
        Ok(query.order_by(order))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_decimal(key: &str, raw: &str) -> AppResult<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|_| AppError::Validation(format!("{key}: Enter a number.")))
}

fn respond(properties: Vec<crate::models::Property>) -> Json<Vec<PropertyResponse>> {
    Json(properties.into_iter().map(PropertyResponse::from).collect())
}

#[tracing::instrument(skip(state))]
pub async fn list_all_properties(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<PropertyResponse>>> {
    let query = params.apply(PropertyQuery::new())?;
    Ok(respond(state.properties.find_properties(&query).await?))
}

#[tracing::instrument(skip(state))]
pub async fn list_agent_properties(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<PropertyResponse>>> {
    let query = params.apply(PropertyQuery::new().filter(Predicate::Owner(user)))?;
    Ok(respond(state.properties.find_properties(&query).await?))
}

#[tracing::instrument(skip(state))]
pub async fn list_property_views(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PropertyView>>> {
    Ok(Json(state.properties.list_views().await?))
}

#[tracing::instrument(skip(state, new))]
pub async fn create_property(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(new): AppJson<NewProperty>,
) -> AppResult<(StatusCode, Json<PropertyResponse>)> {
    new.validate()?;

    let property = state.properties.create_property(&user, new).await?;
    info!(
        "Property {} ({}, {}) has been created by {}",
        property.title, property.property_type, property.advert_type, user
    );

    Ok((StatusCode::CREATED, Json(property.into())))
}

/// Body is optional and read regardless of content type
#[tracing::instrument(skip(state, body))]
pub async fn search_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<Vec<PropertyResponse>>> {
    let request = SearchRequest::from_body(&body)
        .map_err(|e| AppError::Validation(format!("Malformed search payload: {e}")))?;
    let found = search_properties(state.properties.as_ref(), &request).await?;
    info!("Search matched {} properties", found.len());
    Ok(respond(found))
}

#[tracing::instrument(skip(state, headers, peer))]
pub async fn property_details(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> AppResult<Json<PropertyResponse>> {
    let forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok());
    let ip = viewer_ip(forwarded_for, peer.map(|ConnectInfo(addr)| addr.ip().to_string()));

    let outcome = state.properties.record_view(&slug, &ip).await?;
    if outcome.counted {
        info!("New view on {} from {}", slug, ip);
    }

    Ok(Json(outcome.property.into()))
}

#[tracing::instrument(skip(state, update))]
pub async fn update_property(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
    AppJson(update): AppJson<PropertyUpdate>,
) -> AppResult<Json<PropertyResponse>> {
    let property = state.properties.property_by_slug(&slug).await?;
    if property.user != user {
        return Err(AppError::Forbidden(
            "You cannot modify a property that does not belongs to you",
        ));
    }
    update.validate()?;

    let updated = state.properties.update_property(&slug, update).await?;
    Ok(Json(updated.into()))
}

#[tracing::instrument(skip(state))]
pub async fn delete_property(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> AppResult<Json<Value>> {
    let property = state.properties.property_by_slug(&slug).await?;
    if property.user != user {
        return Err(AppError::Forbidden(
            "You cannot delete a property that does not belongs to you",
        ));
    }

    state.properties.delete_property(&slug).await?;
    info!("Property {} deleted by {}", slug, user);

    Ok(Json(json!({ "success": "Property deleted successfully" })))
}
