use crate::api::{AppJson, AppState};
use crate::error::AppResult;
use crate::models::{Enquiry, NewEnquiry};
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;
use validator::Validate;

#[tracing::instrument(skip(state, new))]
pub async fn create_enquiry_handler(
    State(state): State<AppState>,
    AppJson(new): AppJson<NewEnquiry>,
) -> AppResult<(StatusCode, Json<Value>)> {
    new.validate()?;

    let enquiry = state.accounts.add_enquiry(new.into_enquiry(Utc::now())).await?;
    info!("Enquiry '{}' received from {}", enquiry.subject, enquiry.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": "Your Enquiry was successfully submitted" })),
    ))
}

#[tracing::instrument(skip(state))]
pub async fn list_enquiries_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Enquiry>>> {
    Ok(Json(state.accounts.list_enquiries().await?))
}
