use crate::api::{AppJson, AppState, CurrentUser};
use crate::error::{AppError, AppResult};
use crate::models::{Profile, ProfileUpdate};
use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};
use tracing::info;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me/", get(get_profile))
        .route("/update/:username/", patch(update_profile))
        .route("/agents/all/", get(list_agents))
        .route("/agents/top/", get(list_top_agents))
}

#[tracing::instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Profile>> {
    Ok(Json(state.accounts.profile_by_username(&user).await?))
}

#[tracing::instrument(skip(state, update))]
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(username): Path<String>,
    AppJson(update): AppJson<ProfileUpdate>,
) -> AppResult<Json<Profile>> {
    if username != user {
        return Err(AppError::Forbidden(
            "You can't edit a profile that doesn't belong to you",
        ));
    }

    let profile = state.accounts.update_profile(&username, update).await?;
    info!("Profile of {} updated", username);
    Ok(Json(profile))
}

#[tracing::instrument(skip(state))]
pub async fn list_agents(State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    Ok(Json(state.accounts.list_agents(false).await?))
}

#[tracing::instrument(skip(state))]
pub async fn list_top_agents(State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    Ok(Json(state.accounts.list_agents(true).await?))
}
