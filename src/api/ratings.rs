use crate::api::{AppJson, AppState, CurrentUser};
use crate::error::{AppError, AppResult};
use crate::models::NewRating;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use uuid::Uuid;

pub fn router() -> Router<AppState> {
    Router::new().route("/:profile_id/", post(create_agent_review))
}

#[tracing::instrument(skip(state, new))]
pub async fn create_agent_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(profile_id): Path<Uuid>,
    AppJson(new): AppJson<NewRating>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    let agent = state.accounts.profile_by_id(profile_id).await?;
    if agent.username == user {
        return Err(AppError::Forbidden("You can't rate yourself"));
    }

    state.accounts.add_rating(&user, agent.id, new).await?;
    Ok((StatusCode::CREATED, Json("Review Added")))
}

#[cfg(test)]
mod tests {
    use crate::api::test_helpers::{app, send};
    use crate::store::{AccountStore, SeedData};
    use crate::test_support::profile;
    use axum::http::StatusCode;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[tokio::test]
    async fn reviews_update_the_agent_and_reject_repeats() {
        let agent = profile("ravi", true);
        let uri = format!("/api/v1/ratings/{}/", agent.id);
        let agent_id = agent.id;
        let (app, store) = app(SeedData {
            profiles: vec![agent],
            properties: vec![],
        });

        let (status, body) = send(
            &app,
            "POST",
            &uri,
            Some("meera"),
            Some(json!({ "rating": 4, "comment": "Responsive" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "Review Added");

        let (status, body) = send(
            &app,
            "POST",
            &uri,
            Some("meera"),
            Some(json!({ "rating": 5, "comment": "Again" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Profile already reviewed");

        let (status, _) = send(
            &app,
            "POST",
            &uri,
            Some("john"),
            Some(json!({ "rating": 5, "comment": "Great" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let agent = store.profile_by_id(agent_id).await.unwrap();
        assert_eq!(agent.num_reviews, 2);
        assert_eq!(agent.rating, Some(Decimal::new(450, 2)));
    }

    #[tokio::test]
    async fn agents_cannot_rate_themselves() {
        let agent = profile("ravi", true);
        let uri = format!("/api/v1/ratings/{}/", agent.id);
        let (app, _) = app(SeedData {
            profiles: vec![agent],
            properties: vec![],
        });

        let (status, body) =
            send(&app, "POST", &uri, Some("ravi"), Some(json!({ "rating": 5 }))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "You can't rate yourself");
    }

    #[tokio::test]
    async fn out_of_range_scores_are_bad_requests() {
        let agent = profile("ravi", true);
        let uri = format!("/api/v1/ratings/{}/", agent.id);
        let (app, _) = app(SeedData {
            profiles: vec![agent],
            properties: vec![],
        });

        for score in [-1, 6, 300] {
            let (status, body) =
                send(&app, "POST", &uri, Some("meera"), Some(json!({ "rating": score }))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Rating must be between 1 and 5");
        }

        let (status, body) =
            send(&app, "POST", &uri, Some("meera"), Some(json!({ "rating": "five" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn zero_rating_and_unknown_agent() {
        let agent = profile("ravi", true);
        let uri = format!("/api/v1/ratings/{}/", agent.id);
        let (app, _) = app(SeedData {
            profiles: vec![agent],
            properties: vec![],
        });

        let (status, body) =
            send(&app, "POST", &uri, Some("meera"), Some(json!({ "comment": "?" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please select a rating");

        let missing = format!("/api/v1/ratings/{}/", uuid::Uuid::new_v4());
        let (status, _) =
            send(&app, "POST", &missing, Some("meera"), Some(json!({ "rating": 3 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
