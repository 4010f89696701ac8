use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use crate::AppState;
use crate::models::{BucketList, ErrorResponse, HealthResponse};

pub const GREETING: &str = "AWS Python Sample App is running!";

pub async fn index() -> &'static str {

    GREETING

}

pub async fn health_check() -> Json<HealthResponse> {

    Json(HealthResponse::healthy())

}

pub async fn list_buckets(State(state): State<AppState>) -> Result<Json<BucketList>, (StatusCode, Json<ErrorResponse>)> {

    let buckets = state.provider
        .list_bucket_names()
        .await
        .map_err(|e| {
            // failures here are expected when no credentials are configured
            tracing::warn!("Bucket listing failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() }))
        })?;

    tracing::debug!("Listed {} buckets", buckets.len());

    Ok(Json(BucketList { buckets }))

}
