use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use super::error::ApiError;
use super::response::Envelope;
use super::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check OK"),
    )
)]
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/balance",
    responses(
        (status = 200, description = "Current balance wrapped in the success envelope"),
        (status = 500, description = "Internal failure wrapped in the error envelope"),
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let balance = state.get_balance_uc.execute().await?;
    Ok(Json(Envelope::ok(balance)))
}
