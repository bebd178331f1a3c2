pub mod balance_handler;
pub mod error;
pub mod response;

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::usecase::GetBalanceUseCase;

pub use error::ApiError;
pub use response::Envelope;

/// AppState はアプリケーション全体の共有状態を表す。
#[derive(Clone)]
pub struct AppState {
    pub get_balance_uc: Arc<GetBalanceUseCase>,
}

#[derive(OpenApi)]
#[openapi(
    paths(balance_handler::get_balance, balance_handler::health),
    components(schemas(crate::domain::entity::Balance)),
)]
struct ApiDoc;

/// REST API ルーターを構築する。
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/balance", get(balance_handler::get_balance))
        .route("/health", get(balance_handler::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(fallback)
        .with_state(state)
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// 未登録パスを 404 の分類済み失敗へ変換する。
async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}
