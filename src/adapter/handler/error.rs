use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::response::Envelope;

/// ステータス・メッセージが未分類の失敗に適用される既定値。
const DEFAULT_ERROR_MESSAGE: &str = "Internal Server Error";

/// ApiError は API の失敗を表す型。
/// 全ての失敗パスはここで HTTP ステータスとエラーエンベロープへ変換される。
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 未登録パス。
    #[error("Route not found")]
    RouteNotFound,

    /// ステータス・メッセージを明示した失敗。明示された値をそのまま返す。
    /// 欠けたフィールドと不正なステータス値は変換時に 500 / 既定メッセージへ落ちる。
    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE))]
    Classified {
        status: Option<u16>,
        message: Option<String>,
    },

    /// 分類されない内部失敗。原因はログにのみ出し、レスポンスへは漏らさない。
    #[error("Internal Server Error")]
    Internal(anyhow::Error),
}

impl ApiError {
    /// ステータスとメッセージを明示した失敗を作る。
    pub fn classified(status: u16, message: impl Into<String>) -> Self {
        Self::Classified {
            status: Some(status),
            message: Some(message.into()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::RouteNotFound => {
                (StatusCode::NOT_FOUND, "Route not found".to_string())
            }
            ApiError::Classified { status, message } => (
                status
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    DEFAULT_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(Envelope::error(message))).into_response()
    }
}
