use serde::Serialize;

/// Envelope は全 JSON レスポンス共通の成功/失敗ラッパー。
/// success フラグに応じて data か error のどちらか一方だけがシリアライズされる。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// 成功レスポンスを構築する。
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    /// 失敗レスポンスを構築する。
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_carries_data_only() {
        let env = Envelope::ok(serde_json::json!({"balance": 123.45}));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["balance"], 123.45);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_carries_message_only() {
        let env = Envelope::error("Route not found");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Route not found");
        assert!(json.get("data").is_none());
    }
}
