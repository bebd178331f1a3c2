use serde::{Deserialize, Serialize};

/// Balance は口座残高エンティティ。
/// リクエスト間で共有される可変状態は持たず、レスポンス整形のためだけに生成される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Balance {
    pub balance: f64,
    pub currency: String,
}

impl Balance {
    /// 新しい Balance を作成する。
    pub fn new(balance: f64, currency: impl Into<String>) -> Self {
        Self {
            balance,
            currency: currency.into(),
        }
    }
}
