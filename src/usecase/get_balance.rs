use std::sync::Arc;

use crate::domain::entity::Balance;
use crate::domain::repository::BalanceRepository;

/// GetBalanceUseCase は現在残高の取得を担う。
pub struct GetBalanceUseCase {
    repo: Arc<dyn BalanceRepository>,
}

impl GetBalanceUseCase {
    pub fn new(repo: Arc<dyn BalanceRepository>) -> Self {
        Self { repo }
    }

    /// 残高を取得する。リポジトリの失敗はそのまま呼び出し元へ伝播する。
    pub async fn execute(&self) -> anyhow::Result<Balance> {
        self.repo.fetch().await
    }
}
