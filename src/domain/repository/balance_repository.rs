use async_trait::async_trait;

use crate::domain::entity::Balance;

/// BalanceRepository は残高取得のためのリポジトリトレイト。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BalanceRepository: Send + Sync {
    /// 現在の残高を取得する。
    async fn fetch(&self) -> anyhow::Result<Balance>;
}
