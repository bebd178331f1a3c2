use async_trait::async_trait;

use crate::domain::entity::Balance;
use crate::domain::repository::BalanceRepository;
use crate::infrastructure::config::BalanceConfig;

/// StaticBalanceRepository は設定値をそのまま返す固定残高リポジトリ。
/// このラボに永続層は無く、残高は起動時に決まる定数である。
pub struct StaticBalanceRepository {
    balance: Balance,
}

impl StaticBalanceRepository {
    pub fn new(cfg: &BalanceConfig) -> Self {
        Self {
            balance: Balance::new(cfg.amount, cfg.currency.clone()),
        }
    }
}

#[async_trait]
impl BalanceRepository for StaticBalanceRepository {
    async fn fetch(&self) -> anyhow::Result<Balance> {
        Ok(self.balance.clone())
    }
}
