pub mod static_balance;

pub use static_balance::StaticBalanceRepository;
