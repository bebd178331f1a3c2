pub mod get_balance;

pub use get_balance::GetBalanceUseCase;
