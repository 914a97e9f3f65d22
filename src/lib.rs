pub mod balances;
pub mod blockchain_manager;
pub mod config;
pub mod utils;
