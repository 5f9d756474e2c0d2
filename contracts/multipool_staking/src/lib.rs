pub mod admin;
pub mod contract;
pub mod error;
pub mod ownership;
pub mod pool;
pub mod position;
pub mod query;
pub mod reward;
pub mod state;
pub mod unstake;
