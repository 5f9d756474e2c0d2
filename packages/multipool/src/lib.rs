pub mod adapters;
pub mod helper;
pub mod staking;
