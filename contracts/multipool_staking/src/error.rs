use cosmwasm_std::{
    ConversionOverflowError, DivideByZeroError, OverflowError, StdError, Uint128,
};
use thiserror::Error;

/// ## Description
/// This enum describes multipool staking contract errors!
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid message")]
    InvalidMessage {},

    #[error("Invalid pool id {pool_id}")]
    InvalidPoolId { pool_id: u64 },

    #[error("Pool {pool_id} does not accept token deposits")]
    NotTokenPool { pool_id: u64 },

    #[error("Deposit amount {amount} does not satisfy minimum deposit {min_deposit}")]
    DepositBelowMinimum { amount: Uint128, min_deposit: Uint128 },

    #[error("Must send native coin '{denom}'")]
    NativeFundsRequired { denom: String },

    #[error("Unexpected funds '{denom}'")]
    UnexpectedFunds { denom: String },

    #[error("Cannot unstake more than staked balance")]
    InsufficientStake {},

    #[error("Unstake lock blocks must be greater than zero")]
    InvalidLockBlocks {},

    #[error("Pool weight must be greater than zero")]
    InvalidWeight {},

    #[error("Reward per block must be greater than zero")]
    InvalidRewardPerBlock {},

    #[error("Reward start block must not be greater than reward end block")]
    InvalidRewardWindow {},

    #[error("Reward window already ended")]
    RewardWindowEnded {},

    #[error("First pool must stake native coin '{denom}'")]
    InvalidFirstPoolAsset { denom: String },

    #[error("Only the first pool can stake the native coin")]
    NativePoolAlreadyExists {},

    #[error("Asset {asset} is already staked in pool {pool_id}")]
    DuplicatedPoolAsset { asset: String, pool_id: u64 },

    #[error("Reward asset cannot be staked")]
    RewardAssetNotStakeable {},

    #[error("Contract is paused")]
    Paused {},

    #[error("Withdraw is paused")]
    WithdrawPaused {},

    #[error("Claim is paused")]
    ClaimPaused {},

    #[error("{flag} is already paused")]
    AlreadyPaused { flag: String },

    #[error("{flag} is already unpaused")]
    AlreadyUnpaused { flag: String },

    #[error("Ownership proposal not found")]
    OwnershipProposalNotFound {},

    #[error("Ownership proposal expired")]
    OwnershipProposalExpired {},

    #[error("New owner cannot be the current owner")]
    NewOwnerIsCurrentOwner {},

    #[error("Ownership proposal expiration exceeds {max} seconds")]
    InvalidProposalExpiry { max: u64 },
}

impl From<OverflowError> for ContractError {
    fn from(o: OverflowError) -> Self {
        StdError::from(o).into()
    }
}

impl From<DivideByZeroError> for ContractError {
    fn from(e: DivideByZeroError) -> Self {
        StdError::from(e).into()
    }
}

impl From<ConversionOverflowError> for ContractError {
    fn from(e: ConversionOverflowError) -> Self {
        StdError::from(e).into()
    }
}
