use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Uint128;
use cw20::Cw20ReceiveMsg;

use crate::adapters::asset::AssetInfo;
use crate::helper::RewardIndex;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub owner: String,
    /// Asset paid out by `Claim`
    pub reward_asset: AssetInfo,
    /// Denom of the native coin staked in pool 0
    pub native_denom: String,
    pub reward_start_block: u64,
    pub reward_end_block: u64,
    pub reward_per_block: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Receives a message of type [`Cw20ReceiveMsg`]
    Receive(Cw20ReceiveMsg),
    /// Stake the attached native coin into pool 0
    DepositNative {},
    /// Move stake into the unstake queue of the sender
    Unstake { pool_id: u64, amount: Uint128 },
    /// Pay out unlocked requests from the front of the unstake queue
    Withdraw { pool_id: u64 },
    /// Pay out pending rewards
    Claim { pool_id: u64 },
    /// Bring the reward index of one pool up to date
    UpdatePool { pool_id: u64 },
    /// Bring the reward index of every pool up to date
    MassUpdatePools {},

    AddPool {
        stake_asset: AssetInfo,
        weight: u64,
        min_deposit: Uint128,
        unstake_lock_blocks: u64,
        with_update: bool,
    },
    SetPoolWeight {
        pool_id: u64,
        weight: u64,
        with_update: bool,
    },
    UpdatePoolPolicy {
        pool_id: u64,
        min_deposit: Uint128,
        unstake_lock_blocks: u64,
    },
    SetRewardStartBlock { block: u64 },
    SetRewardEndBlock { block: u64 },
    SetRewardPerBlock { amount: Uint128 },

    PauseWithdraw {},
    UnpauseWithdraw {},
    PauseClaim {},
    UnpauseClaim {},
    /// Pause deposit, unstake, withdraw and claim
    Pause {},
    Unpause {},

    /// Creates a request to change the contract's ownership
    ProposeNewOwner {
        /// The newly proposed owner
        owner: String,
        /// The validity period of the proposal to change the owner
        expires_in: u64,
    },
    /// Removes a request to change contract ownership
    DropOwnershipProposal {},
    /// Claims contract ownership
    ClaimOwnership {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Cw20HookMsg {
    Deposit {
        pool_id: u64,
        staker_addr: Option<String>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    State {},
    PoolInfo {
        pool_id: u64,
    },
    Pools {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    UserInfo {
        pool_id: u64,
        user: String,
    },
    AllUserInfos {
        pool_id: u64,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Claimable reward projected to `block_height` (current block when omitted)
    PendingReward {
        pool_id: u64,
        user: String,
        block_height: Option<u64>,
    },
    StakedBalance {
        pool_id: u64,
        user: String,
    },
    WithdrawQueue {
        pool_id: u64,
        user: String,
    },
    RewardMultiplier {
        from: u64,
        to: u64,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct UnstakeRequest {
    pub amount: Uint128,
    pub unlock_block: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub owner: String,
    pub reward_asset: AssetInfo,
    pub native_denom: String,
    pub reward_start_block: u64,
    pub reward_end_block: u64,
    pub reward_per_block: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct StateResponse {
    pub total_weight: u64,
    pub pool_length: u64,
    pub paused: bool,
    pub withdraw_paused: bool,
    pub claim_paused: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PoolInfoResponse {
    pub pool_id: u64,
    pub stake_asset: AssetInfo,
    pub weight: u64,
    pub last_reward_block: u64,
    pub acc_reward_per_share: RewardIndex,
    pub total_staked: Uint128,
    pub min_deposit: Uint128,
    pub unstake_lock_blocks: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PoolsResponse {
    pub pools: Vec<PoolInfoResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct UserInfoResponse {
    pub pool_id: u64,
    pub user: String,
    pub staked_amount: Uint128,
    pub reward_debt: Uint128,
    pub pending_reward: Uint128,
    pub queued_requests: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AllUserInfosResponse {
    pub user_infos: Vec<UserInfoResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PendingRewardResponse {
    pub pending_reward: Uint128,
    pub block_height: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct StakedBalanceResponse {
    pub staked_amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct WithdrawQueueResponse {
    pub requests: Vec<UnstakeRequest>,
    /// Sum of every queued request
    pub requested_amount: Uint128,
    /// What `Withdraw` would pay at the current block
    pub withdrawable_amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RewardMultiplierResponse {
    pub amount: Uint128,
}

/// This structure describes a migration message.
/// We currently take no arguments for migrations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
