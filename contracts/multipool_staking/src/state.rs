use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use multipool::adapters::asset::AssetInfo;
use multipool::helper::RewardIndex;
use multipool::staking::UnstakeRequest;

use crate::error::ContractError;
use crate::ownership::OwnershipProposal;

/// Pool 0 always stakes the native coin.
pub const NATIVE_POOL_ID: u64 = 0;

pub const CONFIG: Item<Config> = Item::new("config");
pub const STATE: Item<State> = Item::new("state");
pub const POOLS: Map<u64, PoolInfo> = Map::new("pools");
pub const POOL_BY_ASSET: Map<&str, u64> = Map::new("pool_by_asset"); // key = asset
pub const USER_INFOS: Map<(u64, &Addr), UserInfo> = Map::new("user_infos"); // key = pool, user
pub const UNSTAKE_REQUESTS: Map<(u64, &Addr, u64), UnstakeRequest> =
    Map::new("unstake_requests"); // key = pool, user, seq

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    pub reward_asset: AssetInfo,
    pub native_denom: String,
    pub reward_start_block: u64,
    pub reward_end_block: u64,
    pub reward_per_block: Uint128,
}

impl Config {
    pub fn native_asset(&self) -> AssetInfo {
        AssetInfo::NativeToken {
            denom: self.native_denom.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        if self.reward_start_block > self.reward_end_block {
            return Err(ContractError::InvalidRewardWindow {});
        }
        if self.reward_per_block.is_zero() {
            return Err(ContractError::InvalidRewardPerBlock {});
        }
        // pool 0 stakes the native coin, so it cannot also be the reward
        if self.reward_asset == self.native_asset() {
            return Err(ContractError::RewardAssetNotStakeable {});
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct State {
    pub total_weight: u64,
    pub pool_length: u64,
    pub paused: bool,
    pub withdraw_paused: bool,
    pub claim_paused: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PoolInfo {
    pub stake_asset: AssetInfo,
    pub weight: u64,
    pub last_reward_block: u64,
    pub acc_reward_per_share: RewardIndex,
    pub total_staked: Uint128,
    pub min_deposit: Uint128,
    pub unstake_lock_blocks: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, Default)]
pub struct UserInfo {
    pub staked_amount: Uint128,
    pub reward_debt: Uint128,
    pub pending_reward: Uint128,
    /// Sequence of the oldest queued unstake request
    pub queue_head: u64,
    /// Sequence the next unstake request is stored at
    pub queue_tail: u64,
}

impl UserInfo {
    pub fn queued_requests(&self) -> u64 {
        self.queue_tail - self.queue_head
    }
}

pub fn load_pool(
    storage: &dyn Storage,
    state: &State,
    pool_id: u64,
) -> Result<PoolInfo, ContractError> {
    if pool_id >= state.pool_length {
        return Err(ContractError::InvalidPoolId { pool_id });
    }
    Ok(POOLS.load(storage, pool_id)?)
}

/// returns the position of this user, zero-initialised when never touched
pub fn read_user_info(storage: &dyn Storage, pool_id: u64, user: &Addr) -> StdResult<UserInfo> {
    Ok(USER_INFOS
        .may_load(storage, (pool_id, user))?
        .unwrap_or_default())
}

/// Stores the latest proposal to change contract ownership
pub const OWNERSHIP_PROPOSAL: Item<OwnershipProposal> = Item::new("ownership_proposal");
