use cosmwasm_std::{Addr, Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use multipool::staking::{
    AllUserInfosResponse, ConfigResponse, PendingRewardResponse, PoolInfoResponse, PoolsResponse,
    RewardMultiplierResponse, StakedBalanceResponse, StateResponse, UserInfoResponse,
    WithdrawQueueResponse,
};

use crate::error::ContractError;
use crate::reward::{compute_pool_reward, reward_multiplier, settle_user};
use crate::state::{load_pool, read_user_info, PoolInfo, UserInfo, CONFIG, POOLS, STATE, USER_INFOS};
use crate::unstake::{read_requests, withdrawable_amount};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> Result<ConfigResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.to_string(),
        reward_asset: config.reward_asset,
        native_denom: config.native_denom,
        reward_start_block: config.reward_start_block,
        reward_end_block: config.reward_end_block,
        reward_per_block: config.reward_per_block,
    })
}

pub fn query_state(deps: Deps) -> Result<StateResponse, ContractError> {
    let state = STATE.load(deps.storage)?;
    Ok(StateResponse {
        total_weight: state.total_weight,
        pool_length: state.pool_length,
        paused: state.paused,
        withdraw_paused: state.withdraw_paused,
        claim_paused: state.claim_paused,
    })
}

fn to_pool_response(pool_id: u64, pool: PoolInfo) -> PoolInfoResponse {
    PoolInfoResponse {
        pool_id,
        stake_asset: pool.stake_asset,
        weight: pool.weight,
        last_reward_block: pool.last_reward_block,
        acc_reward_per_share: pool.acc_reward_per_share,
        total_staked: pool.total_staked,
        min_deposit: pool.min_deposit,
        unstake_lock_blocks: pool.unstake_lock_blocks,
    }
}

fn to_user_response(pool_id: u64, user_addr: &Addr, user: UserInfo) -> UserInfoResponse {
    UserInfoResponse {
        pool_id,
        user: user_addr.to_string(),
        staked_amount: user.staked_amount,
        reward_debt: user.reward_debt,
        pending_reward: user.pending_reward,
        queued_requests: user.queued_requests(),
    }
}

pub fn query_pool_info(deps: Deps, pool_id: u64) -> Result<PoolInfoResponse, ContractError> {
    let state = STATE.load(deps.storage)?;
    let pool = load_pool(deps.storage, &state, pool_id)?;
    Ok(to_pool_response(pool_id, pool))
}

pub fn query_pools(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<PoolsResponse, ContractError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let pools = POOLS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (pool_id, pool) = item?;
            Ok(to_pool_response(pool_id, pool))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PoolsResponse { pools })
}

/// Stored position of `user`. `pending_reward` only covers settled blocks.
pub fn query_user_info(
    deps: Deps,
    pool_id: u64,
    user: String,
) -> Result<UserInfoResponse, ContractError> {
    let state = STATE.load(deps.storage)?;
    load_pool(deps.storage, &state, pool_id)?;

    let user_addr = deps.api.addr_validate(&user)?;
    let user = read_user_info(deps.storage, pool_id, &user_addr)?;
    Ok(to_user_response(pool_id, &user_addr, user))
}

pub fn query_all_user_infos(
    deps: Deps,
    pool_id: u64,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<AllUserInfosResponse, ContractError> {
    let state = STATE.load(deps.storage)?;
    load_pool(deps.storage, &state, pool_id)?;

    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let user_infos = USER_INFOS
        .prefix(pool_id)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (user_addr, user) = item?;
            Ok(to_user_response(pool_id, &user_addr, user))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AllUserInfosResponse { user_infos })
}

/// ## Description
/// Reward `user` could claim at `block_height`, computed on copies of the pool and position.
/// Heights before the last settlement return the settled amount.
pub fn query_pending_reward(
    deps: Deps,
    env: Env,
    pool_id: u64,
    user: String,
    block_height: Option<u64>,
) -> Result<PendingRewardResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    let mut pool = load_pool(deps.storage, &state, pool_id)?;

    let user_addr = deps.api.addr_validate(&user)?;
    let mut user = read_user_info(deps.storage, pool_id, &user_addr)?;

    let block_height = block_height.unwrap_or(env.block.height);
    compute_pool_reward(&config, state.total_weight, &mut pool, block_height)?;
    settle_user(&pool, &mut user)?;

    Ok(PendingRewardResponse {
        pending_reward: user.pending_reward,
        block_height,
    })
}

pub fn query_staked_balance(
    deps: Deps,
    pool_id: u64,
    user: String,
) -> Result<StakedBalanceResponse, ContractError> {
    let state = STATE.load(deps.storage)?;
    load_pool(deps.storage, &state, pool_id)?;

    let user_addr = deps.api.addr_validate(&user)?;
    let user = read_user_info(deps.storage, pool_id, &user_addr)?;
    Ok(StakedBalanceResponse {
        staked_amount: user.staked_amount,
    })
}

pub fn query_withdraw_queue(
    deps: Deps,
    env: Env,
    pool_id: u64,
    user: String,
) -> Result<WithdrawQueueResponse, ContractError> {
    let state = STATE.load(deps.storage)?;
    load_pool(deps.storage, &state, pool_id)?;

    let user_addr = deps.api.addr_validate(&user)?;
    let user = read_user_info(deps.storage, pool_id, &user_addr)?;
    let requests = read_requests(deps.storage, pool_id, &user_addr, &user)?;

    let mut requested_amount = Uint128::zero();
    for request in requests.iter() {
        requested_amount = requested_amount.checked_add(request.amount)?;
    }
    let withdrawable_amount = withdrawable_amount(&requests, env.block.height)?;

    Ok(WithdrawQueueResponse {
        requests,
        requested_amount,
        withdrawable_amount,
    })
}

pub fn query_reward_multiplier(
    deps: Deps,
    from: u64,
    to: u64,
) -> Result<RewardMultiplierResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(RewardMultiplierResponse {
        amount: reward_multiplier(&config, from, to)?,
    })
}
