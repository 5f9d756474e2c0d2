use cosmwasm_std::{attr, DepsMut, Env, Response, Uint128, Uint64};
use multipool::adapters::asset::AssetInfo;
use multipool::helper::RewardIndex;

use crate::admin::AdminCap;
use crate::error::ContractError;
use crate::reward::{settle_all_pools, settle_pool};
use crate::state::{load_pool, PoolInfo, CONFIG, NATIVE_POOL_ID, POOLS, POOL_BY_ASSET, STATE};

/// ## Description
/// Registers a new pool. Pool 0 must stake the native coin, every later pool a cw20 token,
/// and an asset can back at most one pool.
#[allow(clippy::too_many_arguments)]
pub fn add_pool(
    deps: DepsMut,
    env: Env,
    _cap: AdminCap,
    stake_asset: AssetInfo,
    weight: u64,
    min_deposit: Uint128,
    unstake_lock_blocks: u64,
    with_update: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;
    let height = env.block.height;

    if unstake_lock_blocks == 0 {
        return Err(ContractError::InvalidLockBlocks {});
    }
    if height >= config.reward_end_block {
        return Err(ContractError::RewardWindowEnded {});
    }

    stake_asset.check(deps.api)?;
    let pool_id = state.pool_length;
    if pool_id == NATIVE_POOL_ID {
        if stake_asset != config.native_asset() {
            return Err(ContractError::InvalidFirstPoolAsset {
                denom: config.native_denom,
            });
        }
    } else if stake_asset.is_native_token() {
        return Err(ContractError::NativePoolAlreadyExists {});
    }
    if stake_asset == config.reward_asset {
        return Err(ContractError::RewardAssetNotStakeable {});
    }

    let asset_key = stake_asset.to_string();
    if let Some(existing) = POOL_BY_ASSET.may_load(deps.storage, &asset_key)? {
        return Err(ContractError::DuplicatedPoolAsset {
            asset: asset_key,
            pool_id: existing,
        });
    }

    if with_update {
        settle_all_pools(deps.storage, &config, &state, height)?;
    }

    let pool = PoolInfo {
        stake_asset,
        weight,
        last_reward_block: height.max(config.reward_start_block),
        acc_reward_per_share: RewardIndex::zero(),
        total_staked: Uint128::zero(),
        min_deposit,
        unstake_lock_blocks,
    };
    POOLS.save(deps.storage, pool_id, &pool)?;
    POOL_BY_ASSET.save(deps.storage, &asset_key, &pool_id)?;

    state.total_weight = Uint64::from(state.total_weight)
        .checked_add(Uint64::from(weight))?
        .u64();
    state.pool_length += 1;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "add_pool"),
        attr("pool_id", pool_id.to_string()),
        attr("stake_asset", asset_key),
        attr("weight", weight.to_string()),
        attr("min_deposit", min_deposit),
        attr("unstake_lock_blocks", unstake_lock_blocks.to_string()),
    ]))
}

/// ## Description
/// Changes a pool weight and the total weight together.
/// With `with_update`, every pool is settled at the old weights first.
pub fn set_pool_weight(
    deps: DepsMut,
    env: Env,
    _cap: AdminCap,
    pool_id: u64,
    weight: u64,
    with_update: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = STATE.load(deps.storage)?;

    if weight == 0 {
        return Err(ContractError::InvalidWeight {});
    }
    // validates the pool id before any settlement
    load_pool(deps.storage, &state, pool_id)?;

    if with_update {
        settle_all_pools(deps.storage, &config, &state, env.block.height)?;
    }

    let mut pool = POOLS.load(deps.storage, pool_id)?;
    let prev_weight = pool.weight;
    state.total_weight = Uint64::from(state.total_weight)
        .checked_sub(Uint64::from(prev_weight))?
        .checked_add(Uint64::from(weight))?
        .u64();
    pool.weight = weight;

    POOLS.save(deps.storage, pool_id, &pool)?;
    STATE.save(deps.storage, &state)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_pool_weight"),
        attr("pool_id", pool_id.to_string()),
        attr("prev_weight", prev_weight.to_string()),
        attr("weight", weight.to_string()),
    ]))
}

/// Changes deposit minimum and lock time. Already queued requests keep their unlock block.
pub fn update_pool_policy(
    deps: DepsMut,
    _cap: AdminCap,
    pool_id: u64,
    min_deposit: Uint128,
    unstake_lock_blocks: u64,
) -> Result<Response, ContractError> {
    let state = STATE.load(deps.storage)?;
    let mut pool = load_pool(deps.storage, &state, pool_id)?;

    if unstake_lock_blocks == 0 {
        return Err(ContractError::InvalidLockBlocks {});
    }

    pool.min_deposit = min_deposit;
    pool.unstake_lock_blocks = unstake_lock_blocks;
    POOLS.save(deps.storage, pool_id, &pool)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "update_pool_policy"),
        attr("pool_id", pool_id.to_string()),
        attr("min_deposit", min_deposit),
        attr("unstake_lock_blocks", unstake_lock_blocks.to_string()),
    ]))
}

pub fn update_pool(deps: DepsMut, env: Env, pool_id: u64) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    load_pool(deps.storage, &state, pool_id)?;

    let pool = settle_pool(deps.storage, &config, &state, pool_id, env.block.height)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "update_pool"),
        attr("pool_id", pool_id.to_string()),
        attr("acc_reward_per_share", pool.acc_reward_per_share.to_string()),
    ]))
}

pub fn mass_update_pools(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;

    settle_all_pools(deps.storage, &config, &state, env.block.height)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "mass_update_pools"),
        attr("pool_length", state.pool_length.to_string()),
    ]))
}
