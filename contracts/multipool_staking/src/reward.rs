use std::cmp::{max, min};

use cosmwasm_std::{StdResult, Storage, Uint128};
use multipool::helper::{RewardIndex, ScalingUint128};

use crate::state::{Config, PoolInfo, State, UserInfo, POOLS};

/// ## Description
/// Total reward minted between `from` and `to`, clamped to the reward window.
pub fn reward_multiplier(config: &Config, from: u64, to: u64) -> StdResult<Uint128> {
    let from = max(from, config.reward_start_block);
    let to = min(to, config.reward_end_block);
    if from >= to {
        return Ok(Uint128::zero());
    }

    Ok(Uint128::from(to - from).checked_mul(config.reward_per_block)?)
}

/// ## Description
/// Brings the reward index of `pool` up to `height` in memory.
/// The pool share is floored, and the share of blocks without stake is dropped.
pub fn compute_pool_reward(
    config: &Config,
    total_weight: u64,
    pool: &mut PoolInfo,
    height: u64,
) -> StdResult<()> {
    if height <= pool.last_reward_block {
        return Ok(());
    }

    if total_weight > 0 {
        let minted = reward_multiplier(config, pool.last_reward_block, height)?;
        let pool_share = minted.checked_mul_ratio_floor(pool.weight, total_weight)?;
        if !pool.total_staked.is_zero() {
            let increment = RewardIndex::checked_from_ratio(pool_share, pool.total_staked)?;
            pool.acc_reward_per_share = pool.acc_reward_per_share.checked_add(increment)?;
        }
    }

    pool.last_reward_block = height;
    Ok(())
}

/// Settles a single pool in storage and returns it.
pub fn settle_pool(
    storage: &mut dyn Storage,
    config: &Config,
    state: &State,
    pool_id: u64,
    height: u64,
) -> StdResult<PoolInfo> {
    let mut pool = POOLS.load(storage, pool_id)?;
    compute_pool_reward(config, state.total_weight, &mut pool, height)?;
    POOLS.save(storage, pool_id, &pool)?;
    Ok(pool)
}

pub fn settle_all_pools(
    storage: &mut dyn Storage,
    config: &Config,
    state: &State,
    height: u64,
) -> StdResult<()> {
    for pool_id in 0..state.pool_length {
        settle_pool(storage, config, state, pool_id, height)?;
    }
    Ok(())
}

/// ## Description
/// Moves the reward earned since the last stake change into `pending_reward`.
/// `reward_debt` is left untouched; callers reset it with [`refresh_reward_debt`]
/// once `staked_amount` has changed.
pub fn settle_user(pool: &PoolInfo, user: &mut UserInfo) -> StdResult<()> {
    let accrued = pool
        .acc_reward_per_share
        .checked_mul_floor(user.staked_amount)?;
    if accrued > user.reward_debt {
        let delta = accrued - user.reward_debt;
        user.pending_reward = user.pending_reward.checked_add(delta)?;
    }
    Ok(())
}

pub fn refresh_reward_debt(pool: &PoolInfo, user: &mut UserInfo) -> StdResult<()> {
    user.reward_debt = pool
        .acc_reward_per_share
        .checked_mul_floor(user.staked_amount)?;
    Ok(())
}
