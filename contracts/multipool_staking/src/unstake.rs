use cosmwasm_std::{
    attr, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, StdResult, Storage, Uint128,
    Uint64,
};
use multipool::adapters::asset::Asset;
use multipool::staking::UnstakeRequest;

use crate::admin::assert_withdraw_enabled;
use crate::error::ContractError;
use crate::reward::{compute_pool_reward, refresh_reward_debt, settle_user};
use crate::state::{
    load_pool, read_user_info, UserInfo, CONFIG, POOLS, STATE, UNSTAKE_REQUESTS, USER_INFOS,
};

/// ## Description
/// Moves `amount` of the sender's stake into the unstake queue.
/// Rewards earned on the old stake are settled first. A zero amount settles without queueing.
pub fn unstake(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    pool_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    assert_withdraw_enabled(&state)?;

    let staker_addr = info.sender;
    let height = env.block.height;
    let mut pool = load_pool(deps.storage, &state, pool_id)?;
    let mut user = read_user_info(deps.storage, pool_id, &staker_addr)?;

    if user.staked_amount < amount {
        return Err(ContractError::InsufficientStake {});
    }

    compute_pool_reward(&config, state.total_weight, &mut pool, height)?;
    settle_user(&pool, &mut user)?;

    user.staked_amount = user.staked_amount.checked_sub(amount)?;
    pool.total_staked = pool.total_staked.checked_sub(amount)?;

    let unlock_block = Uint64::from(height)
        .checked_add(Uint64::from(pool.unstake_lock_blocks))?
        .u64();
    if !amount.is_zero() {
        push_request(
            deps.storage,
            pool_id,
            &staker_addr,
            &mut user,
            UnstakeRequest {
                amount,
                unlock_block,
            },
        )?;
    }
    refresh_reward_debt(&pool, &mut user)?;

    USER_INFOS.save(deps.storage, (pool_id, &staker_addr), &user)?;
    POOLS.save(deps.storage, pool_id, &pool)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "unstake"),
        attr("pool_id", pool_id.to_string()),
        attr("user", staker_addr.as_str()),
        attr("amount", amount),
        attr("unlock_block", unlock_block.to_string()),
    ]))
}

/// ## Description
/// Pays out unlocked requests from the front of the sender's queue.
/// The walk stops at the first request that is still locked, even when later requests are
/// already unlocked. Nothing to pay is not an error.
pub fn withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    pool_id: u64,
) -> Result<Response, ContractError> {
    let state = STATE.load(deps.storage)?;
    assert_withdraw_enabled(&state)?;

    let staker_addr = info.sender;
    let pool = load_pool(deps.storage, &state, pool_id)?;
    let mut user = read_user_info(deps.storage, pool_id, &staker_addr)?;

    let amount = pop_unlocked_requests(
        deps.storage,
        pool_id,
        &staker_addr,
        &mut user,
        env.block.height,
    )?;
    USER_INFOS.save(deps.storage, (pool_id, &staker_addr), &user)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !amount.is_zero() {
        messages.push(Asset::new(pool.stake_asset, amount).transfer_msg(&staker_addr)?);
    }

    Ok(Response::new().add_messages(messages).add_attributes(vec![
        attr("action", "withdraw"),
        attr("pool_id", pool_id.to_string()),
        attr("user", staker_addr.as_str()),
        attr("amount", amount),
    ]))
}

fn push_request(
    storage: &mut dyn Storage,
    pool_id: u64,
    user_addr: &Addr,
    user: &mut UserInfo,
    request: UnstakeRequest,
) -> StdResult<()> {
    UNSTAKE_REQUESTS.save(storage, (pool_id, user_addr, user.queue_tail), &request)?;
    user.queue_tail += 1;
    Ok(())
}

/// Removes the unlocked prefix of the queue and returns its total.
fn pop_unlocked_requests(
    storage: &mut dyn Storage,
    pool_id: u64,
    user_addr: &Addr,
    user: &mut UserInfo,
    height: u64,
) -> StdResult<Uint128> {
    let mut amount = Uint128::zero();
    while user.queue_head < user.queue_tail {
        let key = (pool_id, user_addr, user.queue_head);
        let request = UNSTAKE_REQUESTS.load(storage, key)?;
        if request.unlock_block > height {
            break;
        }
        amount = amount.checked_add(request.amount)?;
        UNSTAKE_REQUESTS.remove(storage, key);
        user.queue_head += 1;
    }
    Ok(amount)
}

/// Returns the queued requests in order, oldest first.
pub fn read_requests(
    storage: &dyn Storage,
    pool_id: u64,
    user_addr: &Addr,
    user: &UserInfo,
) -> StdResult<Vec<UnstakeRequest>> {
    (user.queue_head..user.queue_tail)
        .map(|seq| UNSTAKE_REQUESTS.load(storage, (pool_id, user_addr, seq)))
        .collect()
}

/// What [`withdraw`] would pay at `height`.
pub fn withdrawable_amount(requests: &[UnstakeRequest], height: u64) -> StdResult<Uint128> {
    let mut amount = Uint128::zero();
    for request in requests.iter().take_while(|r| r.unlock_block <= height) {
        amount = amount.checked_add(request.amount)?;
    }
    Ok(amount)
}
