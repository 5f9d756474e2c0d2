use cosmwasm_std::{attr, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};
use multipool::adapters::asset::{Asset, AssetInfo};

use crate::admin::{assert_claim_enabled, assert_not_paused};
use crate::error::ContractError;
use crate::reward::{compute_pool_reward, refresh_reward_debt, settle_user};
use crate::state::{
    load_pool, read_user_info, Config, State, CONFIG, NATIVE_POOL_ID, POOLS, STATE, USER_INFOS,
};

/// ## Description
/// Stakes the native coin attached to the message into pool 0.
/// The amount must be at least the pool minimum.
pub fn deposit_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    assert_not_paused(&state)?;

    let pool = load_pool(deps.storage, &state, NATIVE_POOL_ID)?;
    if let Some(coin) = info.funds.iter().find(|c| c.denom != config.native_denom) {
        return Err(ContractError::UnexpectedFunds {
            denom: coin.denom.clone(),
        });
    }
    let amount = pool
        .stake_asset
        .native_amount(&info.funds)?
        .ok_or_else(|| ContractError::NativeFundsRequired {
            denom: config.native_denom.clone(),
        })?;

    if amount < pool.min_deposit {
        return Err(ContractError::DepositBelowMinimum {
            amount,
            min_deposit: pool.min_deposit,
        });
    }

    deposit_internal(deps, env, &config, &state, NATIVE_POOL_ID, info.sender, amount)
}

/// ## Description
/// Stakes cw20 tokens already received through the `Receive` hook.
/// `token` is the cw20 contract that forwarded the tokens and must be the pool's stake asset.
/// The amount must be strictly greater than the pool minimum.
pub fn deposit_token(
    deps: DepsMut,
    env: Env,
    token: Addr,
    pool_id: u64,
    staker_addr: Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    assert_not_paused(&state)?;

    let pool = load_pool(deps.storage, &state, pool_id)?;
    match &pool.stake_asset {
        AssetInfo::Token { contract_addr } => {
            // only the staking token contract can execute this message
            if *contract_addr != token {
                return Err(ContractError::Unauthorized {});
            }
        }
        AssetInfo::NativeToken { .. } => return Err(ContractError::NotTokenPool { pool_id }),
    }

    if amount <= pool.min_deposit {
        return Err(ContractError::DepositBelowMinimum {
            amount,
            min_deposit: pool.min_deposit,
        });
    }

    deposit_internal(deps, env, &config, &state, pool_id, staker_addr, amount)
}

fn deposit_internal(
    deps: DepsMut,
    env: Env,
    config: &Config,
    state: &State,
    pool_id: u64,
    staker_addr: Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut pool = POOLS.load(deps.storage, pool_id)?;
    let mut user = read_user_info(deps.storage, pool_id, &staker_addr)?;

    // settle pool & user before changing stake
    compute_pool_reward(config, state.total_weight, &mut pool, env.block.height)?;
    settle_user(&pool, &mut user)?;

    user.staked_amount = user.staked_amount.checked_add(amount)?;
    pool.total_staked = pool.total_staked.checked_add(amount)?;
    refresh_reward_debt(&pool, &mut user)?;

    USER_INFOS.save(deps.storage, (pool_id, &staker_addr), &user)?;
    POOLS.save(deps.storage, pool_id, &pool)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "deposit"),
        attr("pool_id", pool_id.to_string()),
        attr("user", staker_addr.as_str()),
        attr("amount", amount),
    ]))
}

/// ## Description
/// Pays out the whole pending reward of the sender in `pool_id`.
/// When the contract holds less of the reward asset than owed, the available balance is paid
/// and the remainder is forfeited.
pub fn claim(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    pool_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;
    assert_claim_enabled(&state)?;

    let staker_addr = info.sender;
    let mut pool = load_pool(deps.storage, &state, pool_id)?;
    let mut user = read_user_info(deps.storage, pool_id, &staker_addr)?;

    compute_pool_reward(&config, state.total_weight, &mut pool, env.block.height)?;
    settle_user(&pool, &mut user)?;

    let owed = user.pending_reward;
    let available = if owed.is_zero() {
        Uint128::zero()
    } else {
        config
            .reward_asset
            .query_balance(&deps.querier, &env.contract.address)?
    };
    let amount = owed.min(available);

    user.pending_reward = Uint128::zero();
    refresh_reward_debt(&pool, &mut user)?;

    USER_INFOS.save(deps.storage, (pool_id, &staker_addr), &user)?;
    POOLS.save(deps.storage, pool_id, &pool)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !amount.is_zero() {
        messages.push(Asset::new(config.reward_asset, amount).transfer_msg(&staker_addr)?);
    }

    Ok(Response::new().add_messages(messages).add_attributes(vec![
        attr("action", "claim"),
        attr("pool_id", pool_id.to_string()),
        attr("user", staker_addr.as_str()),
        attr("amount", amount),
        attr("owed", owed),
    ]))
}
