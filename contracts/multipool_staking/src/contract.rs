#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    attr, from_binary, to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
};
use cw2::set_contract_version;
use cw20::Cw20ReceiveMsg;

use multipool::staking::{Cw20HookMsg, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

use crate::admin::{
    set_pause, set_reward_end_block, set_reward_per_block, set_reward_start_block, AdminCap,
    PauseFlag,
};
use crate::error::ContractError;
use crate::ownership::{claim_ownership, drop_ownership_proposal, propose_new_owner};
use crate::pool::{add_pool, mass_update_pools, set_pool_weight, update_pool, update_pool_policy};
use crate::position::{claim, deposit_native, deposit_token};
use crate::query::{
    query_all_user_infos, query_config, query_pending_reward, query_pool_info, query_pools,
    query_reward_multiplier, query_staked_balance, query_state, query_user_info,
    query_withdraw_queue,
};
use crate::state::{Config, State, CONFIG, OWNERSHIP_PROPOSAL, STATE};
use crate::unstake::{unstake, withdraw};

/// Contract name that is used for migration.
const CONTRACT_NAME: &str = "multipool-staking";
/// Contract version that is used for migration.
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// ## Description
/// Creates a new contract with the specified parameters in [`InstantiateMsg`].
/// No pool exists yet; the first `AddPool` must register the native coin.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    msg.reward_asset.check(deps.api)?;
    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        reward_asset: msg.reward_asset,
        native_denom: msg.native_denom,
        reward_start_block: msg.reward_start_block,
        reward_end_block: msg.reward_end_block,
        reward_per_block: msg.reward_per_block,
    };
    config.validate()?;
    CONFIG.save(deps.storage, &config)?;

    STATE.save(
        deps.storage,
        &State {
            total_weight: 0,
            pool_length: 0,
            paused: false,
            withdraw_paused: false,
            claim_paused: false,
        },
    )?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "instantiate"),
        attr("owner", config.owner.as_str()),
        attr("reward_asset", config.reward_asset.to_string()),
    ]))
}

/// ## Description
/// Exposes execute functions available in the contract.
/// Admin messages are only dispatched once the sender has proven ownership through [`AdminCap`].
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Receive(msg) => receive_cw20(deps, env, info, msg),
        ExecuteMsg::DepositNative {} => deposit_native(deps, env, info),
        ExecuteMsg::Unstake { pool_id, amount } => unstake(deps, env, info, pool_id, amount),
        ExecuteMsg::Withdraw { pool_id } => withdraw(deps, env, info, pool_id),
        ExecuteMsg::Claim { pool_id } => claim(deps, env, info, pool_id),
        ExecuteMsg::UpdatePool { pool_id } => update_pool(deps, env, pool_id),
        ExecuteMsg::MassUpdatePools {} => mass_update_pools(deps, env),
        ExecuteMsg::AddPool {
            stake_asset,
            weight,
            min_deposit,
            unstake_lock_blocks,
            with_update,
        } => {
            let cap = admin_cap(deps.as_ref(), &info)?;
            add_pool(
                deps,
                env,
                cap,
                stake_asset,
                weight,
                min_deposit,
                unstake_lock_blocks,
                with_update,
            )
        }
        ExecuteMsg::SetPoolWeight {
            pool_id,
            weight,
            with_update,
        } => {
            let cap = admin_cap(deps.as_ref(), &info)?;
            set_pool_weight(deps, env, cap, pool_id, weight, with_update)
        }
        ExecuteMsg::UpdatePoolPolicy {
            pool_id,
            min_deposit,
            unstake_lock_blocks,
        } => {
            let cap = admin_cap(deps.as_ref(), &info)?;
            update_pool_policy(deps, cap, pool_id, min_deposit, unstake_lock_blocks)
        }
        ExecuteMsg::SetRewardStartBlock { block } => {
            let cap = admin_cap(deps.as_ref(), &info)?;
            set_reward_start_block(deps, cap, block)
        }
        ExecuteMsg::SetRewardEndBlock { block } => {
            let cap = admin_cap(deps.as_ref(), &info)?;
            set_reward_end_block(deps, cap, block)
        }
        ExecuteMsg::SetRewardPerBlock { amount } => {
            let cap = admin_cap(deps.as_ref(), &info)?;
            set_reward_per_block(deps, env, cap, amount)
        }
        ExecuteMsg::PauseWithdraw {} => pause(deps, info, PauseFlag::Withdraw, true),
        ExecuteMsg::UnpauseWithdraw {} => pause(deps, info, PauseFlag::Withdraw, false),
        ExecuteMsg::PauseClaim {} => pause(deps, info, PauseFlag::Claim, true),
        ExecuteMsg::UnpauseClaim {} => pause(deps, info, PauseFlag::Claim, false),
        ExecuteMsg::Pause {} => pause(deps, info, PauseFlag::All, true),
        ExecuteMsg::Unpause {} => pause(deps, info, PauseFlag::All, false),
        ExecuteMsg::ProposeNewOwner { owner, expires_in } => {
            let config: Config = CONFIG.load(deps.storage)?;

            propose_new_owner(
                deps,
                info,
                env,
                owner,
                expires_in,
                config.owner,
                OWNERSHIP_PROPOSAL,
            )
        }
        ExecuteMsg::DropOwnershipProposal {} => {
            let config: Config = CONFIG.load(deps.storage)?;

            drop_ownership_proposal(deps, info, config.owner, OWNERSHIP_PROPOSAL)
        }
        ExecuteMsg::ClaimOwnership {} => {
            claim_ownership(deps, info, env, OWNERSHIP_PROPOSAL, |deps, new_owner| {
                CONFIG.update::<_, StdError>(deps.storage, |mut v| {
                    v.owner = new_owner;
                    Ok(v)
                })?;

                Ok(())
            })
        }
    }
}

fn admin_cap(deps: Deps, info: &MessageInfo) -> Result<AdminCap, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    AdminCap::check(&config, &info.sender)
}

fn pause(
    deps: DepsMut,
    info: MessageInfo,
    flag: PauseFlag,
    paused: bool,
) -> Result<Response, ContractError> {
    let cap = admin_cap(deps.as_ref(), &info)?;
    set_pause(deps, cap, flag, paused)
}

/// ## Description
/// Receives a message of type [`Cw20ReceiveMsg`] and processes it depending on the received template.
/// `info.sender` is the cw20 contract the tokens came from.
fn receive_cw20(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    match from_binary(&cw20_msg.msg) {
        Ok(Cw20HookMsg::Deposit {
            pool_id,
            staker_addr,
        }) => {
            let staker_addr = deps
                .api
                .addr_validate(&staker_addr.unwrap_or(cw20_msg.sender))?;
            deposit_token(deps, env, info.sender, pool_id, staker_addr, cw20_msg.amount)
        }
        Err(_) => Err(ContractError::InvalidMessage {}),
    }
}

/// ## Description
/// Exposes all the queries available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_binary(&query_config(deps)?)?),
        QueryMsg::State {} => Ok(to_binary(&query_state(deps)?)?),
        QueryMsg::PoolInfo { pool_id } => Ok(to_binary(&query_pool_info(deps, pool_id)?)?),
        QueryMsg::Pools { start_after, limit } => {
            Ok(to_binary(&query_pools(deps, start_after, limit)?)?)
        }
        QueryMsg::UserInfo { pool_id, user } => {
            Ok(to_binary(&query_user_info(deps, pool_id, user)?)?)
        }
        QueryMsg::AllUserInfos {
            pool_id,
            start_after,
            limit,
        } => Ok(to_binary(&query_all_user_infos(
            deps,
            pool_id,
            start_after,
            limit,
        )?)?),
        QueryMsg::PendingReward {
            pool_id,
            user,
            block_height,
        } => Ok(to_binary(&query_pending_reward(
            deps,
            env,
            pool_id,
            user,
            block_height,
        )?)?),
        QueryMsg::StakedBalance { pool_id, user } => {
            Ok(to_binary(&query_staked_balance(deps, pool_id, user)?)?)
        }
        QueryMsg::WithdrawQueue { pool_id, user } => {
            Ok(to_binary(&query_withdraw_queue(deps, env, pool_id, user)?)?)
        }
        QueryMsg::RewardMultiplier { from, to } => {
            Ok(to_binary(&query_reward_multiplier(deps, from, to)?)?)
        }
    }
}

/// ## Description
/// Used for contract migration. Returns a default object of type [`Response`].
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
