use cosmwasm_std::{attr, Addr, DepsMut, Env, Response, Uint128};

use crate::error::ContractError;
use crate::reward::settle_all_pools;
use crate::state::{Config, State, CONFIG, STATE};

/// ## Description
/// Proof that the message sender holds the owner capability.
/// It can only be obtained through [`AdminCap::check`], and every admin operation takes one.
#[derive(Debug)]
pub struct AdminCap(());

impl AdminCap {
    pub fn check(config: &Config, sender: &Addr) -> Result<AdminCap, ContractError> {
        if *sender != config.owner {
            return Err(ContractError::Unauthorized {});
        }
        Ok(AdminCap(()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseFlag {
    All,
    Withdraw,
    Claim,
}

impl PauseFlag {
    fn name(&self) -> &'static str {
        match self {
            PauseFlag::All => "contract",
            PauseFlag::Withdraw => "withdraw",
            PauseFlag::Claim => "claim",
        }
    }

    fn flag_mut<'a>(&self, state: &'a mut State) -> &'a mut bool {
        match self {
            PauseFlag::All => &mut state.paused,
            PauseFlag::Withdraw => &mut state.withdraw_paused,
            PauseFlag::Claim => &mut state.claim_paused,
        }
    }
}

pub fn assert_not_paused(state: &State) -> Result<(), ContractError> {
    if state.paused {
        return Err(ContractError::Paused {});
    }
    Ok(())
}

pub fn assert_withdraw_enabled(state: &State) -> Result<(), ContractError> {
    assert_not_paused(state)?;
    if state.withdraw_paused {
        return Err(ContractError::WithdrawPaused {});
    }
    Ok(())
}

pub fn assert_claim_enabled(state: &State) -> Result<(), ContractError> {
    assert_not_paused(state)?;
    if state.claim_paused {
        return Err(ContractError::ClaimPaused {});
    }
    Ok(())
}

/// Flips one pause flag. Setting a flag to its current value is rejected.
pub fn set_pause(
    deps: DepsMut,
    _cap: AdminCap,
    flag: PauseFlag,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut state = STATE.load(deps.storage)?;
    let current = flag.flag_mut(&mut state);
    if *current == paused {
        let flag = flag.name().to_string();
        return Err(if paused {
            ContractError::AlreadyPaused { flag }
        } else {
            ContractError::AlreadyUnpaused { flag }
        });
    }
    *current = paused;
    STATE.save(deps.storage, &state)?;

    let action = if paused { "pause" } else { "unpause" };
    Ok(Response::new().add_attributes(vec![
        attr("action", action),
        attr("flag", flag.name()),
    ]))
}

pub fn set_reward_start_block(
    deps: DepsMut,
    _cap: AdminCap,
    block: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    config.reward_start_block = block;
    config.validate()?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_reward_start_block"),
        attr("block", block.to_string()),
    ]))
}

pub fn set_reward_end_block(
    deps: DepsMut,
    _cap: AdminCap,
    block: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    config.reward_end_block = block;
    config.validate()?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_reward_end_block"),
        attr("block", block.to_string()),
    ]))
}

/// Every pool is settled at the old rate before the new rate applies.
pub fn set_reward_per_block(
    deps: DepsMut,
    env: Env,
    _cap: AdminCap,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    let state = STATE.load(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidRewardPerBlock {});
    }

    settle_all_pools(deps.storage, &config, &state, env.block.height)?;

    config.reward_per_block = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_reward_per_block"),
        attr("amount", amount),
    ]))
}
