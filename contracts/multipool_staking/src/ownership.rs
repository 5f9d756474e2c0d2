use cosmwasm_std::{attr, Addr, DepsMut, Env, MessageInfo, Response, StdResult};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Longest time a proposal stays claimable, in seconds (14 days)
pub const MAX_PROPOSAL_TTL: u64 = 1_209_600;

/// ## Description
/// A pending change of contract ownership.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnershipProposal {
    /// The newly proposed owner
    pub owner: Addr,
    /// Block time after which the proposal can no longer be claimed
    pub ttl: u64,
}

/// ## Description
/// Creates a proposal to hand ownership to `new_owner`, valid for `expires_in` seconds.
/// Only the current owner can propose.
pub fn propose_new_owner(
    deps: DepsMut,
    info: MessageInfo,
    env: Env,
    new_owner: String,
    expires_in: u64,
    owner: Addr,
    proposal: Item<OwnershipProposal>,
) -> Result<Response, ContractError> {
    if info.sender != owner {
        return Err(ContractError::Unauthorized {});
    }

    let new_owner = deps.api.addr_validate(&new_owner)?;
    if new_owner == owner {
        return Err(ContractError::NewOwnerIsCurrentOwner {});
    }

    if expires_in > MAX_PROPOSAL_TTL {
        return Err(ContractError::InvalidProposalExpiry {
            max: MAX_PROPOSAL_TTL,
        });
    }

    proposal.save(
        deps.storage,
        &OwnershipProposal {
            owner: new_owner.clone(),
            ttl: env.block.time.seconds() + expires_in,
        },
    )?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "propose_new_owner"),
        attr("new_owner", new_owner),
    ]))
}

/// Removes a pending proposal. Only the current owner can drop it.
pub fn drop_ownership_proposal(
    deps: DepsMut,
    info: MessageInfo,
    owner: Addr,
    proposal: Item<OwnershipProposal>,
) -> Result<Response, ContractError> {
    if info.sender != owner {
        return Err(ContractError::Unauthorized {});
    }

    proposal.remove(deps.storage);

    Ok(Response::new().add_attributes(vec![attr("action", "drop_ownership_proposal")]))
}

/// ## Description
/// Lets the proposed owner take over. `callback` persists the new owner wherever the contract
/// keeps it.
pub fn claim_ownership(
    deps: DepsMut,
    info: MessageInfo,
    env: Env,
    proposal: Item<OwnershipProposal>,
    callback: fn(DepsMut, Addr) -> StdResult<()>,
) -> Result<Response, ContractError> {
    let p = proposal
        .may_load(deps.storage)?
        .ok_or(ContractError::OwnershipProposalNotFound {})?;

    if info.sender != p.owner {
        return Err(ContractError::Unauthorized {});
    }

    if env.block.time.seconds() > p.ttl {
        return Err(ContractError::OwnershipProposalExpired {});
    }

    proposal.remove(deps.storage);

    callback(deps, p.owner.clone())?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "claim_ownership"),
        attr("new_owner", p.owner),
    ]))
}
