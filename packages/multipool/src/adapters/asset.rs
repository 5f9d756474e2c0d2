use std::fmt;

use cosmwasm_std::{
    to_binary, Addr, Api, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ## Description
/// Identifies a stakeable or payable asset: either a cw20 token contract or a native coin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetInfo {
    Token { contract_addr: Addr },
    NativeToken { denom: String },
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetInfo::Token { contract_addr } => write!(f, "{}", contract_addr),
            AssetInfo::NativeToken { denom } => write!(f, "{}", denom),
        }
    }
}

impl AssetInfo {
    pub fn is_native_token(&self) -> bool {
        matches!(self, AssetInfo::NativeToken { .. })
    }

    /// Validates the token contract address. Native denoms are accepted as-is.
    pub fn check(&self, api: &dyn Api) -> StdResult<()> {
        if let AssetInfo::Token { contract_addr } = self {
            api.addr_validate(contract_addr.as_str())?;
        }
        Ok(())
    }

    /// Returns the balance of this asset held by `account`.
    pub fn query_balance(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Token { contract_addr } => {
                let res: BalanceResponse = querier.query_wasm_smart(
                    contract_addr.to_string(),
                    &Cw20QueryMsg::Balance {
                        address: account.to_string(),
                    },
                )?;
                Ok(res.balance)
            }
            AssetInfo::NativeToken { denom } => {
                Ok(querier.query_balance(account.to_string(), denom.to_string())?.amount)
            }
        }
    }

    /// Sums the coins of this native denom attached to a message.
    /// Returns `None` for tokens or when no such coin was sent.
    pub fn native_amount(&self, funds: &[Coin]) -> StdResult<Option<Uint128>> {
        match self {
            AssetInfo::Token { .. } => Ok(None),
            AssetInfo::NativeToken { denom } => {
                let mut coins = funds.iter().filter(|coin| coin.denom.eq(denom)).peekable();
                if coins.peek().is_none() {
                    return Ok(None);
                }
                let amount = coins.try_fold(Uint128::zero(), |acc, coin| {
                    acc.checked_add(coin.amount)
                })?;
                Ok(Some(amount))
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: Uint128) -> Self {
        Asset { info, amount }
    }

    pub fn transfer_msg(&self, to: &Addr) -> StdResult<CosmosMsg> {
        match &self.info {
            AssetInfo::Token { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: to.to_string(),
                    amount: self.amount,
                })?,
                funds: vec![],
            })),
            AssetInfo::NativeToken { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: to.to_string(),
                amount: vec![Coin {
                    denom: denom.to_string(),
                    amount: self.amount,
                }],
            })),
        }
    }
}
