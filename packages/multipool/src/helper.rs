use std::fmt;

use cosmwasm_std::{StdResult, Uint128, Uint256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed-point scale of [`RewardIndex`].
pub const REWARD_SCALE: u128 = 1_000_000_000_000_000_000u128;

/// ## Description
/// Cumulative reward per unit of stake, stored as an integer scaled by [`REWARD_SCALE`].
/// Every operation floors and fails on overflow instead of wrapping.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, JsonSchema,
)]
pub struct RewardIndex(Uint256);

impl RewardIndex {
    pub fn zero() -> Self {
        RewardIndex(Uint256::zero())
    }

    pub fn from_raw(raw: Uint256) -> Self {
        RewardIndex(raw)
    }

    pub fn raw(&self) -> Uint256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `numerator * REWARD_SCALE / denominator`, floored.
    pub fn checked_from_ratio(numerator: Uint128, denominator: Uint128) -> StdResult<Self> {
        let scaled = numerator.full_mul(REWARD_SCALE);
        Ok(RewardIndex(scaled.checked_div(Uint256::from(denominator))?))
    }

    pub fn checked_add(self, other: RewardIndex) -> StdResult<Self> {
        Ok(RewardIndex(self.0.checked_add(other.0)?))
    }

    /// `amount * self / REWARD_SCALE`, floored.
    pub fn checked_mul_floor(&self, amount: Uint128) -> StdResult<Uint128> {
        let product = Uint256::from(amount).checked_mul(self.0)?;
        let value = product.checked_div(Uint256::from(REWARD_SCALE))?;
        Ok(Uint128::try_from(value)?)
    }
}

impl fmt::Display for RewardIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait ScalingUint128 {
    fn checked_mul_ratio_floor(
        &self,
        numerator: impl Into<Uint128>,
        denominator: impl Into<Uint128>,
    ) -> StdResult<Uint128>;
}

impl ScalingUint128 for Uint128 {
    /// Multiply Uint128 by a ratio with a 256-bit intermediate, rounding down.
    fn checked_mul_ratio_floor(
        self: &Uint128,
        numerator: impl Into<Uint128>,
        denominator: impl Into<Uint128>,
    ) -> StdResult<Uint128> {
        let numerator: Uint128 = numerator.into();
        let denominator: Uint128 = denominator.into();
        let x = self.full_mul(numerator);
        let y = Uint256::from(denominator);
        Ok(Uint128::try_from(x.checked_div(y)?)?)
    }
}
