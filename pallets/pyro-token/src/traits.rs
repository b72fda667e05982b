//! Collaborators the token pallet calls out to.

use sp_runtime::DispatchError;

/// Converts the accumulated tax reserve into exchange liquidity.
///
/// The pallet offers the whole reserve balance and afterwards moves exactly the
/// reported consumed amount from the reserve account to `pool`. Implementations
/// must not move the tokens themselves, and may consume less than offered.
pub trait LiquidityProvider<AccountId> {
    /// Provide up to `amount` tokens of liquidity to `pool`, returning how much was used.
    fn provide_liquidity(pool: &AccountId, amount: u128) -> Result<u128, DispatchError>;
}

/// No exchange attached: nothing is ever consumed.
impl<AccountId> LiquidityProvider<AccountId> for () {
    fn provide_liquidity(_pool: &AccountId, _amount: u128) -> Result<u128, DispatchError> {
        Ok(0)
    }
}
