//! External token interface the locker releases through.

use frame_support::{dispatch::DispatchResult, pallet_prelude::MaxEncodedLen, Parameter};

/// Minimal fungible-token surface: read a holder's balance and move it.
///
/// `TokenId` selects which token contract or asset a call refers to.
pub trait TokenContract<AccountId> {
    type TokenId: Parameter + MaxEncodedLen;

    fn balance_of(token: &Self::TokenId, who: &AccountId) -> u128;

    fn transfer(
        token: &Self::TokenId,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
    ) -> DispatchResult;
}
