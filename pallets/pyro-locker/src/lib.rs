//! # Pyro Locker Pallet
//!
//! Holds balances of arbitrary external tokens (for example LP tokens) on a
//! pallet-owned account. Tokens are locked simply by transferring them to
//! [`Pallet::account_id`]; only the admin origin can release them, and a
//! release always moves the full held balance of one token.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::Encode;
use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin, PalletId,
};
use frame_system::pallet_prelude::*;
use sp_runtime::traits::AccountIdConversion;

pub use pallet::*;

pub mod traits;
pub mod weights;

pub use traits::TokenContract;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::pyro-locker";

pub type TokenIdOf<T> = <<T as Config>::Tokens as TokenContract<
    <T as frame_system::Config>::AccountId,
>>::TokenId;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to release custody (the owner).
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Derives the account that holds locked tokens.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Token contracts whose balances the locker can hold.
        type Tokens: TokenContract<Self::AccountId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// The whole locked balance of `token` was sent to `destination`
        CustodyReleased { token: TokenIdOf<T>, destination: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The null account was given as destination.
        InvalidAddress,
        /// The token contract refused the transfer.
        ExternalCollaboratorFailure,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::release_custody())]
        pub fn release_custody(
            origin: OriginFor<T>,
            token: TokenIdOf<T>,
            destination: T::AccountId,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(!Self::is_null(&destination), Error::<T>::InvalidAddress);

            let custodian = Self::account_id();
            let amount = T::Tokens::balance_of(&token, &custodian);
            T::Tokens::transfer(&token, &custodian, &destination, amount).map_err(|e| {
                log::warn!(target: LOG_TARGET, "release of {amount} {token:?} failed: {e:?}");
                Error::<T>::ExternalCollaboratorFailure
            })?;

            log::debug!(target: LOG_TARGET, "released {amount} {token:?} to {destination:?}");
            Self::deposit_event(Event::CustodyReleased { token, destination, amount });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account holding locked tokens.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Whether `who` is the all-zero account.
    pub fn is_null(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    /// Balance of `token` currently held in custody.
    pub fn locked_balance(token: &TokenIdOf<T>) -> u128 {
        T::Tokens::balance_of(token, &Self::account_id())
    }
}
