//! # Pyro Referral Pallet
//!
//! Records who referred whom and how much commission each referrer earned.
//! Writes come from an allow-list of operators (typically other pallets'
//! accounts or keepers) managed by the admin origin.
//!
//! A user's referrer is written once. Attempts to record a null, self or
//! second referrer are accepted and ignored rather than rejected, so callers
//! can record on every deposit without checking first.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::Encode;
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::pyro-referral";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Origin allowed to grant and revoke the operator status.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Accounts allowed to record referrals and commissions
    #[pallet::storage]
    #[pallet::getter(fn operators)]
    pub type Operators<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// user -> referrer
    #[pallet::storage]
    #[pallet::getter(fn referrer_of)]
    pub type Referrers<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn referrals_count)]
    pub type ReferralsCount<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u32, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn total_referral_commissions)]
    pub type TotalReferralCommissions<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        ReferralRecorded { user: T::AccountId, referrer: T::AccountId },
        ReferralCommissionRecorded { referrer: T::AccountId, commission: u128 },
        OperatorUpdated { operator: T::AccountId, status: bool },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not on the operator allow-list.
        NotOperator,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::record_referral())]
        pub fn record_referral(
            origin: OriginFor<T>,
            user: T::AccountId,
            referrer: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_operator(origin)?;
            Self::do_record_referral(user, referrer)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::record_referral_commission())]
        pub fn record_referral_commission(
            origin: OriginFor<T>,
            referrer: T::AccountId,
            commission: u128,
        ) -> DispatchResult {
            Self::ensure_operator(origin)?;
            if Self::is_null(&referrer) || commission == 0 {
                return Ok(());
            }
            TotalReferralCommissions::<T>::try_mutate(&referrer, |total| -> DispatchResult {
                *total = total.checked_add(commission).ok_or(Error::<T>::Overflow)?;
                Ok(())
            })?;
            Self::deposit_event(Event::ReferralCommissionRecorded { referrer, commission });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::update_operator())]
        pub fn update_operator(
            origin: OriginFor<T>,
            operator: T::AccountId,
            status: bool,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            if status {
                Operators::<T>::insert(&operator, true);
            } else {
                Operators::<T>::remove(&operator);
            }
            Self::deposit_event(Event::OperatorUpdated { operator, status });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Accounts holding the operator status at genesis
        pub operators: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for operator in &self.operators {
                Operators::<T>::insert(operator, true);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    fn ensure_operator(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Operators::<T>::get(&who), Error::<T>::NotOperator);
        Ok(who)
    }

    /// Whether `who` is the all-zero account.
    pub fn is_null(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    fn do_record_referral(user: T::AccountId, referrer: T::AccountId) -> DispatchResult {
        if Self::is_null(&user) ||
            Self::is_null(&referrer) ||
            user == referrer ||
            Referrers::<T>::contains_key(&user)
        {
            log::debug!(target: LOG_TARGET, "ignoring referral of {user:?} by {referrer:?}");
            return Ok(());
        }

        ReferralsCount::<T>::try_mutate(&referrer, |count| -> DispatchResult {
            *count = count.checked_add(1).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })?;
        Referrers::<T>::insert(&user, &referrer);
        Self::deposit_event(Event::ReferralRecorded { user, referrer });
        Ok(())
    }

    /// No referrer is null or refers itself, and each referrer's count matches
    /// the users recorded against it.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let mut recorded = sp_std::collections::btree_map::BTreeMap::<T::AccountId, u32>::new();
        for (user, referrer) in Referrers::<T>::iter() {
            ensure!(!Self::is_null(&user) && !Self::is_null(&referrer), "null account in referral");
            ensure!(user != referrer, "account refers itself");
            let count = recorded.entry(referrer).or_default();
            *count = count.checked_add(1).ok_or("referral count overflows")?;
        }
        for (referrer, count) in ReferralsCount::<T>::iter() {
            ensure!(
                recorded.remove(&referrer).unwrap_or_default() == count,
                "referral count differs from recorded referrals"
            );
        }
        ensure!(recorded.is_empty(), "recorded referrals without a count");
        Ok(())
    }
}
