//! # Pyro Token Pallet
//!
//! A fungible token whose transfers carry a tax. Part of every taxed transfer
//! is routed to a burn sink, the rest accumulates in the pallet's reserve
//! account and is periodically handed to an exchange as liquidity. A per-transfer
//! cap proportional to total supply limits single large transfers.
//!
//! ## Roles
//!
//! - **Owner**: mints. Hands over ownership in two steps
//!   ([`Pallet::transfer_ownership`] then [`Pallet::accept_ownership`]).
//! - **Operator**: tunes rates, exclusions and liquify settings. Defaults to the
//!   owner at genesis and is handed over with [`Pallet::transfer_operator`].
//!
//! ## Accounting
//!
//! Fee burns move balance to [`Config::BurnAccount`] and leave
//! [`TotalSupply`] untouched. Only [`Pallet::burn`] reduces supply. The sum of
//! all balances always equals total supply; `try_state` checks it.

#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated storage getters until the runtime API crate replaces them
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer, PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_runtime::{traits::AccountIdConversion, RuntimeDebug};
use sp_std::prelude::*;

pub use pallet::*;

pub mod anti_whale;
pub mod fee;
pub mod traits;
pub mod weights;

pub use fee::FeeSplit;
pub use traits::LiquidityProvider;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::pyro-token";

/// Default transfer tax: 5%.
pub const DEFAULT_TAX_RATE_BPS: u16 = 500;
/// Default share of the tax that is burned: 20%.
pub const DEFAULT_BURN_RATE: u16 = 20;
/// Default anti-whale cap: 0.5% of total supply.
pub const DEFAULT_MAX_TRANSFER_RATE_BPS: u16 = 50;
/// Default reserve threshold for liquify: 500 tokens at 18 decimals.
pub const DEFAULT_MIN_RESERVE_TO_LIQUIFY: u128 = 500_000_000_000_000_000_000;

/// Rate and liquify configuration applied to every transfer.
#[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct FeeConfig {
    /// Transfer tax in basis points, at most [`fee::MAX_TAX_RATE_BPS`].
    pub tax_rate_bps: u16,
    /// Percentage of the tax sent to the burn sink, at most [`fee::MAX_BURN_RATE`].
    pub burn_rate: u16,
    /// Anti-whale cap in basis points of total supply, in `1..=10_000`.
    pub max_transfer_rate_bps: u16,
    pub liquify_enabled: bool,
    /// Reserve balance at which a transfer triggers liquify.
    pub min_reserve_to_liquify: u128,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            burn_rate: DEFAULT_BURN_RATE,
            max_transfer_rate_bps: DEFAULT_MAX_TRANSFER_RATE_BPS,
            liquify_enabled: false,
            min_reserve_to_liquify: DEFAULT_MIN_RESERVE_TO_LIQUIFY,
        }
    }
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Derives the reserve account that holds collected tax.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Unspendable sink receiving the burned share of the tax.
        #[pallet::constant]
        type BurnAccount: Get<Self::AccountId>;

        /// Exchange collaborator that turns the reserve into liquidity.
        type Liquidity: LiquidityProvider<Self::AccountId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (holder, spender)
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Owner nominated by [`Pallet::transfer_ownership`], waiting to accept.
    #[pallet::storage]
    #[pallet::getter(fn pending_owner)]
    pub type PendingOwner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Owner the token was deployed with. Stays excluded from the cap for good,
    /// even after ownership moves on.
    #[pallet::storage]
    #[pallet::getter(fn genesis_owner)]
    pub type GenesisOwner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn operator)]
    pub type Operator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn fee_config)]
    pub type Fees<T> = StorageValue<_, FeeConfig, ValueQuery>;

    /// Accounts exempt from the transfer tax
    #[pallet::storage]
    pub type ExcludedFromFee<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Accounts exempt from the anti-whale cap
    #[pallet::storage]
    pub type ExcludedFromCap<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Account receiving liquified reserve. Liquify is inert while unset.
    #[pallet::storage]
    #[pallet::getter(fn liquidity_pool)]
    pub type LiquidityPool<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Set while the liquidity collaborator runs.
    #[pallet::storage]
    pub type InLiquify<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred, after tax
        Transferred {
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
            net: u128,
            burned: u128,
            reserved: u128,
        },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens removed from total supply
        Burned { from: T::AccountId, amount: u128 },
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        OwnershipTransferStarted { previous_owner: Option<T::AccountId>, new_owner: T::AccountId },
        OwnershipTransferred { previous_owner: Option<T::AccountId>, new_owner: T::AccountId },
        OperatorTransferred { previous_operator: Option<T::AccountId>, new_operator: T::AccountId },
        TaxRateUpdated { previous_rate: u16, new_rate: u16 },
        BurnRateUpdated { previous_rate: u16, new_rate: u16 },
        MaxTransferRateUpdated { previous_rate: u16, new_rate: u16 },
        CapExclusionSet { account: T::AccountId, excluded: bool },
        FeeExclusionSet { account: T::AccountId, excluded: bool },
        LiquifyEnabledUpdated { enabled: bool },
        MinReserveToLiquifyUpdated { previous_amount: u128, new_amount: u128 },
        LiquidityPoolUpdated { pool: T::AccountId },
        /// Reserve offered to the liquidity collaborator and the part it consumed
        Liquified { pool: T::AccountId, offered: u128, consumed: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the call requires.
        Unauthorized,
        /// The null account was given where a real account is required.
        InvalidAddress,
        InsufficientBalance,
        InsufficientAllowance,
        /// Transfer exceeds the anti-whale cap.
        CapExceeded,
        /// Setter argument outside its documented range.
        RateOutOfBounds,
        /// The liquidity collaborator failed or over-reported consumption.
        ExternalCollaboratorFailure,
        Overflow,
        /// The burn sink and reserve account cannot lose their exclusions.
        PermanentlyExcluded,
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
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::mint_into(&to, amount)?;
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)?;
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!Self::is_null(&spender), Error::<T>::InvalidAddress);
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        /// Move `amount` out of `from` using the caller's allowance.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::do_transfer(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Ok(())
        }

        /// Destroy `amount` of the caller's tokens, reducing total supply.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::burn_from_supply(&who, amount)?;
            Self::deposit_event(Event::Burned { from: who, amount });
            Ok(())
        }

        /// Nominate a new owner. Takes effect once they call [`Pallet::accept_ownership`].
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let owner = Self::ensure_owner(origin)?;
            ensure!(!Self::is_null(&new_owner), Error::<T>::InvalidAddress);
            PendingOwner::<T>::put(&new_owner);
            Self::deposit_event(Event::OwnershipTransferStarted {
                previous_owner: Some(owner),
                new_owner,
            });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::accept_ownership())]
        pub fn accept_ownership(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(PendingOwner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
            PendingOwner::<T>::kill();
            let previous_owner = Owner::<T>::get();
            Owner::<T>::put(&who);
            Self::deposit_event(Event::OwnershipTransferred { previous_owner, new_owner: who });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer_operator())]
        pub fn transfer_operator(
            origin: OriginFor<T>,
            new_operator: T::AccountId,
        ) -> DispatchResult {
            let operator = Self::ensure_operator(origin)?;
            ensure!(!Self::is_null(&new_operator), Error::<T>::InvalidAddress);
            Operator::<T>::put(&new_operator);
            Self::deposit_event(Event::OperatorTransferred {
                previous_operator: Some(operator),
                new_operator,
            });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::update_rate())]
        pub fn update_tax_rate(origin: OriginFor<T>, rate_bps: u16) -> DispatchResult {
            Self::ensure_operator(origin)?;
            ensure!(rate_bps <= fee::MAX_TAX_RATE_BPS, Error::<T>::RateOutOfBounds);
            let previous_rate = Fees::<T>::mutate(|fees| {
                sp_std::mem::replace(&mut fees.tax_rate_bps, rate_bps)
            });
            Self::deposit_event(Event::TaxRateUpdated { previous_rate, new_rate: rate_bps });
            Ok(())
        }

        /// Set the share of the tax that is burned, as a percentage.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::update_rate())]
        pub fn update_burn_rate(origin: OriginFor<T>, rate: u16) -> DispatchResult {
            Self::ensure_operator(origin)?;
            ensure!(rate <= fee::MAX_BURN_RATE, Error::<T>::RateOutOfBounds);
            let previous_rate =
                Fees::<T>::mutate(|fees| sp_std::mem::replace(&mut fees.burn_rate, rate));
            Self::deposit_event(Event::BurnRateUpdated { previous_rate, new_rate: rate });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::update_rate())]
        pub fn update_max_transfer_rate(origin: OriginFor<T>, rate_bps: u16) -> DispatchResult {
            Self::ensure_operator(origin)?;
            ensure!(
                rate_bps > 0 && rate_bps <= anti_whale::MAX_TRANSFER_RATE_BPS,
                Error::<T>::RateOutOfBounds
            );
            let previous_rate = Fees::<T>::mutate(|fees| {
                sp_std::mem::replace(&mut fees.max_transfer_rate_bps, rate_bps)
            });
            Self::deposit_event(Event::MaxTransferRateUpdated { previous_rate, new_rate: rate_bps });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::set_exclusion())]
        pub fn set_excluded_from_cap(
            origin: OriginFor<T>,
            account: T::AccountId,
            excluded: bool,
        ) -> DispatchResult {
            Self::ensure_operator(origin)?;
            ensure!(
                excluded || !Self::is_permanently_excluded_from_cap(&account),
                Error::<T>::PermanentlyExcluded
            );
            ExcludedFromCap::<T>::insert(&account, excluded);
            Self::deposit_event(Event::CapExclusionSet { account, excluded });
            Ok(())
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::set_exclusion())]
        pub fn set_excluded_from_fee(
            origin: OriginFor<T>,
            account: T::AccountId,
            excluded: bool,
        ) -> DispatchResult {
            Self::ensure_operator(origin)?;
            ensure!(
                excluded || !Self::is_permanently_excluded(&account),
                Error::<T>::PermanentlyExcluded
            );
            ExcludedFromFee::<T>::insert(&account, excluded);
            Self::deposit_event(Event::FeeExclusionSet { account, excluded });
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::set_liquify_config())]
        pub fn set_liquify_enabled(origin: OriginFor<T>, enabled: bool) -> DispatchResult {
            Self::ensure_operator(origin)?;
            Fees::<T>::mutate(|fees| fees.liquify_enabled = enabled);
            Self::deposit_event(Event::LiquifyEnabledUpdated { enabled });
            Ok(())
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::set_liquify_config())]
        pub fn set_min_reserve_to_liquify(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            Self::ensure_operator(origin)?;
            let previous_amount = Fees::<T>::mutate(|fees| {
                sp_std::mem::replace(&mut fees.min_reserve_to_liquify, amount)
            });
            Self::deposit_event(Event::MinReserveToLiquifyUpdated {
                previous_amount,
                new_amount: amount,
            });
            Ok(())
        }

        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::set_liquify_config())]
        pub fn set_liquidity_pool(origin: OriginFor<T>, pool: T::AccountId) -> DispatchResult {
            Self::ensure_operator(origin)?;
            ensure!(!Self::is_null(&pool), Error::<T>::InvalidAddress);
            LiquidityPool::<T>::put(&pool);
            Self::deposit_event(Event::LiquidityPoolUpdated { pool });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner, permanently excluded from the anti-whale cap
        pub owner: Option<T::AccountId>,
        /// Initial operator; falls back to the owner
        pub operator: Option<T::AccountId>,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
        /// Additional accounts exempt from the anti-whale cap
        pub cap_excluded: Vec<T::AccountId>,
        /// Accounts exempt from the transfer tax
        pub fee_excluded: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
                GenesisOwner::<T>::put(owner);
                ExcludedFromCap::<T>::insert(owner, true);
            }
            if let Some(operator) = self.operator.as_ref().or(self.owner.as_ref()) {
                Operator::<T>::put(operator);
            }

            for account in &self.cap_excluded {
                ExcludedFromCap::<T>::insert(account, true);
            }
            for account in &self.fee_excluded {
                ExcludedFromFee::<T>::insert(account, true);
            }

            for (account, amount) in &self.initial_balances {
                Pallet::<T>::mint_into(account, *amount)
                    .expect("Genesis balances must be non-null and must not overflow");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account holding the accumulated tax reserve.
    pub fn reserve_account() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Whether `who` is the all-zero account.
    pub fn is_null(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    fn is_permanently_excluded(who: &T::AccountId) -> bool {
        *who == T::BurnAccount::get() || *who == Self::reserve_account()
    }

    pub fn is_excluded_from_fee(who: &T::AccountId) -> bool {
        Self::is_permanently_excluded(who) || ExcludedFromFee::<T>::get(who)
    }

    fn is_permanently_excluded_from_cap(who: &T::AccountId) -> bool {
        Self::is_permanently_excluded(who) || GenesisOwner::<T>::get().as_ref() == Some(who)
    }

    pub fn is_excluded_from_cap(who: &T::AccountId) -> bool {
        Self::is_permanently_excluded_from_cap(who) || ExcludedFromCap::<T>::get(who)
    }

    /// Current anti-whale cap, or `None` if it cannot be represented.
    pub fn max_transfer_amount() -> Option<u128> {
        anti_whale::max_transfer_amount(
            TotalSupply::<T>::get(),
            Fees::<T>::get().max_transfer_rate_bps,
        )
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    fn ensure_operator(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Operator::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    // ------------------------------------------------------------------
    // Balance ledger primitives. None of these apply tax or cap checks.
    // ------------------------------------------------------------------

    /// Credit `amount` of new tokens to `to`.
    pub fn mint_into(to: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Self::is_null(to), Error::<T>::InvalidAddress);
        let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);
        Ok(())
    }

    /// Move `amount` from `from` to `to` with no fees applied.
    pub fn transfer_raw(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        if from == to || amount == 0 {
            return Ok(());
        }
        let to_balance = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
        Balances::<T>::insert(from, from_balance);
        Balances::<T>::insert(to, to_balance);
        Ok(())
    }

    /// Move `amount` from `from` to the burn sink. Total supply is unchanged.
    pub fn burn_to_sink(from: &T::AccountId, amount: u128) -> DispatchResult {
        Self::transfer_raw(from, &T::BurnAccount::get(), amount)
    }

    /// Remove `amount` of `from`'s tokens from circulation, reducing total supply.
    pub fn burn_from_supply(from: &T::AccountId, amount: u128) -> DispatchResult {
        let balance =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;
        Balances::<T>::insert(from, balance);
        TotalSupply::<T>::put(supply);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Transfer engine
    // ------------------------------------------------------------------

    /// Execute a taxed, capped transfer and trigger liquify when due.
    ///
    /// Runs in its own storage layer: on error no write of this call survives,
    /// including writes made by a re-entrant collaborator.
    pub fn do_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> Result<FeeSplit, DispatchError> {
        with_storage_layer(|| {
            ensure!(!Self::is_null(from) && !Self::is_null(to), Error::<T>::InvalidAddress);
            ensure!(Balances::<T>::get(from) >= amount, Error::<T>::InsufficientBalance);

            let fees = Fees::<T>::get();
            let within_cap = anti_whale::check_cap(
                amount,
                TotalSupply::<T>::get(),
                fees.max_transfer_rate_bps,
                Self::is_excluded_from_cap(from),
                Self::is_excluded_from_cap(to),
            )
            .ok_or(Error::<T>::Overflow)?;
            ensure!(within_cap, Error::<T>::CapExceeded);

            let split = fee::compute_split(
                amount,
                fees.tax_rate_bps,
                fees.burn_rate,
                Self::is_excluded_from_fee(from),
                Self::is_excluded_from_fee(to),
            )
            .ok_or(Error::<T>::Overflow)?;

            Self::transfer_raw(from, to, split.net)?;
            Self::burn_to_sink(from, split.burn_part)?;
            Self::transfer_raw(from, &Self::reserve_account(), split.reserve_part)?;

            Self::deposit_event(Event::Transferred {
                from: from.clone(),
                to: to.clone(),
                amount,
                net: split.net,
                burned: split.burn_part,
                reserved: split.reserve_part,
            });

            Self::maybe_liquify(to, &fees)?;
            Ok(split)
        })
    }

    /// Hand the reserve to the liquidity collaborator once it reaches the threshold.
    fn maybe_liquify(to: &T::AccountId, fees: &FeeConfig) -> DispatchResult {
        if !fees.liquify_enabled || InLiquify::<T>::get() {
            return Ok(());
        }
        let reserve = Self::reserve_account();
        if *to == reserve {
            return Ok(());
        }
        let Some(pool) = LiquidityPool::<T>::get() else {
            return Ok(());
        };
        let offered = Balances::<T>::get(&reserve);
        if offered == 0 || offered < fees.min_reserve_to_liquify {
            return Ok(());
        }

        InLiquify::<T>::put(true);
        let outcome = T::Liquidity::provide_liquidity(&pool, offered);
        InLiquify::<T>::kill();

        let consumed = outcome.map_err(|e| {
            log::warn!(target: LOG_TARGET, "liquidity provision of {offered} failed: {e:?}");
            Error::<T>::ExternalCollaboratorFailure
        })?;
        if consumed > offered {
            log::warn!(
                target: LOG_TARGET,
                "liquidity collaborator reported {consumed} consumed out of {offered} offered"
            );
            return Err(Error::<T>::ExternalCollaboratorFailure.into());
        }

        Self::transfer_raw(&reserve, &pool, consumed)?;
        log::debug!(target: LOG_TARGET, "liquified {consumed} of {offered} reserve into pool");
        Self::deposit_event(Event::Liquified { pool, offered, consumed });
        Ok(())
    }

    /// Sum of balances equals total supply, rates are within bounds and no
    /// liquify is left in flight.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T>::get(), "sum of balances differs from total supply");

        let fees = Fees::<T>::get();
        ensure!(fees.tax_rate_bps <= fee::MAX_TAX_RATE_BPS, "tax rate above maximum");
        ensure!(fees.burn_rate <= fee::MAX_BURN_RATE, "burn rate above maximum");
        ensure!(
            fees.max_transfer_rate_bps > 0 &&
                fees.max_transfer_rate_bps <= anti_whale::MAX_TRANSFER_RATE_BPS,
            "max transfer rate out of range"
        );
        ensure!(!InLiquify::<T>::get(), "liquify flag left set");
        Ok(())
    }
}
