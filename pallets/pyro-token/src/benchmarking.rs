//! Benchmarking setup for pallet-pyro-token

use super::*;

#[allow(unused)]
use crate::Pallet as PyroToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Install `who` as both owner and operator.
fn set_roles<T: Config>(who: &T::AccountId) {
    Owner::<T>::put(who);
    Operator::<T>::put(who);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        set_roles::<T>(&caller);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Pallet::<T>::mint_into(&caller, 10_000_000).expect("mint succeeds");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(TotalSupply::<T>::get(), 9_000_000);
    }

    // Worst case: taxed transfer that reaches the liquify threshold.
    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let pool: T::AccountId = account("pool", 0, 0);
        Pallet::<T>::mint_into(&caller, 10_000_000_000).expect("mint succeeds");
        LiquidityPool::<T>::put(&pool);
        Fees::<T>::mutate(|fees| {
            fees.liquify_enabled = true;
            fees.min_reserve_to_liquify = 1;
        });
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), 950_000);
    }

    #[benchmark]
    fn transfer_from() {
        let holder: T::AccountId = account("holder", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Pallet::<T>::mint_into(&holder, 10_000_000_000).expect("mint succeeds");
        Allowances::<T>::insert(&holder, &spender, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&holder, &spender), 0);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000);
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let nominee: T::AccountId = account("nominee", 0, 0);
        set_roles::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), nominee.clone());

        assert_eq!(PendingOwner::<T>::get(), Some(nominee));
    }

    #[benchmark]
    fn accept_ownership() {
        let owner: T::AccountId = account("owner", 0, 0);
        let nominee: T::AccountId = whitelisted_caller();
        set_roles::<T>(&owner);
        PendingOwner::<T>::put(&nominee);

        #[extrinsic_call]
        _(RawOrigin::Signed(nominee.clone()));

        assert_eq!(Owner::<T>::get(), Some(nominee));
    }

    #[benchmark]
    fn transfer_operator() {
        let caller: T::AccountId = whitelisted_caller();
        let operator: T::AccountId = account("operator", 0, 0);
        set_roles::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), operator.clone());

        assert_eq!(Operator::<T>::get(), Some(operator));
    }

    #[benchmark]
    fn update_rate() {
        let caller: T::AccountId = whitelisted_caller();
        set_roles::<T>(&caller);

        #[extrinsic_call]
        update_tax_rate(RawOrigin::Signed(caller), fee::MAX_TAX_RATE_BPS);

        assert_eq!(Fees::<T>::get().tax_rate_bps, fee::MAX_TAX_RATE_BPS);
    }

    #[benchmark]
    fn set_exclusion() {
        let caller: T::AccountId = whitelisted_caller();
        let account: T::AccountId = account("excluded", 0, 0);
        set_roles::<T>(&caller);

        #[extrinsic_call]
        set_excluded_from_cap(RawOrigin::Signed(caller), account.clone(), true);

        assert!(ExcludedFromCap::<T>::get(&account));
    }

    #[benchmark]
    fn set_liquify_config() {
        let caller: T::AccountId = whitelisted_caller();
        set_roles::<T>(&caller);

        #[extrinsic_call]
        set_min_reserve_to_liquify(RawOrigin::Signed(caller), 1_000);

        assert_eq!(Fees::<T>::get().min_reserve_to_liquify, 1_000);
    }

    impl_benchmark_test_suite!(PyroToken, crate::mock::new_test_ext(), crate::mock::Test);
}
