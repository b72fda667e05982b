//! Weights for pallet-pyro-token.
//!
//! Hand-tuned upper bounds until benchmark output replaces them. The
//! `runtime-benchmarks` suite in `benchmarking.rs` covers every call listed here.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-pyro-token.
pub trait WeightInfo {
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn transfer_ownership() -> Weight;
    fn accept_ownership() -> Weight;
    fn transfer_operator() -> Weight;
    fn update_rate() -> Weight;
    fn set_exclusion() -> Weight;
    fn set_liquify_config() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn mint() -> Weight {
        Weight::from_parts(20_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(18_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    // Worst case includes the liquify settlement.
    fn transfer() -> Weight {
        Weight::from_parts(60_000_000, 6_196).saturating_add(T::DbWeight::get().reads_writes(12, 7))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(65_000_000, 6_196).saturating_add(T::DbWeight::get().reads_writes(13, 8))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn accept_ownership() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 2))
    }
    fn transfer_operator() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn update_rate() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn set_exclusion() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_liquify_config() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(20_000_000, 3_593).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(18_000_000, 3_593).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn transfer() -> Weight {
        Weight::from_parts(60_000_000, 6_196).saturating_add(RocksDbWeight::get().reads_writes(12, 7))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(65_000_000, 6_196).saturating_add(RocksDbWeight::get().reads_writes(13, 8))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn accept_ownership() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 2))
    }
    fn transfer_operator() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn update_rate() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn set_exclusion() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn set_liquify_config() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
}
