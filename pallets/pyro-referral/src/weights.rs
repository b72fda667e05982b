//! Weights for pallet-pyro-referral.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-pyro-referral.
pub trait WeightInfo {
    fn record_referral() -> Weight;
    fn record_referral_commission() -> Weight;
    fn update_operator() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn record_referral() -> Weight {
        Weight::from_parts(15_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn record_referral_commission() -> Weight {
        Weight::from_parts(12_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn update_operator() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
}

impl WeightInfo for () {
    fn record_referral() -> Weight {
        Weight::from_parts(15_000_000, 3_593).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn record_referral_commission() -> Weight {
        Weight::from_parts(12_000_000, 3_593).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn update_operator() -> Weight {
        Weight::from_parts(8_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
}
