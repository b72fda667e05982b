//! Weights for pallet-pyro-locker.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-pyro-locker.
pub trait WeightInfo {
    fn release_custody() -> Weight;
}

/// Weights using the runtime's configured database weights. The external
/// token's own reads and writes are included as two of each.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn release_custody() -> Weight {
        Weight::from_parts(35_000_000, 6_196).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
}

impl WeightInfo for () {
    fn release_custody() -> Weight {
        Weight::from_parts(35_000_000, 6_196).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
}
