use crate as pallet_pyro_locker;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError, DispatchResult,
};
use std::collections::BTreeMap;

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        PyroLocker: pallet_pyro_locker,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CAROL: u64 = 3;
pub const OWNER: u64 = 4;

pub const LP1: u32 = 1;
pub const LP2: u32 = 2;

parameter_types! {
    pub const AdminAccount: u64 = OWNER;
    pub const LockerPalletId: PalletId = PalletId(*b"py/lockr");
    /// (token, holder) -> balance of the mock token contracts
    pub static TokenBalances: BTreeMap<(u32, u64), u128> = BTreeMap::new();
    pub static RejectTransfers: bool = false;
}

pub struct EnsureAdmin;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureAdmin {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == AdminAccount::get() => {
                Ok(account)
            },
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(AdminAccount::get()))
    }
}

/// BEP20-like token contracts backed by a thread-local map.
pub struct MockTokens;
impl crate::TokenContract<u64> for MockTokens {
    type TokenId = u32;

    fn balance_of(token: &u32, who: &u64) -> u128 {
        TokenBalances::get().get(&(*token, *who)).copied().unwrap_or_default()
    }

    fn transfer(token: &u32, from: &u64, to: &u64, amount: u128) -> DispatchResult {
        if RejectTransfers::get() {
            return Err(DispatchError::Other("token contract rejected transfer"));
        }
        TokenBalances::mutate(|balances| {
            let from_balance = balances.get(&(*token, *from)).copied().unwrap_or_default();
            let remaining = from_balance
                .checked_sub(amount)
                .ok_or(DispatchError::Other("transfer amount exceeds balance"))?;
            balances.insert((*token, *from), remaining);
            *balances.entry((*token, *to)).or_default() += amount;
            Ok(())
        })
    }
}

impl pallet_pyro_locker::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = EnsureAdmin;
    type PalletId = LockerPalletId;
    type Tokens = MockTokens;
    type WeightInfo = ();
}

/// Give `who` some of `token`, as if minted by the token contract.
pub fn fund(token: u32, who: u64, amount: u128) {
    TokenBalances::mutate(|balances| *balances.entry((token, who)).or_default() += amount);
}

pub fn token_balance(token: u32, who: u64) -> u128 {
    <MockTokens as crate::TokenContract<u64>>::balance_of(&token, &who)
}

pub fn new_test_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        TokenBalances::set(BTreeMap::new());
        RejectTransfers::set(false);
    });
    ext
}
