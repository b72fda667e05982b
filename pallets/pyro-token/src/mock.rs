use crate as pallet_pyro_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        PyroToken: pallet_pyro_token,
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

pub const ZERO: u64 = 0;
pub const OWNER: u64 = 1;
pub const OPERATOR: u64 = 2;
pub const ALICE: u64 = 3;
pub const BOB: u64 = 4;
pub const CAROL: u64 = 5;
pub const POOL: u64 = 9;
pub const BURN: u64 = 0xdead;

/// What the mock exchange does when asked to provide liquidity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiquidityBehaviour {
    ConsumeAll,
    /// Consume this share of the offer, in percent.
    ConsumePercent(u8),
    Fail,
    /// Report more than was offered.
    OverReport,
    /// Transfer `amount` from BOB to CAROL through the engine before consuming everything.
    Reenter(u128),
}

parameter_types! {
    pub const BurnAccount: u64 = BURN;
    pub const PyroPalletId: PalletId = PalletId(*b"py/pyrot");
    pub static Behaviour: LiquidityBehaviour = LiquidityBehaviour::ConsumeAll;
    /// Every (pool, offered) pair the exchange was called with.
    pub static LiquidityCalls: Vec<(u64, u128)> = vec![];
    /// Reserve balance the exchange saw on entry.
    pub static ObservedReserve: Option<u128> = None;
}

pub struct MockExchange;
impl crate::LiquidityProvider<u64> for MockExchange {
    fn provide_liquidity(pool: &u64, amount: u128) -> Result<u128, DispatchError> {
        LiquidityCalls::mutate(|calls| calls.push((*pool, amount)));
        ObservedReserve::set(Some(PyroToken::balance_of(PyroToken::reserve_account())));
        match Behaviour::get() {
            LiquidityBehaviour::ConsumeAll => Ok(amount),
            LiquidityBehaviour::ConsumePercent(pct) => Ok(amount * u128::from(pct) / 100),
            LiquidityBehaviour::Fail => Err(DispatchError::Other("exchange unavailable")),
            LiquidityBehaviour::OverReport => Ok(amount + 1),
            LiquidityBehaviour::Reenter(inner) => {
                PyroToken::do_transfer(&BOB, &CAROL, inner)?;
                Ok(amount)
            },
        }
    }
}

impl pallet_pyro_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type PalletId = PyroPalletId;
    type BurnAccount = BurnAccount;
    type Liquidity = MockExchange;
    type WeightInfo = ();
}

/// Reserve account of the mock runtime.
pub fn reserve() -> u64 {
    PyroToken::reserve_account()
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with(pallet_pyro_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        operator: None,
        initial_balances: vec![],
        cap_excluded: vec![],
        fee_excluded: vec![],
    })
}

pub fn new_test_ext_with(
    genesis: pallet_pyro_token::GenesisConfig<Test>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        Behaviour::set(LiquidityBehaviour::ConsumeAll);
        LiquidityCalls::set(vec![]);
        ObservedReserve::set(None);
    });
    ext
}

/// Run `test` and then check the ledger invariants on the final state.
pub fn build_and_execute(test: impl FnOnce()) {
    new_test_ext().execute_with(|| {
        test();
        PyroToken::do_try_state().expect("ledger invariants hold");
    });
}
