//! Transfer tax computation.
//!
//! Pure integer arithmetic, truncating toward zero. Every function returns
//! `None` instead of wrapping when an intermediate product overflows, so the
//! caller can reject the transfer.

use sp_runtime::RuntimeDebug;

/// Basis-point denominator (100% = 10_000 bps).
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Upper bound for the transfer tax rate: 10%.
pub const MAX_TAX_RATE_BPS: u16 = 1_000;

/// Upper bound for the burn rate, expressed as a percentage of the collected tax.
pub const MAX_BURN_RATE: u16 = 100;

/// How a gross transfer amount is divided between recipient, burn sink and reserve.
#[derive(Clone, Copy, Default, Eq, PartialEq, RuntimeDebug)]
pub struct FeeSplit {
    /// Amount credited to the recipient.
    pub net: u128,
    /// Share of the tax routed to the burn sink.
    pub burn_part: u128,
    /// Share of the tax kept in the reserve account.
    pub reserve_part: u128,
}

impl FeeSplit {
    /// A split that passes the whole amount through untaxed.
    pub fn untaxed(gross: u128) -> Self {
        Self { net: gross, burn_part: 0, reserve_part: 0 }
    }

    /// Total tax withheld from the gross amount.
    pub fn tax(&self) -> u128 {
        self.burn_part.saturating_add(self.reserve_part)
    }
}

/// Split `gross` according to the tax and burn rates.
///
/// Fee exclusion of either party, or a zero tax rate, bypasses the tax entirely.
pub fn compute_split(
    gross: u128,
    tax_rate_bps: u16,
    burn_rate: u16,
    sender_excluded: bool,
    recipient_excluded: bool,
) -> Option<FeeSplit> {
    if sender_excluded || recipient_excluded || tax_rate_bps == 0 {
        return Some(FeeSplit::untaxed(gross));
    }

    let tax = gross.checked_mul(u128::from(tax_rate_bps))? / BPS_DENOMINATOR;
    let burn_part = tax.checked_mul(u128::from(burn_rate))? / 100;
    let reserve_part = tax.checked_sub(burn_part)?;
    let net = gross.checked_sub(tax)?;

    Some(FeeSplit { net, burn_part, reserve_part })
}
