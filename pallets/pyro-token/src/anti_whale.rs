//! Per-transfer ceiling proportional to total supply.

use crate::fee::BPS_DENOMINATOR;

/// Largest accepted `max_transfer_rate_bps` (100% of supply).
pub const MAX_TRANSFER_RATE_BPS: u16 = 10_000;

/// `floor(total_supply * max_rate_bps / 10_000)`, or `None` on overflow.
///
/// Always derived from the current supply, so minting raises the cap immediately.
pub fn max_transfer_amount(total_supply: u128, max_rate_bps: u16) -> Option<u128> {
    Some(total_supply.checked_mul(u128::from(max_rate_bps))? / BPS_DENOMINATOR)
}

/// Whether `amount` may move in a single transfer.
///
/// Cap exclusion of either party overrides the cap unconditionally.
pub fn check_cap(
    amount: u128,
    total_supply: u128,
    max_rate_bps: u16,
    sender_excluded: bool,
    recipient_excluded: bool,
) -> Option<bool> {
    if sender_excluded || recipient_excluded {
        return Some(true);
    }
    Some(amount <= max_transfer_amount(total_supply, max_rate_bps)?)
}
