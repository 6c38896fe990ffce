//! Fixed-ratio arithmetic and display conversions.
//!
//! Every authoritative amount is computed with u128 intermediates and floor
//! division. Floating point only appears in [`price_impact`] and
//! [`from_basis_points`], which exist for display.

use crate::constants::{
    BPS_DENOMINATOR, DEPOSIT_WITHDRAWAL_FEE, MAX_SLIPPAGE_PERCENT, MIN_DONATION_AMOUNT,
    REGISTRATION_FEE, SWAP_CONTRACT_FEE,
};
use crate::error::{Error, Result};

/// Largest decimals value whose scale (10^d) still fits in a u64.
pub const MAX_DECIMALS: u8 = 19;

// ─── Core ratio math ──────────────────────────────────────────────────────────

/// `floor(a * b / c)` over u128, failing on a zero divisor or a u64 overflow.
fn mul_div(a: u64, b: u64, c: u64) -> Result<u64> {
    if c == 0 {
        return Err(Error::DivisionByZero);
    }
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(Error::MathOverflow)?;
    u64::try_from(product / c as u128).map_err(|_| Error::MathOverflow)
}

/// Amount of the other token needed to match `amount` at the pool ratio.
///
/// `floor(amount * ratio_other / ratio_self)`
pub fn required_counterpart(amount: u64, ratio_self: u64, ratio_other: u64) -> Result<u64> {
    mul_div(amount, ratio_other, ratio_self)
}

/// Output of a swap at the pool's fixed rate.
///
/// No percentage fee is deducted; the program charges a flat
/// [`SWAP_CONTRACT_FEE`] in SOL per swap instead.
pub fn swap_output(amount_in: u64, ratio_in: u64, ratio_out: u64) -> Result<u64> {
    mul_div(amount_in, ratio_out, ratio_in)
}

/// Reduce `expected` by `tolerance_pct` percent (integer, `0..=50`).
///
/// `floor(expected * (10000 - tolerance * 100) / 10000)`
pub fn apply_slippage(expected: u64, tolerance_pct: u32) -> Result<u64> {
    if tolerance_pct > MAX_SLIPPAGE_PERCENT {
        return Err(Error::InvalidSlippage(tolerance_pct));
    }
    let keep = BPS_DENOMINATOR - tolerance_pct as u128 * 100;
    let scaled = (expected as u128)
        .checked_mul(keep)
        .ok_or(Error::MathOverflow)?
        / BPS_DENOMINATOR;
    u64::try_from(scaled).map_err(|_| Error::MathOverflow)
}

/// Percentage by which the effective price falls short of the nominal ratio.
///
/// Display only: the program computes the authoritative output itself. An
/// empty input has no impact; a zero ratio is [`Error::DivisionByZero`].
pub fn price_impact(
    amount_in:  u64,
    amount_out: u64,
    ratio_in:   u64,
    ratio_out:  u64,
) -> Result<f64> {
    if ratio_in == 0 || ratio_out == 0 {
        return Err(Error::DivisionByZero);
    }
    if amount_in == 0 {
        return Ok(0.0);
    }
    let nominal = ratio_out as f64 / ratio_in as f64;
    let effective = amount_out as f64 / amount_in as f64;
    Ok(((nominal - effective) / nominal * 100.0).max(0.0))
}

// ─── Liquidity estimates ─────────────────────────────────────────────────────

/// LP tokens minted for a deposit.
///
/// An empty pool (`lp_supply == 0` or `pool_balance == 0`) mints 1:1.
pub fn estimate_lp_tokens_from_deposit(
    deposit_amount: u64,
    lp_supply:      u64,
    pool_balance:   u64,
) -> Result<u64> {
    if lp_supply == 0 || pool_balance == 0 {
        return Ok(deposit_amount);
    }
    mul_div(deposit_amount, lp_supply, pool_balance)
}

/// Underlying tokens returned for burning `lp_amount`; zero when no LP exists.
pub fn estimate_tokens_from_withdrawal(
    lp_amount:    u64,
    pool_balance: u64,
    lp_supply:    u64,
) -> Result<u64> {
    if lp_supply == 0 {
        return Ok(0);
    }
    mul_div(lp_amount, pool_balance, lp_supply)
}

// ─── Flat fee schedule ───────────────────────────────────────────────────────

/// Operations that carry a fixed SOL fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeKind {
    PoolRegistration,
    Deposit,
    Withdrawal,
    Swap,
    MinimumDonation,
}

/// Quoted lamport fee for one operation.
pub const fn operation_fee(kind: FeeKind) -> u64 {
    match kind {
        FeeKind::PoolRegistration => REGISTRATION_FEE,
        FeeKind::Deposit | FeeKind::Withdrawal => DEPOSIT_WITHDRAWAL_FEE,
        FeeKind::Swap => SWAP_CONTRACT_FEE,
        FeeKind::MinimumDonation => MIN_DONATION_AMOUNT,
    }
}

/// Total flat fee for `count` operations of one kind.
pub fn total_operation_fees(kind: FeeKind, count: u64) -> Result<u64> {
    operation_fee(kind)
        .checked_mul(count)
        .ok_or(Error::MathOverflow)
}

// ─── Display conversions ─────────────────────────────────────────────────────

fn scale(decimals: u8) -> Result<u64> {
    if decimals > MAX_DECIMALS {
        return Err(Error::InvalidArgument(format!(
            "decimals {decimals} exceeds {MAX_DECIMALS}"
        )));
    }
    Ok(10u64.pow(decimals as u32))
}

/// Convert a display amount (e.g. `1.5` SOL) to smallest units, rounding to nearest.
pub fn to_basis_points(amount: f64, decimals: u8) -> Result<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "amount {amount} is not a finite non-negative number"
        )));
    }
    let units = (amount * scale(decimals)? as f64).round();
    if units >= u64::MAX as f64 {
        return Err(Error::MathOverflow);
    }
    Ok(units as u64)
}

/// Convert smallest units to a display amount.
///
/// Exact only for values below 2^53; use [`format_amount`] when exactness matters.
pub fn from_basis_points(units: u64, decimals: u8) -> Result<f64> {
    Ok(units as f64 / scale(decimals)? as f64)
}

/// Exact decimal rendering of smallest units, trailing zeros trimmed.
pub fn format_amount(units: u64, decimals: u8) -> Result<String> {
    let scale = scale(decimals)?;
    let whole = units / scale;
    let frac = units % scale;
    if frac == 0 {
        return Ok(whole.to_string());
    }
    let digits = format!("{frac:0width$}", width = decimals as usize);
    Ok(format!("{whole}.{}", digits.trim_end_matches('0')))
}

/// Exact parse of a decimal string into smallest units.
pub fn parse_amount(text: &str, decimals: u8) -> Result<u64> {
    let scale = scale(decimals)?;
    let invalid = || Error::InvalidArgument(format!("'{text}' is not a valid amount"));

    let text = text.trim();
    let (whole, frac) = match text.split_once('.') {
        Some((w, f)) => (w, f),
        None => (text, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > decimals as usize {
        return Err(Error::InvalidArgument(format!(
            "'{text}' has more than {decimals} decimal places"
        )));
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| Error::MathOverflow)?
    };
    let frac_units: u64 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{frac:0<width$}", width = decimals as usize);
        padded.parse().map_err(|_| invalid())?
    };
    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(frac_units))
        .ok_or(Error::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_output_uses_fixed_rate() {
        assert_eq!(swap_output(100, 1, 160).unwrap(), 16_000);
        assert_eq!(swap_output(16_000, 160, 1).unwrap(), 100);
        // floor
        assert_eq!(swap_output(10, 3, 1).unwrap(), 3);
    }

    #[test]
    fn swap_output_rejects_zero_ratio() {
        assert!(matches!(swap_output(100, 0, 5), Err(Error::DivisionByZero)));
    }

    #[test]
    fn swap_output_detects_overflow() {
        assert!(matches!(swap_output(u64::MAX, 1, 2), Err(Error::MathOverflow)));
    }

    #[test]
    fn required_counterpart_floors() {
        assert_eq!(required_counterpart(1_000, 3, 2).unwrap(), 666);
        assert!(matches!(required_counterpart(1, 0, 1), Err(Error::DivisionByZero)));
    }

    #[test]
    fn slippage_examples() {
        assert_eq!(apply_slippage(1_000, 1).unwrap(), 990);
        assert_eq!(apply_slippage(1_000, 0).unwrap(), 1_000);
        assert_eq!(apply_slippage(1_000, 50).unwrap(), 500);
        assert!(matches!(apply_slippage(1_000, 51), Err(Error::InvalidSlippage(51))));
    }

    #[test]
    fn slippage_handles_max_amount() {
        assert_eq!(apply_slippage(u64::MAX, 0).unwrap(), u64::MAX);
    }

    #[test]
    fn lp_estimate_bootstrap() {
        assert_eq!(estimate_lp_tokens_from_deposit(500, 0, 0).unwrap(), 500);
        assert_eq!(estimate_lp_tokens_from_deposit(500, 100, 0).unwrap(), 500);
        assert_eq!(estimate_lp_tokens_from_deposit(500, 0, 100).unwrap(), 500);
    }

    #[test]
    fn lp_estimate_proportional() {
        assert_eq!(estimate_lp_tokens_from_deposit(500, 1_000, 2_000).unwrap(), 250);
    }

    #[test]
    fn withdrawal_estimate() {
        assert_eq!(estimate_tokens_from_withdrawal(250, 2_000, 1_000).unwrap(), 500);
        assert_eq!(estimate_tokens_from_withdrawal(250, 2_000, 0).unwrap(), 0);
    }

    #[test]
    fn price_impact_is_zero_at_nominal_rate() {
        let out = swap_output(100, 1, 160).unwrap();
        assert_eq!(price_impact(100, out, 1, 160).unwrap(), 0.0);
    }

    #[test]
    fn price_impact_reflects_rounding_loss() {
        // 10 in at 3:1 floors to 3 out, nominal would be 3.333…
        let impact = price_impact(10, 3, 3, 1).unwrap();
        assert!((impact - 10.0).abs() < 1e-9);
    }

    #[test]
    fn price_impact_of_empty_input_is_zero() {
        assert_eq!(price_impact(0, 0, 1, 160).unwrap(), 0.0);
        assert!(matches!(price_impact(0, 0, 0, 1), Err(Error::DivisionByZero)));
        assert!(matches!(price_impact(10, 3, 3, 0), Err(Error::DivisionByZero)));
    }

    #[test]
    fn basis_point_round_trip() {
        for decimals in [0u8, 6, 9] {
            for x in [0u64, 1, 7, 999, 1_000_000, 123_456_789, 1_000_000_000_123] {
                let display = from_basis_points(x, decimals).unwrap();
                assert_eq!(to_basis_points(display, decimals).unwrap(), x, "x={x} d={decimals}");
            }
        }
    }

    #[test]
    fn to_basis_points_rejects_negative() {
        assert!(to_basis_points(-1.0, 6).is_err());
        assert!(to_basis_points(f64::NAN, 6).is_err());
        assert!(to_basis_points(1.0, 20).is_err());
    }

    #[test]
    fn exact_format_and_parse() {
        assert_eq!(format_amount(1_500_000_000, 9).unwrap(), "1.5");
        assert_eq!(format_amount(42, 0).unwrap(), "42");
        assert_eq!(format_amount(1, 6).unwrap(), "0.000001");
        assert_eq!(parse_amount("1.5", 9).unwrap(), 1_500_000_000);
        assert_eq!(parse_amount(".25", 2).unwrap(), 25);
        assert_eq!(parse_amount("18446744073709551615", 0).unwrap(), u64::MAX);
        assert!(parse_amount("1.1234567", 6).is_err());
        assert!(parse_amount("abc", 6).is_err());
        assert!(parse_amount(".", 6).is_err());
        assert!(matches!(parse_amount("18446744073709551616", 0), Err(Error::MathOverflow)));
    }

    #[test]
    fn fee_schedule() {
        assert_eq!(operation_fee(FeeKind::PoolRegistration), 1_150_000_000);
        assert_eq!(operation_fee(FeeKind::Deposit), 1_300_000);
        assert_eq!(operation_fee(FeeKind::Withdrawal), 1_300_000);
        assert_eq!(operation_fee(FeeKind::Swap), 27_150);
        assert_eq!(total_operation_fees(FeeKind::Swap, 4).unwrap(), 108_600);
        assert!(total_operation_fees(FeeKind::PoolRegistration, u64::MAX).is_err());
    }
}
