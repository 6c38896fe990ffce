//! Parameter validation.
//!
//! Validators never fail: every violation is collected into a
//! [`ValidationResult`] so the caller sees all problems in one pass.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::constants::{
    MAX_CONSOLIDATION_POOLS, MAX_DONATION_AMOUNT, MAX_DONATION_MESSAGE_LEN, MAX_RATIO,
    MAX_SLIPPAGE_PERCENT, MAX_TOKEN_AMOUNT, MIN_DONATION_AMOUNT,
};

/// Outcome of a validator; `is_valid` iff `errors` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors:   Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}

fn check_amount(errors: &mut Vec<String>, name: &str, amount: u64) {
    if amount == 0 {
        errors.push(format!("{name} must be greater than zero"));
    }
    if amount > MAX_TOKEN_AMOUNT {
        errors.push(format!("{name} {amount} exceeds maximum of {MAX_TOKEN_AMOUNT}"));
    }
}

fn check_ratio(errors: &mut Vec<String>, name: &str, ratio: u64) {
    if ratio == 0 {
        errors.push(format!("{name} must be greater than zero"));
    }
    if ratio > MAX_RATIO {
        errors.push(format!("{name} {ratio} exceeds maximum of {MAX_RATIO}"));
    }
}

/// Validate pool creation parameters.
pub fn validate_pool_creation(
    token_a: &Pubkey,
    token_b: &Pubkey,
    ratio_a: u64,
    ratio_b: u64,
) -> ValidationResult {
    let mut errors = Vec::new();
    check_ratio(&mut errors, "ratio_a", ratio_a);
    check_ratio(&mut errors, "ratio_b", ratio_b);
    if token_a == token_b {
        errors.push("token_a and token_b must be different mints".to_string());
    }
    ValidationResult::from_errors(errors)
}

pub fn validate_deposit(amount: u64) -> ValidationResult {
    let mut errors = Vec::new();
    check_amount(&mut errors, "deposit amount", amount);
    ValidationResult::from_errors(errors)
}

pub fn validate_withdrawal(lp_amount: u64) -> ValidationResult {
    let mut errors = Vec::new();
    check_amount(&mut errors, "withdrawal amount", lp_amount);
    ValidationResult::from_errors(errors)
}

/// Validate a swap; `slippage_tolerance_pct` is an integer percent.
pub fn validate_swap(amount_in: u64, slippage_tolerance_pct: u32) -> ValidationResult {
    let mut errors = Vec::new();
    check_amount(&mut errors, "swap amount", amount_in);
    if slippage_tolerance_pct > MAX_SLIPPAGE_PERCENT {
        errors.push(format!(
            "slippage tolerance {slippage_tolerance_pct}% must be between 0 and {MAX_SLIPPAGE_PERCENT}"
        ));
    }
    ValidationResult::from_errors(errors)
}

/// Validate a SOL donation to the treasury.
pub fn validate_donation(amount: u64, message: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if amount < MIN_DONATION_AMOUNT {
        errors.push(format!(
            "donation {amount} is below the minimum of {MIN_DONATION_AMOUNT} lamports"
        ));
    }
    if amount > MAX_DONATION_AMOUNT {
        errors.push(format!(
            "donation {amount} exceeds the maximum of {MAX_DONATION_AMOUNT} lamports"
        ));
    }
    let chars = message.chars().count();
    if chars > MAX_DONATION_MESSAGE_LEN {
        errors.push(format!(
            "message is {chars} characters; maximum is {MAX_DONATION_MESSAGE_LEN}"
        ));
    }
    ValidationResult::from_errors(errors)
}

/// Validate the pool list of a fee consolidation.
pub fn validate_consolidation_params(pools: &[Pubkey]) -> ValidationResult {
    let mut errors = Vec::new();
    if pools.is_empty() {
        errors.push("at least one pool is required".to_string());
    }
    if pools.len() > MAX_CONSOLIDATION_POOLS {
        errors.push(format!(
            "{} pools listed; at most {MAX_CONSOLIDATION_POOLS} per consolidation",
            pools.len()
        ));
    }
    let mut seen = HashSet::with_capacity(pools.len());
    let mut reported = HashSet::new();
    for pool in pools {
        if !seen.insert(pool) && reported.insert(pool) {
            errors.push(format!("duplicate pool address {pool}"));
        }
    }
    ValidationResult::from_errors(errors)
}
