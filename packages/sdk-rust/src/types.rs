//! Value types shared across the SDK.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

// ─── Tokens and pools ─────────────────────────────────────────────────────────

/// Two token mints in canonical order (lower bytes first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    pub token_a: Pubkey,
    pub token_b: Pubkey,
    /// `true` when the caller's first mint became canonical `token_b`.
    pub swapped: bool,
}

impl TokenPair {
    /// Order two mints canonically.
    pub fn new(first: Pubkey, second: Pubkey) -> Self {
        if first <= second {
            Self { token_a: first, token_b: second, swapped: false }
        } else {
            Self { token_a: second, token_b: first, swapped: true }
        }
    }
}

/// Semantic identity of a pool: canonical mints plus the fixed ratio.
///
/// Ratios keep the caller's order; only the mints are normalized, so
/// `(x, y, 1, 160)` and `(y, x, 1, 160)` identify the same pool.
///
/// Fields are private so an identity is always canonical:
///
/// ```compile_fail
/// use fixed_ratio_sdk::PoolIdentity;
/// use solana_sdk::pubkey::Pubkey;
///
/// let reversed = PoolIdentity {
///     token_a: Pubkey::new_from_array([2; 32]),
///     token_b: Pubkey::new_from_array([1; 32]),
///     ratio_a: 5,
///     ratio_b: 3,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolIdentity {
    token_a: Pubkey,
    token_b: Pubkey,
    ratio_a: u64,
    ratio_b: u64,
}

impl PoolIdentity {
    pub fn new(first: Pubkey, second: Pubkey, ratio_a: u64, ratio_b: u64) -> Self {
        let pair = TokenPair::new(first, second);
        Self { token_a: pair.token_a, token_b: pair.token_b, ratio_a, ratio_b }
    }

    /// Canonical token A (the lower mint).
    pub fn token_a(&self) -> Pubkey {
        self.token_a
    }

    pub fn token_b(&self) -> Pubkey {
        self.token_b
    }

    /// Ratio applied to canonical token A.
    pub fn ratio_a(&self) -> u64 {
        self.ratio_a
    }

    pub fn ratio_b(&self) -> u64 {
        self.ratio_b
    }

    /// The canonical mint pair of this pool.
    pub fn pair(&self) -> (Pubkey, Pubkey) {
        (self.token_a, self.token_b)
    }
}

// ─── Derived addresses ───────────────────────────────────────────────────────

/// A program-derived address and the bump that pushed it off the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump:    u8,
}

/// Every PDA owned by a single pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAccountSet {
    pub pool:      DerivedAddress,
    pub vault_a:   DerivedAddress,
    pub vault_b:   DerivedAddress,
    pub lp_mint_a: DerivedAddress,
    pub lp_mint_b: DerivedAddress,
}

/// Result of deriving a pool address from caller-ordered mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAddressInfo {
    pub pool: DerivedAddress,
    pub pair: TokenPair,
}

// ─── Snapshots recovered from simulation logs ────────────────────────────────

/// Treasury totals as reported by a `GetTreasuryInfo` dry-run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasurySnapshot {
    pub balance:              u64,
    pub fees_collected:       u64,
    pub last_withdrawal_time: i64,
    pub withdrawal_count:     u64,
    pub donation_count:       u64,
    pub total_donations:      u64,
}

/// Contract version as reported by a `GetVersion` dry-run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub contract_name: String,
    pub version:       String,
}

// ─── Quotes ──────────────────────────────────────────────────────────────────

/// Off-chain estimate for a swap against a fixed-ratio pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    pub amount_in:        u64,
    pub expected_out:     u64,
    /// `expected_out` reduced by the caller's slippage tolerance.
    pub min_amount_out:   u64,
    /// Flat contract fee in lamports, independent of notional.
    pub contract_fee:     u64,
    /// Display-only deviation from the nominal ratio price, in percent.
    pub price_impact_pct: f64,
}
