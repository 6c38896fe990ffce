//! On-chain account deserialization.
//!
//! Parses the packed `PoolState` account (382 bytes, no discriminator).
//! Byte offsets mirror the program's Borsh layout exactly.

use solana_sdk::pubkey::Pubkey;

use crate::constants::{
    POOL_FLAG_LIQUIDITY_PAUSED, POOL_FLAG_ONE_TO_MANY_RATIO, POOL_FLAG_SINGLE_LP_TOKEN,
    POOL_FLAG_SWAPS_PAUSED, POOL_FLAG_SWAP_FOR_OWNERS_ONLY, POOL_FLAG_WITHDRAWAL_PROTECTION,
};
use crate::error::{Error, Result};

// ─── Pool ─────────────────────────────────────────────────────────────────────

/// Deserialized `PoolState` account.
///
/// Layout:
/// ```text
/// owner(32) token_a_mint(32) token_b_mint(32) token_a_vault(32) token_b_vault(32)
/// lp_token_a_mint(32) lp_token_b_mint(32)
/// ratio_a_numerator(8) ratio_b_denominator(8)
/// total_token_a_liquidity(8) total_token_b_liquidity(8)
/// bumps: pool_authority, token_a_vault, token_b_vault, lp_token_a_mint, lp_token_b_mint (5 × 1)
/// rent_requirements(40)  flags(1)
/// collected_fees_token_a(8) collected_fees_token_b(8)
/// total_fees_withdrawn_token_a(8) total_fees_withdrawn_token_b(8)
/// collected_liquidity_fees(8) collected_swap_contract_fees(8) total_sol_fees_collected(8)
/// last_consolidation_timestamp(8) total_consolidations(8) total_fees_consolidated(8)
/// = 382 bytes
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    pub owner:                        Pubkey,
    pub token_a_mint:                 Pubkey,
    pub token_b_mint:                 Pubkey,
    pub token_a_vault:                Pubkey,
    pub token_b_vault:                Pubkey,
    pub lp_token_a_mint:              Pubkey,
    pub lp_token_b_mint:              Pubkey,
    pub ratio_a_numerator:            u64,
    pub ratio_b_denominator:          u64,
    pub total_token_a_liquidity:      u64,
    pub total_token_b_liquidity:      u64,
    pub pool_authority_bump_seed:     u8,
    pub token_a_vault_bump_seed:      u8,
    pub token_b_vault_bump_seed:      u8,
    pub lp_token_a_mint_bump_seed:    u8,
    pub lp_token_b_mint_bump_seed:    u8,
    pub flags:                        u8,
    pub collected_fees_token_a:       u64,
    pub collected_fees_token_b:       u64,
    pub total_fees_withdrawn_token_a: u64,
    pub total_fees_withdrawn_token_b: u64,
    /// SOL from deposits/withdrawals not yet consolidated into the treasury.
    pub collected_liquidity_fees:     u64,
    /// SOL from swaps not yet consolidated into the treasury.
    pub collected_swap_contract_fees: u64,
    /// Lifetime SOL fees; never resets.
    pub total_sol_fees_collected:     u64,
    pub last_consolidation_timestamp: i64,
    pub total_consolidations:         u64,
    pub total_fees_consolidated:      u64,
}

impl PoolState {
    pub const LEN: usize = 382;

    pub fn one_to_many_ratio(&self) -> bool {
        self.flags & POOL_FLAG_ONE_TO_MANY_RATIO != 0
    }

    pub fn liquidity_paused(&self) -> bool {
        self.flags & POOL_FLAG_LIQUIDITY_PAUSED != 0
    }

    pub fn swaps_paused(&self) -> bool {
        self.flags & POOL_FLAG_SWAPS_PAUSED != 0
    }

    pub fn withdrawal_protection_active(&self) -> bool {
        self.flags & POOL_FLAG_WITHDRAWAL_PROTECTION != 0
    }

    pub fn only_lp_token_a_for_both(&self) -> bool {
        self.flags & POOL_FLAG_SINGLE_LP_TOKEN != 0
    }

    pub fn swap_for_owners_only(&self) -> bool {
        self.flags & POOL_FLAG_SWAP_FOR_OWNERS_ONLY != 0
    }

    /// SOL fees collected but not yet moved to the treasury.
    pub fn pending_sol_fees(&self) -> u64 {
        self.total_sol_fees_collected
            .saturating_sub(self.total_fees_consolidated)
    }
}

/// Deserialize a `PoolState` account from raw bytes.
pub fn parse_pool_state(data: &[u8]) -> Result<PoolState> {
    if data.len() < PoolState::LEN {
        return Err(Error::ParseError {
            offset: 0,
            reason: format!(
                "PoolState account is {} bytes; expected {}",
                data.len(),
                PoolState::LEN
            ),
        });
    }
    Ok(PoolState {
        owner:                        read_pubkey(data, 0)?,
        token_a_mint:                 read_pubkey(data, 32)?,
        token_b_mint:                 read_pubkey(data, 64)?,
        token_a_vault:                read_pubkey(data, 96)?,
        token_b_vault:                read_pubkey(data, 128)?,
        lp_token_a_mint:              read_pubkey(data, 160)?,
        lp_token_b_mint:              read_pubkey(data, 192)?,
        ratio_a_numerator:            read_u64(data, 224)?,
        ratio_b_denominator:          read_u64(data, 232)?,
        total_token_a_liquidity:      read_u64(data, 240)?,
        total_token_b_liquidity:      read_u64(data, 248)?,
        pool_authority_bump_seed:     read_u8(data, 256)?,
        token_a_vault_bump_seed:      read_u8(data, 257)?,
        token_b_vault_bump_seed:      read_u8(data, 258)?,
        lp_token_a_mint_bump_seed:    read_u8(data, 259)?,
        lp_token_b_mint_bump_seed:    read_u8(data, 260)?,
        // 261..301: rent requirements, not needed client-side
        flags:                        read_u8(data, 301)?,
        collected_fees_token_a:       read_u64(data, 302)?,
        collected_fees_token_b:       read_u64(data, 310)?,
        total_fees_withdrawn_token_a: read_u64(data, 318)?,
        total_fees_withdrawn_token_b: read_u64(data, 326)?,
        collected_liquidity_fees:     read_u64(data, 334)?,
        collected_swap_contract_fees: read_u64(data, 342)?,
        total_sol_fees_collected:     read_u64(data, 350)?,
        last_consolidation_timestamp: read_i64(data, 358)?,
        total_consolidations:         read_u64(data, 366)?,
        total_fees_consolidated:      read_u64(data, 374)?,
    })
}

// ─── Byte-slice primitives ────────────────────────────────────────────────────

fn read_array<const N: usize>(data: &[u8], offset: usize, what: &str) -> Result<[u8; N]> {
    data.get(offset..offset + N)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| Error::ParseError {
            offset,
            reason: format!("slice too short for {what} ({N} bytes)"),
        })
}

pub(crate) fn read_pubkey(data: &[u8], offset: usize) -> Result<Pubkey> {
    Ok(Pubkey::from(read_array::<32>(data, offset, "Pubkey")?))
}

pub(crate) fn read_u8(data: &[u8], offset: usize) -> Result<u8> {
    Ok(read_array::<1>(data, offset, "u8")?[0])
}

pub(crate) fn read_u64(data: &[u8], offset: usize) -> Result<u64> {
    Ok(u64::from_le_bytes(read_array(data, offset, "u64")?))
}

pub(crate) fn read_i64(data: &[u8], offset: usize) -> Result<i64> {
    Ok(i64::from_le_bytes(read_array(data, offset, "i64")?))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pack a pool account the way the program lays it out.
    fn encode_pool(pool: &PoolState) -> Vec<u8> {
        let mut buf = Vec::with_capacity(PoolState::LEN);
        for key in [
            pool.owner, pool.token_a_mint, pool.token_b_mint, pool.token_a_vault,
            pool.token_b_vault, pool.lp_token_a_mint, pool.lp_token_b_mint,
        ] {
            buf.extend_from_slice(key.as_ref());
        }
        for v in [
            pool.ratio_a_numerator, pool.ratio_b_denominator,
            pool.total_token_a_liquidity, pool.total_token_b_liquidity,
        ] {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        buf.extend_from_slice(&[
            pool.pool_authority_bump_seed, pool.token_a_vault_bump_seed,
            pool.token_b_vault_bump_seed, pool.lp_token_a_mint_bump_seed,
            pool.lp_token_b_mint_bump_seed,
        ]);
        buf.extend_from_slice(&[0xAB; 40]);
        buf.push(pool.flags);
        for v in [
            pool.collected_fees_token_a, pool.collected_fees_token_b,
            pool.total_fees_withdrawn_token_a, pool.total_fees_withdrawn_token_b,
            pool.collected_liquidity_fees, pool.collected_swap_contract_fees,
            pool.total_sol_fees_collected,
        ] {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        buf.extend_from_slice(&pool.last_consolidation_timestamp.to_le_bytes());
        buf.extend_from_slice(&pool.total_consolidations.to_le_bytes());
        buf.extend_from_slice(&pool.total_fees_consolidated.to_le_bytes());
        buf
    }

    fn sample_pool() -> PoolState {
        PoolState {
            owner:                        Pubkey::new_from_array([1; 32]),
            token_a_mint:                 Pubkey::new_from_array([2; 32]),
            token_b_mint:                 Pubkey::new_from_array([3; 32]),
            token_a_vault:                Pubkey::new_from_array([4; 32]),
            token_b_vault:                Pubkey::new_from_array([5; 32]),
            lp_token_a_mint:              Pubkey::new_from_array([6; 32]),
            lp_token_b_mint:              Pubkey::new_from_array([7; 32]),
            ratio_a_numerator:            1,
            ratio_b_denominator:          160,
            total_token_a_liquidity:      10_000,
            total_token_b_liquidity:      1_600_000,
            pool_authority_bump_seed:     255,
            token_a_vault_bump_seed:      254,
            token_b_vault_bump_seed:      253,
            lp_token_a_mint_bump_seed:    252,
            lp_token_b_mint_bump_seed:    251,
            flags:                        POOL_FLAG_ONE_TO_MANY_RATIO | POOL_FLAG_SWAPS_PAUSED,
            collected_fees_token_a:       11,
            collected_fees_token_b:       12,
            total_fees_withdrawn_token_a: 13,
            total_fees_withdrawn_token_b: 14,
            collected_liquidity_fees:     2_600_000,
            collected_swap_contract_fees: 54_300,
            total_sol_fees_collected:     5_000_000,
            last_consolidation_timestamp: -1,
            total_consolidations:         2,
            total_fees_consolidated:      2_345_700,
        }
    }

    #[test]
    fn packed_length_matches() {
        assert_eq!(encode_pool(&sample_pool()).len(), PoolState::LEN);
    }

    #[test]
    fn parses_every_field() {
        let pool = sample_pool();
        assert_eq!(parse_pool_state(&encode_pool(&pool)).unwrap(), pool);
    }

    #[test]
    fn flags_and_pending_fees() {
        let pool = sample_pool();
        assert!(pool.one_to_many_ratio());
        assert!(pool.swaps_paused());
        assert!(!pool.liquidity_paused());
        assert!(!pool.withdrawal_protection_active());
        assert!(!pool.only_lp_token_a_for_both());
        assert!(!pool.swap_for_owners_only());
        assert_eq!(pool.pending_sol_fees(), 2_654_300);
    }

    #[test]
    fn short_account_is_rejected() {
        let err = parse_pool_state(&[0u8; 100]).unwrap_err();
        assert!(matches!(err, Error::ParseError { offset: 0, .. }));
    }
}
