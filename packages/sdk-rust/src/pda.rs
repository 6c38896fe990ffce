//! Program-derived address helpers.
//!
//! Every protocol account is a PDA of the fixed-ratio program. Pool mints are
//! always normalized before seeding, so either argument order resolves to the
//! same pool.

use solana_sdk::pubkey::{Pubkey, PubkeyError};

use crate::constants::{
    LP_TOKEN_A_MINT_SEED, LP_TOKEN_B_MINT_SEED, MAIN_TREASURY_SEED, POOL_STATE_SEED,
    SYSTEM_STATE_SEED, TOKEN_A_VAULT_SEED, TOKEN_B_VAULT_SEED,
};
use crate::error::{Error, Result};
use crate::types::{DerivedAccountSet, DerivedAddress, PoolIdentity, TokenPair};

// ─── Bump search ──────────────────────────────────────────────────────────────

/// Search bumps 255 → 0 for the first off-curve
/// `sha256(seeds ‖ [bump] ‖ program_id ‖ "ProgramDerivedAddress")`.
///
/// Seeds longer than 32 bytes, or more than 15 of them, are rejected up front
/// as [`Error::InvalidArgument`]; [`Error::DerivationFailure`] means every bump
/// landed on the curve.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<DerivedAddress> {
    for bump in (0u8..=255).rev() {
        let bump_seed = [bump];
        let mut with_bump: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
        with_bump.extend_from_slice(seeds);
        with_bump.push(&bump_seed);

        match Pubkey::create_program_address(&with_bump, program_id) {
            Ok(address) => return Ok(DerivedAddress { address, bump }),
            Err(PubkeyError::InvalidSeeds) => {}
            Err(err) => return Err(Error::InvalidArgument(format!("invalid PDA seeds: {err}"))),
        }
    }
    let tag = seeds
        .first()
        .map(|s| String::from_utf8_lossy(s).into_owned())
        .unwrap_or_default();
    log::warn!("PDA derivation exhausted every bump for seed '{tag}'");
    Err(Error::DerivationFailure { tag })
}

/// Order a mint pair canonically and report whether it was flipped.
pub fn normalize_tokens(first: &Pubkey, second: &Pubkey) -> TokenPair {
    TokenPair::new(*first, *second)
}

// ─── Global accounts ─────────────────────────────────────────────────────────

/// Derive the system-state PDA (global pause flag, admin authority).
pub fn derive_system_state(program_id: &Pubkey) -> Result<DerivedAddress> {
    find_program_address(&[SYSTEM_STATE_SEED], program_id)
}

/// Derive the main treasury PDA that receives every SOL fee.
pub fn derive_main_treasury(program_id: &Pubkey) -> Result<DerivedAddress> {
    find_program_address(&[MAIN_TREASURY_SEED], program_id)
}

// ─── Pool accounts ───────────────────────────────────────────────────────────

/// Derive the pool-state PDA (the pool ID).
pub fn derive_pool_state(pool: &PoolIdentity, program_id: &Pubkey) -> Result<DerivedAddress> {
    let (token_a, token_b) = pool.pair();
    let ratio_a = pool.ratio_a().to_le_bytes();
    let ratio_b = pool.ratio_b().to_le_bytes();
    find_program_address(
        &[
            POOL_STATE_SEED,
            token_a.as_ref(),
            token_b.as_ref(),
            &ratio_a,
            &ratio_b,
        ],
        program_id,
    )
}

pub fn derive_token_a_vault(pool: &Pubkey, program_id: &Pubkey) -> Result<DerivedAddress> {
    find_program_address(&[TOKEN_A_VAULT_SEED, pool.as_ref()], program_id)
}

pub fn derive_token_b_vault(pool: &Pubkey, program_id: &Pubkey) -> Result<DerivedAddress> {
    find_program_address(&[TOKEN_B_VAULT_SEED, pool.as_ref()], program_id)
}

pub fn derive_lp_token_a_mint(pool: &Pubkey, program_id: &Pubkey) -> Result<DerivedAddress> {
    find_program_address(&[LP_TOKEN_A_MINT_SEED, pool.as_ref()], program_id)
}

pub fn derive_lp_token_b_mint(pool: &Pubkey, program_id: &Pubkey) -> Result<DerivedAddress> {
    find_program_address(&[LP_TOKEN_B_MINT_SEED, pool.as_ref()], program_id)
}

/// Derive the pool PDA together with its vaults and LP mints.
pub fn derive_pool_accounts(pool: &PoolIdentity, program_id: &Pubkey) -> Result<DerivedAccountSet> {
    let pool_pda = derive_pool_state(pool, program_id)?;
    let addr = pool_pda.address;
    let set = DerivedAccountSet {
        pool:      pool_pda,
        vault_a:   derive_token_a_vault(&addr, program_id)?,
        vault_b:   derive_token_b_vault(&addr, program_id)?,
        lp_mint_a: derive_lp_token_a_mint(&addr, program_id)?,
        lp_mint_b: derive_lp_token_b_mint(&addr, program_id)?,
    };
    log::debug!("derived pool accounts for {addr}: bump={}", set.pool.bump);
    Ok(set)
}
