//! Low-level instruction builders.
//!
//! Each function constructs a [`solana_sdk::instruction::Instruction`] ready
//! for signing and submission by the caller. Payloads are a one-byte
//! [`Opcode`] followed by fixed-width little-endian fields. Account order is
//! fixed per instruction and must never be rearranged: the program reads
//! accounts by position.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey,
    pubkey::Pubkey,
    sysvar,
};

use crate::constants::{Opcode, MAX_CONSOLIDATION_POOLS, MAX_DONATION_MESSAGE_LEN};
use crate::error::{Error, Result};
use crate::pda::{derive_main_treasury, derive_pool_accounts, derive_system_state};
use crate::types::{DerivedAccountSet, PoolIdentity};

// ─── Well-known program IDs ───────────────────────────────────────────────────

pub const SPL_TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

#[allow(deprecated)]
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::system_program::ID;

// ─── Payload builder ─────────────────────────────────────────────────────────

/// Growable byte buffer with explicit little-endian field writers.
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    buf: Vec<u8>,
}

impl PayloadBuilder {
    /// Start a payload with its opcode byte.
    pub fn new(opcode: Opcode) -> Self {
        Self { buf: vec![opcode.as_u8()] }
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.buf.push(value);
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn u64(mut self, value: u64) -> Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn pubkey(mut self, key: &Pubkey) -> Self {
        self.buf.extend_from_slice(key.as_ref());
        self
    }

    pub fn bytes(mut self, raw: &[u8]) -> Self {
        self.buf.extend_from_slice(raw);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

fn instruction(program_id: &Pubkey, data: Vec<u8>, accounts: Vec<AccountMeta>) -> Instruction {
    Instruction { program_id: *program_id, accounts, data }
}

/// Longest prefix of `text` that fits in `max` bytes without splitting a char.
pub fn truncate_utf8(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Ensure `mint` is one of the pool's two tokens.
fn check_pool_mint(pool: &PoolIdentity, mint: &Pubkey) -> Result<()> {
    if *mint == pool.token_a() || *mint == pool.token_b() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "mint {mint} is not part of pool {} / {}",
            pool.token_a(), pool.token_b()
        )))
    }
}

// ─── System administration ───────────────────────────────────────────────────

/// Build `InitializeProgram` (opcode 0).
pub fn initialize_program_ix(program_id: &Pubkey, authority: &Pubkey) -> Result<Instruction> {
    let system_state = derive_system_state(program_id)?;
    let treasury = derive_main_treasury(program_id)?;

    Ok(instruction(
        program_id,
        PayloadBuilder::new(Opcode::InitializeProgram).finish(),
        vec![
            AccountMeta::new(*authority, true),              // mut + signer
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new(system_state.address, false),   // mut PDA (init)
            AccountMeta::new(treasury.address, false),       // mut PDA (init)
        ],
    ))
}

fn system_flag_ix(program_id: &Pubkey, authority: &Pubkey, opcode: Opcode) -> Result<Instruction> {
    let system_state = derive_system_state(program_id)?;
    Ok(instruction(
        program_id,
        PayloadBuilder::new(opcode).finish(),
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(system_state.address, false),
        ],
    ))
}

/// Build `PauseSystem` (opcode 1).
pub fn pause_system_ix(program_id: &Pubkey, authority: &Pubkey) -> Result<Instruction> {
    system_flag_ix(program_id, authority, Opcode::PauseSystem)
}

/// Build `UnpauseSystem` (opcode 2).
pub fn unpause_system_ix(program_id: &Pubkey, authority: &Pubkey) -> Result<Instruction> {
    system_flag_ix(program_id, authority, Opcode::UnpauseSystem)
}

// ─── Pool lifecycle ──────────────────────────────────────────────────────────

/// Build `InitializePool` (opcode 3): `ratio_a:u64, ratio_b:u64`.
///
/// Mints are passed in canonical order; the registration fee is charged to
/// `payer` and credited to the main treasury.
pub fn initialize_pool_ix(
    program_id: &Pubkey,
    payer:      &Pubkey,
    pool:       &PoolIdentity,
) -> Result<Instruction> {
    let system_state = derive_system_state(program_id)?;
    let treasury = derive_main_treasury(program_id)?;
    let accts = derive_pool_accounts(pool, program_id)?;

    let data = PayloadBuilder::new(Opcode::InitializePool)
        .u64(pool.ratio_a())
        .u64(pool.ratio_b())
        .finish();

    Ok(instruction(
        program_id,
        data,
        vec![
            AccountMeta::new(*payer, true),                         // mut + signer
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_state.address, false),
            AccountMeta::new(accts.pool.address, false),            // mut PDA (init)
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
            AccountMeta::new(treasury.address, false),              // mut (fee)
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new_readonly(pool.token_a(), false),
            AccountMeta::new_readonly(pool.token_b(), false),
            AccountMeta::new(accts.vault_a.address, false),         // mut PDA (init)
            AccountMeta::new(accts.vault_b.address, false),         // mut PDA (init)
            AccountMeta::new(accts.lp_mint_a.address, false),       // mut PDA (init)
            AccountMeta::new(accts.lp_mint_b.address, false),       // mut PDA (init)
        ],
    ))
}

fn pool_admin_ix(
    program_id: &Pubkey,
    authority:  &Pubkey,
    pool_state: &Pubkey,
    opcode:     Opcode,
) -> Result<Instruction> {
    let system_state = derive_system_state(program_id)?;
    Ok(instruction(
        program_id,
        PayloadBuilder::new(opcode).finish(),
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(system_state.address, false),
            AccountMeta::new(*pool_state, false),
        ],
    ))
}

/// Build `PausePool` (opcode 4).
pub fn pause_pool_ix(
    program_id: &Pubkey,
    authority:  &Pubkey,
    pool_state: &Pubkey,
) -> Result<Instruction> {
    pool_admin_ix(program_id, authority, pool_state, Opcode::PausePool)
}

/// Build `UnpausePool` (opcode 5).
pub fn unpause_pool_ix(
    program_id: &Pubkey,
    authority:  &Pubkey,
    pool_state: &Pubkey,
) -> Result<Instruction> {
    pool_admin_ix(program_id, authority, pool_state, Opcode::UnpausePool)
}

/// Build `UpdatePoolFees` (opcode 6).
pub fn update_pool_fees_ix(
    program_id: &Pubkey,
    authority:  &Pubkey,
    pool_state: &Pubkey,
) -> Result<Instruction> {
    pool_admin_ix(program_id, authority, pool_state, Opcode::UpdatePoolFees)
}

/// Build `SetSwapOwnerOnly` (opcode 10).
pub fn set_swap_owner_only_ix(
    program_id: &Pubkey,
    authority:  &Pubkey,
    pool_state: &Pubkey,
) -> Result<Instruction> {
    pool_admin_ix(program_id, authority, pool_state, Opcode::SetSwapOwnerOnly)
}

// ─── Liquidity ───────────────────────────────────────────────────────────────

/// Accounts shared by deposit and withdraw, in program order.
fn liquidity_accounts(
    program_id:    &Pubkey,
    user:          &Pubkey,
    accts:         &DerivedAccountSet,
    user_source:   &Pubkey,
    user_dest:     &Pubkey,
) -> Result<Vec<AccountMeta>> {
    let system_state = derive_system_state(program_id)?;
    Ok(vec![
        AccountMeta::new(*user, true),                          // mut + signer (fee)
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_state.address, false),
        AccountMeta::new(accts.pool.address, false),            // mut
        AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
        AccountMeta::new(accts.vault_a.address, false),         // mut
        AccountMeta::new(accts.vault_b.address, false),         // mut
        AccountMeta::new(*user_source, false),                  // mut
        AccountMeta::new(*user_dest, false),                    // mut
        AccountMeta::new(accts.lp_mint_a.address, false),       // mut
        AccountMeta::new(accts.lp_mint_b.address, false),       // mut
    ])
}

/// Build `Deposit` (opcode 7): `token_mint:32B, amount:u64`.
///
/// `user_token_account` holds `deposit_mint`; `user_lp_account` receives the
/// matching LP token.
#[allow(clippy::too_many_arguments)]
pub fn deposit_ix(
    program_id:         &Pubkey,
    user:               &Pubkey,
    pool:               &PoolIdentity,
    deposit_mint:       &Pubkey,
    user_token_account: &Pubkey,
    user_lp_account:    &Pubkey,
    amount:             u64,
) -> Result<Instruction> {
    check_pool_mint(pool, deposit_mint)?;
    let accts = derive_pool_accounts(pool, program_id)?;

    let data = PayloadBuilder::new(Opcode::Deposit)
        .pubkey(deposit_mint)
        .u64(amount)
        .finish();
    let accounts =
        liquidity_accounts(program_id, user, &accts, user_token_account, user_lp_account)?;
    Ok(instruction(program_id, data, accounts))
}

/// Build `Withdraw` (opcode 8): `token_mint:32B, lp_amount:u64`.
///
/// Burns LP from `user_lp_account` and pays `withdraw_mint` into
/// `user_token_account`.
#[allow(clippy::too_many_arguments)]
pub fn withdraw_ix(
    program_id:         &Pubkey,
    user:               &Pubkey,
    pool:               &PoolIdentity,
    withdraw_mint:      &Pubkey,
    user_lp_account:    &Pubkey,
    user_token_account: &Pubkey,
    lp_amount:          u64,
) -> Result<Instruction> {
    check_pool_mint(pool, withdraw_mint)?;
    let accts = derive_pool_accounts(pool, program_id)?;

    let data = PayloadBuilder::new(Opcode::Withdraw)
        .pubkey(withdraw_mint)
        .u64(lp_amount)
        .finish();
    let accounts =
        liquidity_accounts(program_id, user, &accts, user_lp_account, user_token_account)?;
    Ok(instruction(program_id, data, accounts))
}

// ─── Swap ────────────────────────────────────────────────────────────────────

/// Build `Swap` (opcode 9): `input_mint:32B, amount_in:u64, min_amount_out:u64`.
///
/// Both vaults are passed regardless of direction; the program picks the
/// direction from `input_mint`.
#[allow(clippy::too_many_arguments)]
pub fn swap_ix(
    program_id:          &Pubkey,
    user:                &Pubkey,
    pool:                &PoolIdentity,
    input_mint:          &Pubkey,
    user_input_account:  &Pubkey,
    user_output_account: &Pubkey,
    amount_in:           u64,
    min_amount_out:      u64,
) -> Result<Instruction> {
    check_pool_mint(pool, input_mint)?;
    let system_state = derive_system_state(program_id)?;
    let accts = derive_pool_accounts(pool, program_id)?;

    let data = PayloadBuilder::new(Opcode::Swap)
        .pubkey(input_mint)
        .u64(amount_in)
        .u64(min_amount_out)
        .finish();

    Ok(instruction(
        program_id,
        data,
        vec![
            AccountMeta::new(*user, true),                      // mut + signer (fee)
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_state.address, false),
            AccountMeta::new(accts.pool.address, false),        // mut
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
            AccountMeta::new(accts.vault_a.address, false),     // mut
            AccountMeta::new(accts.vault_b.address, false),     // mut
            AccountMeta::new(*user_input_account, false),       // mut
            AccountMeta::new(*user_output_account, false),      // mut
        ],
    ))
}

// ─── Treasury ────────────────────────────────────────────────────────────────

/// Build `WithdrawTreasuryFees` (opcode 11).
pub fn withdraw_treasury_fees_ix(
    program_id:  &Pubkey,
    authority:   &Pubkey,
    destination: &Pubkey,
) -> Result<Instruction> {
    let system_state = derive_system_state(program_id)?;
    let treasury = derive_main_treasury(program_id)?;
    Ok(instruction(
        program_id,
        PayloadBuilder::new(Opcode::WithdrawTreasuryFees).finish(),
        vec![
            AccountMeta::new(*authority, true),                 // mut + signer
            AccountMeta::new(treasury.address, false),          // mut
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new(*destination, false),              // mut
            AccountMeta::new_readonly(system_state.address, false),
        ],
    ))
}

/// Build `GetTreasuryInfo` (opcode 12). Read-only; meant for simulation.
pub fn get_treasury_info_ix(program_id: &Pubkey) -> Result<Instruction> {
    let treasury = derive_main_treasury(program_id)?;
    Ok(instruction(
        program_id,
        PayloadBuilder::new(Opcode::GetTreasuryInfo).finish(),
        vec![AccountMeta::new_readonly(treasury.address, false)],
    ))
}

/// Build `DonateSol` (opcode 13): `amount:u64, msg_len:u32, msg`.
///
/// `message` is truncated to 200 **bytes** on a UTF-8 boundary, while
/// [`crate::validation::validate_donation`] limits it to 200 characters. A
/// message of multi-byte characters can pass validation and still be cut
/// here (200 two-byte characters keep only the first 100). Check
/// `message.len()` when the full text must reach the program.
pub fn donate_sol_ix(
    program_id: &Pubkey,
    donor:      &Pubkey,
    amount:     u64,
    message:    &str,
) -> Result<Instruction> {
    let system_state = derive_system_state(program_id)?;
    let treasury = derive_main_treasury(program_id)?;
    let message = truncate_utf8(message, MAX_DONATION_MESSAGE_LEN);

    let data = PayloadBuilder::new(Opcode::DonateSol)
        .u64(amount)
        .u32(message.len() as u32)
        .bytes(message.as_bytes())
        .finish();

    Ok(instruction(
        program_id,
        data,
        vec![
            AccountMeta::new(*donor, true),                     // mut + signer
            AccountMeta::new(treasury.address, false),          // mut
            AccountMeta::new_readonly(system_state.address, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
    ))
}

/// Build `GetVersion` (opcode 14). Takes no accounts; meant for simulation.
pub fn get_version_ix(program_id: &Pubkey) -> Instruction {
    instruction(program_id, PayloadBuilder::new(Opcode::GetVersion).finish(), Vec::new())
}

/// Build `ConsolidatePoolFees` (opcode 15): `pool_count:u32`, then one
/// writable account per pool after the fixed accounts.
///
/// Lists longer than 20 are truncated to the first 20; run
/// [`crate::validation::validate_consolidation_params`] first to catch that.
pub fn consolidate_pool_fees_ix(
    program_id: &Pubkey,
    caller:     &Pubkey,
    pools:      &[Pubkey],
) -> Result<Instruction> {
    let system_state = derive_system_state(program_id)?;
    let treasury = derive_main_treasury(program_id)?;

    let pools = &pools[..pools.len().min(MAX_CONSOLIDATION_POOLS)];
    let data = PayloadBuilder::new(Opcode::ConsolidatePoolFees)
        .u32(pools.len() as u32)
        .finish();

    let mut accounts = vec![
        AccountMeta::new(*caller, true),                        // mut + signer
        AccountMeta::new_readonly(system_state.address, false),
        AccountMeta::new(treasury.address, false),              // mut
        AccountMeta::new_readonly(sysvar::clock::ID, false),
    ];
    accounts.extend(pools.iter().map(|p| AccountMeta::new(*p, false)));

    Ok(instruction(program_id, data, accounts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::derive_pool_state;

    fn program() -> Pubkey {
        Pubkey::new_from_array([9; 32])
    }

    fn pool() -> PoolIdentity {
        PoolIdentity::new(Pubkey::new_from_array([1; 32]), Pubkey::new_from_array([2; 32]), 1, 160)
    }

    #[test]
    fn payload_builder_writes_little_endian() {
        let data = PayloadBuilder::new(Opcode::Swap)
            .u32(0x0102_0304)
            .u64(1)
            .finish();
        assert_eq!(data, vec![9, 4, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn initialize_pool_payload_and_accounts() {
        let payer = Pubkey::new_unique();
        let ix = initialize_pool_ix(&program(), &payer, &pool()).unwrap();

        let mut expected = vec![3u8];
        expected.extend_from_slice(&1u64.to_le_bytes());
        expected.extend_from_slice(&160u64.to_le_bytes());
        assert_eq!(ix.data, expected);

        assert_eq!(ix.accounts.len(), 13);
        assert_eq!(ix.accounts[0].pubkey, payer);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        let pool_pda = derive_pool_state(&pool(), &program()).unwrap();
        assert_eq!(ix.accounts[3].pubkey, pool_pda.address);
        assert_eq!(ix.accounts[7].pubkey, pool().token_a());
        assert_eq!(ix.accounts[8].pubkey, pool().token_b());
        assert_eq!(ix.program_id, program());
    }

    #[test]
    fn initialize_pool_uses_canonical_mint_slots() {
        let low = Pubkey::new_from_array([1; 32]);
        let high = Pubkey::new_from_array([2; 32]);
        let id = PoolIdentity::new(high, low, 5, 3);
        let ix = initialize_pool_ix(&program(), &Pubkey::new_unique(), &id).unwrap();

        assert_eq!(ix.accounts[7].pubkey, low);
        assert_eq!(ix.accounts[8].pubkey, high);
        let pool_pda = derive_pool_state(&id, &program()).unwrap();
        assert_eq!(ix.accounts[3].pubkey, pool_pda.address);
    }

    #[test]
    fn deposit_payload_layout() {
        let user = Pubkey::new_unique();
        let mint = pool().token_b();
        let ix = deposit_ix(
            &program(), &user, &pool(), &mint,
            &Pubkey::new_unique(), &Pubkey::new_unique(), 5_000,
        )
        .unwrap();

        assert_eq!(ix.data.len(), 1 + 32 + 8);
        assert_eq!(ix.data[0], 7);
        assert_eq!(&ix.data[1..33], mint.as_ref());
        assert_eq!(&ix.data[33..], &5_000u64.to_le_bytes());
        assert_eq!(ix.accounts.len(), 11);
    }

    #[test]
    fn deposit_rejects_foreign_mint() {
        let err = deposit_ix(
            &program(), &Pubkey::new_unique(), &pool(), &Pubkey::new_unique(),
            &Pubkey::new_unique(), &Pubkey::new_unique(), 1,
        );
        assert!(matches!(err, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn withdraw_orders_lp_source_before_token_dest() {
        let lp = Pubkey::new_unique();
        let dest = Pubkey::new_unique();
        let ix = withdraw_ix(
            &program(), &Pubkey::new_unique(), &pool(), &pool().token_a(), &lp, &dest, 42,
        )
        .unwrap();
        assert_eq!(ix.data[0], 8);
        assert_eq!(ix.accounts[7].pubkey, lp);
        assert_eq!(ix.accounts[8].pubkey, dest);
    }

    #[test]
    fn swap_payload_layout() {
        let mint = pool().token_a();
        let ix = swap_ix(
            &program(), &Pubkey::new_unique(), &pool(), &mint,
            &Pubkey::new_unique(), &Pubkey::new_unique(), 100, 15_840,
        )
        .unwrap();

        assert_eq!(ix.data.len(), 1 + 32 + 8 + 8);
        assert_eq!(ix.data[0], 9);
        assert_eq!(&ix.data[33..41], &100u64.to_le_bytes());
        assert_eq!(&ix.data[41..49], &15_840u64.to_le_bytes());
        assert_eq!(ix.accounts.len(), 9);
    }

    #[test]
    fn donation_message_is_length_prefixed() {
        let ix = donate_sol_ix(&program(), &Pubkey::new_unique(), 100_000_000, "gm").unwrap();
        assert_eq!(ix.data[0], 13);
        assert_eq!(&ix.data[1..9], &100_000_000u64.to_le_bytes());
        assert_eq!(&ix.data[9..13], &2u32.to_le_bytes());
        assert_eq!(&ix.data[13..], b"gm");
    }

    #[test]
    fn donation_message_truncates_to_200_bytes() {
        let long = "x".repeat(250);
        let ix = donate_sol_ix(&program(), &Pubkey::new_unique(), 1, &long).unwrap();
        assert_eq!(&ix.data[9..13], &200u32.to_le_bytes());
        assert_eq!(ix.data.len(), 13 + 200);
    }

    #[test]
    fn truncation_keeps_utf8_valid() {
        // 'é' is two bytes; 101 of them is 202 bytes.
        let text = "é".repeat(101);
        let cut = truncate_utf8(&text, 200);
        assert_eq!(cut.len(), 200);
        let odd = format!("a{}", "é".repeat(100));
        assert_eq!(truncate_utf8(&odd, 200).len(), 199);
    }

    #[test]
    fn two_byte_message_within_char_limit_is_cut_by_bytes() {
        let text = "é".repeat(200);
        let ix = donate_sol_ix(&program(), &Pubkey::new_unique(), 100_000_000, &text).unwrap();
        assert_eq!(&ix.data[9..13], &200u32.to_le_bytes());
        assert_eq!(std::str::from_utf8(&ix.data[13..]).unwrap().chars().count(), 100);
    }

    #[test]
    fn consolidation_truncates_to_twenty_pools() {
        let pools: Vec<Pubkey> = (0..25).map(|_| Pubkey::new_unique()).collect();
        let ix = consolidate_pool_fees_ix(&program(), &Pubkey::new_unique(), &pools).unwrap();

        assert_eq!(ix.data, [vec![15u8], 20u32.to_le_bytes().to_vec()].concat());
        assert_eq!(ix.accounts.len(), 4 + 20);
        assert_eq!(ix.accounts[4].pubkey, pools[0]);
        assert_eq!(ix.accounts[23].pubkey, pools[19]);
        assert!(ix.accounts[4..].iter().all(|m| m.is_writable && !m.is_signer));
    }

    #[test]
    fn read_only_queries() {
        let version = get_version_ix(&program());
        assert_eq!(version.data, vec![14]);
        assert!(version.accounts.is_empty());

        let treasury = get_treasury_info_ix(&program()).unwrap();
        assert_eq!(treasury.data, vec![12]);
        assert_eq!(treasury.accounts.len(), 1);
        assert!(!treasury.accounts[0].is_writable);
    }

    #[test]
    fn admin_instructions_have_empty_payloads() {
        let auth = Pubkey::new_unique();
        let pool_state = Pubkey::new_unique();
        assert_eq!(initialize_program_ix(&program(), &auth).unwrap().data, vec![0]);
        assert_eq!(pause_system_ix(&program(), &auth).unwrap().data, vec![1]);
        assert_eq!(unpause_system_ix(&program(), &auth).unwrap().data, vec![2]);
        assert_eq!(pause_pool_ix(&program(), &auth, &pool_state).unwrap().data, vec![4]);
        assert_eq!(unpause_pool_ix(&program(), &auth, &pool_state).unwrap().data, vec![5]);
        assert_eq!(update_pool_fees_ix(&program(), &auth, &pool_state).unwrap().data, vec![6]);
        assert_eq!(set_swap_owner_only_ix(&program(), &auth, &pool_state).unwrap().data, vec![10]);
        assert_eq!(
            withdraw_treasury_fees_ix(&program(), &auth, &Pubkey::new_unique()).unwrap().data,
            vec![11]
        );
    }
}
