//! Static protocol tables: fee schedule, PDA seeds, opcodes, limits and
//! on-chain error codes.

// ─── Fee schedule (lamports, quoted by the program) ──────────────────────────

/// Fee charged for pool registration: 1.15 SOL.
pub const REGISTRATION_FEE: u64 = 1_150_000_000;
/// Fee charged for each deposit or withdrawal: 0.0013 SOL.
pub const DEPOSIT_WITHDRAWAL_FEE: u64 = 1_300_000;
/// Fixed contract fee charged per swap.
pub const SWAP_CONTRACT_FEE: u64 = 27_150;
/// Smallest donation the treasury accepts: 0.1 SOL.
pub const MIN_DONATION_AMOUNT: u64 = 100_000_000;

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
/// Largest donation the SDK will build: 1000 SOL.
pub const MAX_DONATION_AMOUNT: u64 = 1_000 * LAMPORTS_PER_SOL;

// ─── PDA seeds ───────────────────────────────────────────────────────────────

pub const SYSTEM_STATE_SEED:    &[u8] = b"system_state";
pub const MAIN_TREASURY_SEED:   &[u8] = b"main_treasury";
pub const POOL_STATE_SEED:      &[u8] = b"pool_state_v2";
pub const TOKEN_A_VAULT_SEED:   &[u8] = b"token_a_vault";
pub const TOKEN_B_VAULT_SEED:   &[u8] = b"token_b_vault";
pub const LP_TOKEN_A_MINT_SEED: &[u8] = b"lp_token_a_mint";
pub const LP_TOKEN_B_MINT_SEED: &[u8] = b"lp_token_b_mint";

// ─── Limits ──────────────────────────────────────────────────────────────────

/// Ceiling for any transferred amount (overflow headroom for u128 math).
pub const MAX_TOKEN_AMOUNT: u64 = 1_000_000_000_000_000;
/// Ceiling for either side of a pool ratio.
pub const MAX_RATIO: u64 = 1_000_000_000_000_000_000;
/// Slippage tolerance is an integer percent in `0..=MAX_SLIPPAGE_PERCENT`.
pub const MAX_SLIPPAGE_PERCENT: u32 = 50;
/// Donation messages are capped at this many bytes on the wire
/// (and this many characters by validation).
pub const MAX_DONATION_MESSAGE_LEN: usize = 200;
/// Pools a single consolidation instruction may reference.
pub const MAX_CONSOLIDATION_POOLS: usize = 20;
/// Denominator for slippage math.
pub const BPS_DENOMINATOR: u128 = 10_000;

// ─── Pool flags (PoolState::flags) ───────────────────────────────────────────

pub const POOL_FLAG_ONE_TO_MANY_RATIO:     u8 = 1;
pub const POOL_FLAG_LIQUIDITY_PAUSED:      u8 = 2;
pub const POOL_FLAG_SWAPS_PAUSED:          u8 = 4;
pub const POOL_FLAG_WITHDRAWAL_PROTECTION: u8 = 8;
pub const POOL_FLAG_SINGLE_LP_TOKEN:       u8 = 16;
pub const POOL_FLAG_SWAP_FOR_OWNERS_ONLY:  u8 = 32;

// ─── Instruction opcodes ─────────────────────────────────────────────────────

/// First byte of every instruction payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    InitializeProgram    = 0,
    PauseSystem          = 1,
    UnpauseSystem        = 2,
    InitializePool       = 3,
    PausePool            = 4,
    UnpausePool          = 5,
    UpdatePoolFees       = 6,
    Deposit              = 7,
    Withdraw             = 8,
    Swap                 = 9,
    SetSwapOwnerOnly     = 10,
    WithdrawTreasuryFees = 11,
    GetTreasuryInfo      = 12,
    DonateSol            = 13,
    GetVersion           = 14,
    ConsolidatePoolFees  = 15,
}

impl Opcode {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

// ─── On-chain error codes ────────────────────────────────────────────────────

/// Custom program error codes and their messages.
pub const ERROR_CODES: &[(u32, &str)] = &[
    (6006, "System is paused"),
    (6007, "Pool is paused"),
    (6008, "Slippage tolerance exceeded"),
    (6009, "Insufficient balance"),
    (6010, "Invalid amount"),
    (6011, "Invalid ratio"),
    (6012, "Pool already exists"),
    (6013, "Pool not found"),
    (6014, "Unauthorized"),
    (6015, "Invalid token mint"),
    (6016, "Invalid account"),
];

/// Human-readable message for a custom program error code.
pub fn error_message(code: u32) -> Option<&'static str> {
    ERROR_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, msg)| *msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcodes_match_wire_table() {
        assert_eq!(Opcode::InitializeProgram.as_u8(), 0);
        assert_eq!(Opcode::InitializePool.as_u8(), 3);
        assert_eq!(Opcode::Swap.as_u8(), 9);
        assert_eq!(Opcode::DonateSol.as_u8(), 13);
        assert_eq!(Opcode::ConsolidatePoolFees.as_u8(), 15);
    }

    #[test]
    fn error_table_covers_6006_through_6016() {
        for code in 6006..=6016 {
            assert!(error_message(code).is_some(), "missing code {code}");
        }
        assert!(error_message(6005).is_none());
        assert!(error_message(6017).is_none());
    }
}
