//! SDK error type.
//!
//! Parameter validation never produces an [`Error`]; it is returned as data
//! through [`crate::validation::ValidationResult`].

/// All errors returned by the fixed-ratio SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── RPC / network ────────────────────────────────────────────────────────
    /// A Solana JSON-RPC call failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    /// A non-RPC transport reported a failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The dry-run of a read-only instruction was rejected by the ledger.
    #[error("Simulation failed: {reason}")]
    SimulationFailed {
        reason:         String,
        /// Human-readable protocol error decoded from the simulation logs.
        protocol_error: Option<String>,
    },

    // ── Address derivation ───────────────────────────────────────────────────
    /// Every bump in `0..=255` produced an on-curve address.
    #[error("Could not derive a program address for seed '{tag}' (all 256 bumps exhausted)")]
    DerivationFailure { tag: String },

    // ── Arithmetic ───────────────────────────────────────────────────────────
    #[error("Division by zero in ratio math")]
    DivisionByZero,

    #[error("Integer overflow in ratio math")]
    MathOverflow,

    // ── Arguments ────────────────────────────────────────────────────────────
    /// Slippage tolerance outside the accepted `0..=50` percent range.
    #[error("Slippage tolerance {0}% is outside 0..=50")]
    InvalidSlippage(u32),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ── Account parsing ──────────────────────────────────────────────────────
    /// Raw account bytes could not be deserialized.
    #[error("Account parse error at offset {offset}: {reason}")]
    ParseError { offset: usize, reason: String },

    // ── Configuration ────────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias so every module can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;
