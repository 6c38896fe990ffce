//! Fixed-Ratio Trading Rust SDK
//!
//! Client library for the fixed-ratio swap program on Solana. Build
//! well-formed instructions, derive every protocol address, quote swaps and
//! liquidity with exact integer math, and read treasury/version state back
//! from simulation logs without any program authority.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fixed_ratio_sdk::{FixedRatioClient, PoolIdentity};
//! use solana_sdk::pubkey::Pubkey;
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let program_id = Pubkey::new_unique(); // the deployed program
//!     let client = FixedRatioClient::devnet(program_id);
//!
//!     let sol  = Pubkey::from_str("So11111111111111111111111111111111111111112")?;
//!     let usdc = Pubkey::from_str("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")?;
//!     let pool = PoolIdentity::new(sol, usdc, 1, 160);
//!
//!     // 1. Validate before building anything
//!     let check = client.validate_swap(1_000_000_000, 1);
//!     assert!(check.is_valid, "{:?}", check.errors);
//!
//!     // 2. Quote with 1% slippage and build the instruction
//!     let quote = client.quote_swap(&pool, &pool.token_a(), 1_000_000_000, 1)?;
//!     let user = Pubkey::new_unique();
//!     let ix = client.swap_ix(
//!         &user, &pool, &pool.token_a(),
//!         &Pubkey::new_unique(), &Pubkey::new_unique(),
//!         quote.amount_in, quote.min_amount_out,
//!     )?;
//!     println!("swap ix with {} accounts", ix.accounts.len());
//!
//!     // 3. Read-only state comes from a dry-run
//!     let treasury = client.get_treasury_info(&user).await?;
//!     println!("treasury balance: {}", treasury.balance);
//!     Ok(())
//! }
//! ```
//!
//! # Feature Overview
//!
//! | Item | Description |
//! |------|-------------|
//! | [`pda`] | Deterministic PDAs for system state, treasury, pools, vaults, LP mints |
//! | [`instructions`] | Opcode + little-endian payload builders with fixed account order |
//! | [`math`] | Swap output, slippage, LP share estimates, unit conversions |
//! | [`logs`] | Treasury/version snapshots and error codes from simulation logs |
//! | [`validation`] | Accumulating parameter checks |
//! | [`FixedRatioClient::get_version`] | Contract version via simulation |
//! | [`FixedRatioClient::get_treasury_info`] | Treasury totals via simulation |
//! | [`FixedRatioClient::pool_exists`] | Pool account lookup |

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod logs;
pub mod math;
pub mod pda;
pub mod state;
pub mod transport;
pub mod types;
pub mod validation;

pub use client::FixedRatioClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use transport::{LedgerTransport, SimulationOutcome};
pub use types::*;
pub use validation::ValidationResult;
