//! [`FixedRatioClient`], the main entry point for integrations.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction, message::Message, pubkey::Pubkey, transaction::Transaction,
};

use crate::{
    config::{ClientConfig, DEVNET_RPC, MAINNET_RPC},
    error::{Error, Result},
    instructions::{
        consolidate_pool_fees_ix, deposit_ix, donate_sol_ix, get_treasury_info_ix,
        get_version_ix, initialize_pool_ix, swap_ix, withdraw_ix,
    },
    logs::{extract_error_code, format_error_code, parse_treasury_info, parse_version_info},
    math::{apply_slippage, operation_fee, price_impact, swap_output, FeeKind},
    pda::{derive_main_treasury, derive_pool_accounts, derive_pool_state, derive_system_state},
    state::{parse_pool_state, PoolState},
    transport::LedgerTransport,
    types::{
        DerivedAccountSet, DerivedAddress, PoolAddressInfo, PoolIdentity, SwapQuote, TokenPair,
        TreasurySnapshot, VersionInfo,
    },
    validation::{
        validate_consolidation_params, validate_deposit, validate_donation,
        validate_pool_creation, validate_swap, validate_withdrawal, ValidationResult,
    },
};

// ─── Client ───────────────────────────────────────────────────────────────────

/// Fixed-ratio trading client.
///
/// Everything except the version/treasury queries and pool lookups is a pure
/// computation; those go through the [`LedgerTransport`] and are never retried.
///
/// ```rust,no_run
/// # use fixed_ratio_sdk::{FixedRatioClient, PoolIdentity};
/// # use solana_sdk::pubkey::Pubkey;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FixedRatioClient::devnet(Pubkey::new_unique());
/// let pool = PoolIdentity::new(Pubkey::new_unique(), Pubkey::new_unique(), 1, 160);
/// if client.pool_exists(&pool).await? {
///     let quote = client.quote_swap(&pool, &pool.token_a(), 1_000, 1)?;
///     println!("expected out: {}", quote.expected_out);
/// }
/// # Ok(())
/// # }
/// ```
pub struct FixedRatioClient<T = RpcClient> {
    transport:  T,
    program_id: Pubkey,
}

impl FixedRatioClient<RpcClient> {
    /// Create a client pointing at any RPC endpoint.
    pub fn new(rpc_url: impl Into<String>, program_id: Pubkey) -> Self {
        Self::with_transport(RpcClient::new(rpc_url.into()), program_id)
    }

    /// Pre-configured client for Solana devnet.
    pub fn devnet(program_id: Pubkey) -> Self {
        Self::new(DEVNET_RPC, program_id)
    }

    /// Pre-configured client for Solana mainnet-beta.
    pub fn mainnet(program_id: Pubkey) -> Self {
        Self::new(MAINNET_RPC, program_id)
    }

    /// Build a client from a validated [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let commitment = config.commitment_config()?;
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), commitment);
        Ok(Self::with_transport(rpc, config.program_id))
    }
}

impl<T> FixedRatioClient<T> {
    /// Use a custom transport (mock ledgers, alternative RPC stacks).
    pub fn with_transport(transport: T, program_id: Pubkey) -> Self {
        Self { transport, program_id }
    }

    /// Override the program ID (useful for locally deployed programs in tests).
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Addresses ─────────────────────────────────────────────────────────────

    pub fn system_state_address(&self) -> Result<DerivedAddress> {
        derive_system_state(&self.program_id)
    }

    pub fn main_treasury_address(&self) -> Result<DerivedAddress> {
        derive_main_treasury(&self.program_id)
    }

    /// Derive the pool ID for caller-ordered mints.
    ///
    /// `pair.swapped` reports whether `first` became canonical token B. The
    /// ratios are kept as given and apply to the canonical order.
    pub fn derive_pool_address(
        &self,
        first:   &Pubkey,
        second:  &Pubkey,
        ratio_a: u64,
        ratio_b: u64,
    ) -> Result<PoolAddressInfo> {
        let pair = TokenPair::new(*first, *second);
        let identity = PoolIdentity::new(*first, *second, ratio_a, ratio_b);
        let pool = derive_pool_state(&identity, &self.program_id)?;
        Ok(PoolAddressInfo { pool, pair })
    }

    pub fn derive_pool_accounts(&self, pool: &PoolIdentity) -> Result<DerivedAccountSet> {
        derive_pool_accounts(pool, &self.program_id)
    }

    // ── Instructions ──────────────────────────────────────────────────────────

    pub fn create_pool_ix(&self, payer: &Pubkey, pool: &PoolIdentity) -> Result<Instruction> {
        initialize_pool_ix(&self.program_id, payer, pool)
    }

    pub fn deposit_ix(
        &self,
        user:               &Pubkey,
        pool:               &PoolIdentity,
        deposit_mint:       &Pubkey,
        user_token_account: &Pubkey,
        user_lp_account:    &Pubkey,
        amount:             u64,
    ) -> Result<Instruction> {
        deposit_ix(
            &self.program_id, user, pool, deposit_mint,
            user_token_account, user_lp_account, amount,
        )
    }

    pub fn withdraw_ix(
        &self,
        user:               &Pubkey,
        pool:               &PoolIdentity,
        withdraw_mint:      &Pubkey,
        user_lp_account:    &Pubkey,
        user_token_account: &Pubkey,
        lp_amount:          u64,
    ) -> Result<Instruction> {
        withdraw_ix(
            &self.program_id, user, pool, withdraw_mint,
            user_lp_account, user_token_account, lp_amount,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn swap_ix(
        &self,
        user:                &Pubkey,
        pool:                &PoolIdentity,
        input_mint:          &Pubkey,
        user_input_account:  &Pubkey,
        user_output_account: &Pubkey,
        amount_in:           u64,
        min_amount_out:      u64,
    ) -> Result<Instruction> {
        swap_ix(
            &self.program_id, user, pool, input_mint,
            user_input_account, user_output_account, amount_in, min_amount_out,
        )
    }

    pub fn donate_ix(&self, donor: &Pubkey, amount: u64, message: &str) -> Result<Instruction> {
        donate_sol_ix(&self.program_id, donor, amount, message)
    }

    pub fn consolidate_fees_ix(&self, caller: &Pubkey, pools: &[Pubkey]) -> Result<Instruction> {
        consolidate_pool_fees_ix(&self.program_id, caller, pools)
    }

    // ── Quotes ────────────────────────────────────────────────────────────────

    /// Off-chain quote for swapping `amount_in` of `input_mint`.
    pub fn quote_swap(
        &self,
        pool:          &PoolIdentity,
        input_mint:    &Pubkey,
        amount_in:     u64,
        tolerance_pct: u32,
    ) -> Result<SwapQuote> {
        let (ratio_in, ratio_out) = if *input_mint == pool.token_a() {
            (pool.ratio_a(), pool.ratio_b())
        } else if *input_mint == pool.token_b() {
            (pool.ratio_b(), pool.ratio_a())
        } else {
            return Err(Error::InvalidArgument(format!(
                "mint {input_mint} is not part of the pool"
            )));
        };

        let expected_out = swap_output(amount_in, ratio_in, ratio_out)?;
        Ok(SwapQuote {
            amount_in,
            expected_out,
            min_amount_out:   apply_slippage(expected_out, tolerance_pct)?,
            contract_fee:     operation_fee(FeeKind::Swap),
            price_impact_pct: price_impact(amount_in, expected_out, ratio_in, ratio_out)?,
        })
    }

    // ── Validation ────────────────────────────────────────────────────────────

    pub fn validate_pool_creation(
        &self,
        token_a: &Pubkey,
        token_b: &Pubkey,
        ratio_a: u64,
        ratio_b: u64,
    ) -> ValidationResult {
        validate_pool_creation(token_a, token_b, ratio_a, ratio_b)
    }

    pub fn validate_deposit(&self, amount: u64) -> ValidationResult {
        validate_deposit(amount)
    }

    pub fn validate_withdrawal(&self, lp_amount: u64) -> ValidationResult {
        validate_withdrawal(lp_amount)
    }

    pub fn validate_swap(&self, amount_in: u64, tolerance_pct: u32) -> ValidationResult {
        validate_swap(amount_in, tolerance_pct)
    }

    pub fn validate_donation(&self, amount: u64, message: &str) -> ValidationResult {
        validate_donation(amount, message)
    }

    pub fn validate_consolidation_params(&self, pools: &[Pubkey]) -> ValidationResult {
        validate_consolidation_params(pools)
    }
}

impl<T: LedgerTransport> FixedRatioClient<T> {
    // ── Read operations ───────────────────────────────────────────────────────

    /// Contract name and version, read from a `GetVersion` dry-run.
    ///
    /// `payer` only needs to exist on-chain; nothing is signed.
    pub async fn get_version(&self, payer: &Pubkey) -> Result<VersionInfo> {
        let logs = self.simulate_logs(get_version_ix(&self.program_id), payer).await?;
        Ok(parse_version_info(&logs))
    }

    /// Treasury totals, read from a `GetTreasuryInfo` dry-run.
    pub async fn get_treasury_info(&self, payer: &Pubkey) -> Result<TreasurySnapshot> {
        let logs = self.simulate_logs(get_treasury_info_ix(&self.program_id)?, payer).await?;
        Ok(parse_treasury_info(&logs))
    }

    /// Whether the pool account exists and is owned by the program.
    pub async fn pool_exists(&self, pool: &PoolIdentity) -> Result<bool> {
        let address = derive_pool_state(pool, &self.program_id)?.address;
        let account = self.transport.fetch_account(&address).await?;
        Ok(account.is_some_and(|acc| acc.owner == self.program_id && !acc.data.is_empty()))
    }

    /// Fetch and decode the pool account; `None` when it does not exist.
    pub async fn fetch_pool_state(&self, pool: &PoolIdentity) -> Result<Option<PoolState>> {
        let address = derive_pool_state(pool, &self.program_id)?.address;
        match self.transport.fetch_account(&address).await? {
            Some(acc) if acc.owner == self.program_id => parse_pool_state(&acc.data).map(Some),
            Some(acc) => {
                log::warn!("account {address} is owned by {}, not the program", acc.owner);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Simulate a single read-only instruction and return its logs.
    async fn simulate_logs(&self, ix: Instruction, payer: &Pubkey) -> Result<Vec<String>> {
        let blockhash = self.transport.latest_blockhash().await?;
        let message = Message::new_with_blockhash(&[ix], Some(payer), &blockhash);
        let tx = Transaction::new_unsigned(message);

        log::debug!("simulating read-only instruction against {}", self.program_id);
        let outcome = self.transport.simulate_transaction(&tx).await?;

        if let Some(reason) = outcome.error {
            let protocol_error = extract_error_code(&outcome.logs).map(format_error_code);
            log::warn!("simulation failed: {reason} ({protocol_error:?})");
            return Err(Error::SimulationFailed { reason, protocol_error });
        }
        Ok(outcome.logs)
    }
}
