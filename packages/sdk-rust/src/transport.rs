//! Ledger transport seam.
//!
//! The SDK never sends or confirms transactions. It only needs three
//! read-only round-trips, expressed by [`LedgerTransport`]. The nonblocking
//! [`RpcClient`] implements it; tests and alternative backends can supply
//! their own.

use std::future::Future;

use solana_client::{
    nonblocking::rpc_client::RpcClient, rpc_config::RpcSimulateTransactionConfig,
};
use solana_sdk::{account::Account, hash::Hash, pubkey::Pubkey, transaction::Transaction};

use crate::error::Result;

/// Logs and outcome of a dry-run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub logs:  Vec<String>,
    /// Transaction error rendered as text; `None` when the simulation succeeded.
    pub error: Option<String>,
}

/// Read-only access to the ledger.
///
/// Failures are surfaced verbatim; implementations must not retry.
pub trait LedgerTransport {
    /// Fetch an account, `None` when it does not exist.
    fn fetch_account(
        &self,
        address: &Pubkey,
    ) -> impl Future<Output = Result<Option<Account>>> + Send;

    /// Latest blockhash to stamp simulated transactions with.
    fn latest_blockhash(&self) -> impl Future<Output = Result<Hash>> + Send;

    /// Dry-run an unsigned transaction.
    fn simulate_transaction(
        &self,
        tx: &Transaction,
    ) -> impl Future<Output = Result<SimulationOutcome>> + Send;
}

impl LedgerTransport for RpcClient {
    async fn fetch_account(&self, address: &Pubkey) -> Result<Option<Account>> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await?;
        Ok(response.value)
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        Ok(self.get_latest_blockhash().await?)
    }

    async fn simulate_transaction(&self, tx: &Transaction) -> Result<SimulationOutcome> {
        let config = RpcSimulateTransactionConfig {
            sig_verify:               false,
            replace_recent_blockhash: true,
            commitment:               Some(self.commitment()),
            ..Default::default()
        };
        let response = self.simulate_transaction_with_config(tx, config).await?;
        Ok(SimulationOutcome {
            logs:  response.value.logs.unwrap_or_default(),
            error: response.value.err.map(|err| format!("{err:?}")),
        })
    }
}
