//! State recovery from simulation logs.
//!
//! Treasury totals and the contract version are only reported as `msg!`
//! lines during a dry-run, so they are read back by label. Logs are
//! best-effort: a missing label falls back to a default instead of failing,
//! and when a label repeats the first line wins.

use crate::constants::error_message;
use crate::types::{TreasurySnapshot, VersionInfo};

// ─── Labels ───────────────────────────────────────────────────────────────────

pub const LABEL_TOTAL_BALANCE:    &str = "Total Balance:";
pub const LABEL_FEES_COLLECTED:   &str = "Total Fees Collected:";
pub const LABEL_LAST_WITHDRAWAL:  &str = "Last Withdrawal:";
pub const LABEL_WITHDRAWAL_COUNT: &str = "Withdrawal Count:";
pub const LABEL_DONATION_COUNT:   &str = "Donation Count:";
pub const LABEL_TOTAL_DONATIONS:  &str = "Total Donations:";
pub const LABEL_CONTRACT_NAME:    &str = "Contract Name:";
pub const LABEL_CONTRACT_VERSION: &str = "Contract Version:";

/// Placeholder for text fields absent from the logs.
pub const UNKNOWN: &str = "unknown";

const CUSTOM_ERROR_MARKER: &str = "custom program error: ";

// ─── Token extraction ────────────────────────────────────────────────────────

/// First whitespace-delimited token after `label` on the first line carrying it.
pub fn find_label_token<'a, S: AsRef<str>>(logs: &'a [S], label: &str) -> Option<&'a str> {
    logs.iter().find_map(|line| {
        let line = line.as_ref();
        let (_, rest) = line.split_once(label)?;
        rest.split_whitespace()
            .next()
            .map(|tok| tok.trim_end_matches([',', ';', '.']))
    })
}

fn numeric<T: std::str::FromStr>(token: &str) -> Option<T> {
    let cleaned: String = token.chars().filter(|c| *c != ',' && *c != '_').collect();
    cleaned.parse().ok()
}

/// Numeric value for `label`, or `T::default()` when absent or unparsable.
fn label_number<S, T>(logs: &[S], label: &str) -> T
where
    S: AsRef<str>,
    T: std::str::FromStr + Default,
{
    match find_label_token(logs, label) {
        Some(token) => numeric(token).unwrap_or_else(|| {
            log::warn!("log label '{label}' carried non-numeric token '{token}'");
            T::default()
        }),
        None => {
            log::debug!("log label '{label}' not present");
            T::default()
        }
    }
}

fn label_text<S: AsRef<str>>(logs: &[S], label: &str) -> String {
    find_label_token(logs, label)
        .filter(|t| !t.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

// ─── Snapshots ───────────────────────────────────────────────────────────────

/// Assemble a [`TreasurySnapshot`] from `GetTreasuryInfo` logs.
pub fn parse_treasury_info<S: AsRef<str>>(logs: &[S]) -> TreasurySnapshot {
    TreasurySnapshot {
        balance:              label_number(logs, LABEL_TOTAL_BALANCE),
        fees_collected:       label_number(logs, LABEL_FEES_COLLECTED),
        last_withdrawal_time: label_number(logs, LABEL_LAST_WITHDRAWAL),
        withdrawal_count:     label_number(logs, LABEL_WITHDRAWAL_COUNT),
        donation_count:       label_number(logs, LABEL_DONATION_COUNT),
        total_donations:      label_number(logs, LABEL_TOTAL_DONATIONS),
    }
}

/// Assemble a [`VersionInfo`] from `GetVersion` logs.
pub fn parse_version_info<S: AsRef<str>>(logs: &[S]) -> VersionInfo {
    VersionInfo {
        contract_name: label_text(logs, LABEL_CONTRACT_NAME),
        version:       label_text(logs, LABEL_CONTRACT_VERSION),
    }
}

// ─── Program errors ──────────────────────────────────────────────────────────

/// Custom error code from a `custom program error: 0x…` log line.
pub fn extract_error_code<S: AsRef<str>>(logs: &[S]) -> Option<u32> {
    logs.iter().find_map(|line| {
        let (_, rest) = line.as_ref().split_once(CUSTOM_ERROR_MARKER)?;
        let token = rest.split_whitespace().next()?;
        match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => token.parse().ok(),
        }
    })
}

/// Human-readable text for a custom program error code.
pub fn format_error_code(code: u32) -> String {
    match error_message(code) {
        Some(msg) => msg.to_string(),
        None => format!("Unknown error code: {code}"),
    }
}
