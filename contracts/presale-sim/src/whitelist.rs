use cosmwasm_schema::cw_serde;
use sha2::{Digest, Sha256};

use crate::error::ContractError;

pub const BPS_DENOMINATOR: u16 = 10_000;

/// Default share of new wallets admitted by [`WhitelistPolicy::Sampled`]: 80%.
pub const DEFAULT_APPROVAL_BPS: u16 = 8_000;

const SAMPLE_DOMAIN: &[u8] = b"presale_sim_v1";

/// Decides whether a participant seen for the first time is whitelisted.
pub trait WhitelistDecider {
    fn decide(&self, identifier: &str) -> bool;
}

impl<F> WhitelistDecider for F
where
    F: Fn(&str) -> bool,
{
    fn decide(&self, identifier: &str) -> bool {
        self(identifier)
    }
}

#[cw_serde]
pub enum WhitelistPolicy {
    AllowAll {},
    DenyAll {},
    /// Admits roughly `approval_bps / 10_000` of identifiers.
    /// Deterministic per identifier: SHA256(domain || identifier) mod 10_000.
    Sampled { approval_bps: u16 },
}

impl Default for WhitelistPolicy {
    fn default() -> Self {
        WhitelistPolicy::Sampled {
            approval_bps: DEFAULT_APPROVAL_BPS,
        }
    }
}

impl WhitelistPolicy {
    pub fn validate(&self) -> Result<(), ContractError> {
        match self {
            WhitelistPolicy::Sampled { approval_bps } if *approval_bps > BPS_DENOMINATOR => {
                Err(ContractError::InvalidWhitelistPolicy {
                    approval_bps: *approval_bps,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WhitelistPolicy::AllowAll {} => "allow_all",
            WhitelistPolicy::DenyAll {} => "deny_all",
            WhitelistPolicy::Sampled { .. } => "sampled",
        }
    }
}

impl WhitelistDecider for WhitelistPolicy {
    fn decide(&self, identifier: &str) -> bool {
        match self {
            WhitelistPolicy::AllowAll {} => true,
            WhitelistPolicy::DenyAll {} => false,
            WhitelistPolicy::Sampled { approval_bps } => {
                sample_bucket(identifier) < u64::from(*approval_bps)
            }
        }
    }
}

/// Maps an identifier to a bucket in `0..10_000`.
pub fn sample_bucket(identifier: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(SAMPLE_DOMAIN);
    hasher.update(identifier.as_bytes());
    let digest = hasher.finalize();

    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head) % u64::from(BPS_DENOMINATOR)
}
