use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Decimal, Timestamp};

use crate::state::{PresaleConfig, SaleStatus};
use crate::whitelist::WhitelistPolicy;

/// Default sale length when `sale_end_time` is omitted: 3 days.
pub const DEFAULT_SALE_DURATION_SECS: u64 = 3 * 24 * 60 * 60;

pub fn default_token_name() -> String {
    "Aurora".to_string()
}

pub fn default_token_symbol() -> String {
    "AUR".to_string()
}

pub fn default_status() -> SaleStatus {
    SaleStatus::Live
}

pub fn default_tokens_sold() -> Decimal {
    Decimal::from_ratio(65_000_000u128, 1u128)
}

pub fn default_total_tokens() -> Decimal {
    Decimal::from_ratio(100_000_000u128, 1u128)
}

pub fn default_token_price() -> Decimal {
    Decimal::permille(5)
}

pub fn default_min_purchase() -> Decimal {
    Decimal::permille(100)
}

pub fn default_max_purchase() -> Decimal {
    Decimal::from_ratio(5u128, 1u128)
}

/// Every field is optional; omitted ones take the demo sale defaults.
#[cw_serde]
pub struct InstantiateMsg {
    #[serde(default = "default_token_name")]
    pub token_name: String,
    #[serde(default = "default_token_symbol")]
    pub token_symbol: String,
    #[serde(default = "default_status")]
    pub status: SaleStatus,
    #[serde(default = "default_tokens_sold")]
    pub tokens_sold: Decimal,
    #[serde(default = "default_total_tokens")]
    pub total_tokens: Decimal,
    #[serde(default = "default_token_price")]
    pub token_price: Decimal,
    /// None = block time + 3 days
    #[serde(default)]
    pub sale_end_time: Option<Timestamp>,
    #[serde(default = "default_min_purchase")]
    pub min_purchase: Decimal,
    #[serde(default = "default_max_purchase")]
    pub max_purchase: Decimal,
    #[serde(default)]
    pub whitelist_policy: WhitelistPolicy,
}

impl Default for InstantiateMsg {
    fn default() -> Self {
        Self {
            token_name: default_token_name(),
            token_symbol: default_token_symbol(),
            status: default_status(),
            tokens_sold: default_tokens_sold(),
            total_tokens: default_total_tokens(),
            token_price: default_token_price(),
            sale_end_time: None,
            min_purchase: default_min_purchase(),
            max_purchase: default_max_purchase(),
            whitelist_policy: WhitelistPolicy::default(),
        }
    }
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register the sender as a participant, or fetch it if already known.
    /// Response data carries the participant.
    Connect {},

    /// Buy tokens with `amount` of the reference currency. Nothing is transferred.
    Buy { amount: Decimal },

    /// Replace the whole presale configuration. Values are stored as given.
    SetPresaleConfig { config: PresaleConfig },

    /// Replace the policy used for participants registered from now on.
    SetWhitelistPolicy { policy: WhitelistPolicy },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current presale configuration with its effective status
    #[returns(PresaleResponse)]
    Presale {},

    /// A single participant, if registered. Never registers.
    #[returns(ParticipantQueryResponse)]
    Participant { address: String },

    /// Registered participants ordered by address
    #[returns(ParticipantsResponse)]
    Participants {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Sale progress: sold vs total, time left
    #[returns(ProgressResponse)]
    Progress {},

    /// Tokens `amount` would buy at the current price
    #[returns(QuoteResponse)]
    Quote { amount: Decimal },

    #[returns(WhitelistPolicyResponse)]
    WhitelistPolicy {},
}

// ---- Response types ----

#[cw_serde]
pub struct PresaleResponse {
    pub token_name: String,
    pub token_symbol: String,
    pub status: SaleStatus,
    pub effective_status: SaleStatus,
    pub tokens_sold: Decimal,
    pub total_tokens: Decimal,
    pub token_price: Decimal,
    pub sale_end_time: Timestamp,
    pub min_purchase: Decimal,
    pub max_purchase: Decimal,
}

#[cw_serde]
pub struct ParticipantResponse {
    pub address: Addr,
    pub is_whitelisted: bool,
    pub contribution: Decimal,
    pub tokens_owed: Decimal,
}

#[cw_serde]
pub struct ParticipantQueryResponse {
    pub participant: Option<ParticipantResponse>,
}

#[cw_serde]
pub struct ParticipantsResponse {
    pub participants: Vec<ParticipantResponse>,
}

#[cw_serde]
pub struct ProgressResponse {
    pub tokens_sold: Decimal,
    pub total_tokens: Decimal,
    /// Zero when sold already meets or exceeds total
    pub tokens_remaining: Decimal,
    /// 0..=100 in the normal case; 0 when total is zero
    pub progress_percent: Decimal,
    pub effective_status: SaleStatus,
    pub seconds_remaining: u64,
}

#[cw_serde]
pub struct QuoteResponse {
    pub amount: Decimal,
    pub token_price: Decimal,
    /// Zero when the price or the amount is zero
    pub tokens: Decimal,
}

#[cw_serde]
pub struct WhitelistPolicyResponse {
    pub policy: WhitelistPolicy,
}
