use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, StdResult, Storage, Timestamp};
use cw_storage_plus::{Item, Map};

use crate::whitelist::{WhitelistDecider, WhitelistPolicy};

#[cw_serde]
#[derive(Copy)]
pub enum SaleStatus {
    Upcoming,
    Live,
    Ended,
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SaleStatus::Upcoming => "upcoming",
            SaleStatus::Live => "live",
            SaleStatus::Ended => "ended",
        };
        f.write_str(s)
    }
}

#[cw_serde]
pub struct PresaleConfig {
    pub token_name: String,
    pub token_symbol: String,
    /// Stored status. Use [`PresaleConfig::effective_status`] for purchase decisions.
    pub status: SaleStatus,
    pub tokens_sold: Decimal,
    pub total_tokens: Decimal,
    /// Price of one token in the reference currency.
    pub token_price: Decimal,
    pub sale_end_time: Timestamp,
    /// Lower bound for a single purchase.
    pub min_purchase: Decimal,
    /// Upper bound for a participant's cumulative contribution.
    pub max_purchase: Decimal,
}

impl PresaleConfig {
    pub fn effective_status(&self, now: Timestamp) -> SaleStatus {
        effective_status(self.status, self.sale_end_time, now)
    }
}

/// Once the end time is reached the sale is over, whatever the stored status says.
pub fn effective_status(status: SaleStatus, sale_end_time: Timestamp, now: Timestamp) -> SaleStatus {
    if now >= sale_end_time {
        SaleStatus::Ended
    } else {
        status
    }
}

#[cw_serde]
pub struct Participant {
    pub address: Addr,
    pub is_whitelisted: bool,
    /// Total paid in across all purchases.
    pub contribution: Decimal,
    /// Total tokens credited, each purchase at the price of its moment.
    pub tokens_owed: Decimal,
}

impl Participant {
    pub fn new(address: Addr, is_whitelisted: bool) -> Self {
        Self {
            address,
            is_whitelisted,
            contribution: Decimal::zero(),
            tokens_owed: Decimal::zero(),
        }
    }
}

// ---- Storage keys ----

pub const PRESALE: Item<PresaleConfig> = Item::new("presale");
pub const PARTICIPANTS: Map<&Addr, Participant> = Map::new("participants");
pub const WHITELIST_POLICY: Item<WhitelistPolicy> = Item::new("whitelist_policy");

/// Returns the participant for `address`, registering it on first sight.
/// The whitelist flag is decided once, here, and never revisited.
pub fn get_or_create_participant<D: WhitelistDecider + ?Sized>(
    storage: &mut dyn Storage,
    address: &Addr,
    decider: &D,
) -> StdResult<(Participant, bool)> {
    if let Some(existing) = PARTICIPANTS.may_load(storage, address)? {
        return Ok((existing, false));
    }

    let participant = Participant::new(address.clone(), decider.decide(address.as_str()));
    PARTICIPANTS.save(storage, address, &participant)?;
    Ok((participant, true))
}
