use cosmwasm_std::{
    Addr, CheckedFromRatioError, Decimal, DepsMut, Env, MessageInfo, Response, Storage, Timestamp,
};

use crate::error::ContractError;
use crate::state::{PresaleConfig, SaleStatus, PARTICIPANTS, PRESALE};

/// Counters after a successful purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOutcome {
    pub tokens_bought: Decimal,
    pub contribution: Decimal,
    pub tokens_owed: Decimal,
    pub tokens_sold: Decimal,
}

/// Validates a purchase and, if admissible, credits it.
///
/// Checks run in a fixed order and stop at the first failure:
/// known participant, whitelisted, sale live, per-purchase minimum,
/// cumulative maximum, remaining supply. Nothing is written unless all pass.
pub fn attempt_purchase(
    storage: &mut dyn Storage,
    buyer: &Addr,
    amount: Decimal,
    now: Timestamp,
) -> Result<PurchaseOutcome, ContractError> {
    let mut participant = PARTICIPANTS
        .may_load(storage, buyer)?
        .ok_or_else(|| ContractError::UnknownParticipant {
            address: buyer.to_string(),
        })?;

    if !participant.is_whitelisted {
        return Err(ContractError::NotWhitelisted);
    }

    let mut presale = PRESALE.load(storage)?;

    let status = presale.effective_status(now);
    if status != SaleStatus::Live {
        return Err(ContractError::SaleNotActive {
            status: status.to_string(),
        });
    }

    if amount < presale.min_purchase {
        return Err(ContractError::BelowMinimum {
            min: presale.min_purchase.to_string(),
        });
    }

    // A sum past Decimal's range is past any storable maximum too.
    let contribution = match participant.contribution.checked_add(amount) {
        Ok(sum) if sum <= presale.max_purchase => sum,
        _ => {
            return Err(ContractError::ExceedsMaximum {
                max: presale.max_purchase.to_string(),
            })
        }
    };

    // A zero price is a configuration problem; it surfaces as a division error here.
    // Token counts past Decimal's range exceed any storable supply.
    let tokens_bought = match amount.checked_div(presale.token_price) {
        Ok(tokens) => tokens,
        Err(CheckedFromRatioError::Overflow) => {
            return Err(insufficient_supply(&presale, format!("> {}", Decimal::MAX)))
        }
        Err(err) => return Err(err.into()),
    };
    let tokens_sold = match presale.tokens_sold.checked_add(tokens_bought) {
        Ok(sold) if sold <= presale.total_tokens => sold,
        _ => return Err(insufficient_supply(&presale, tokens_bought.to_string())),
    };
    let tokens_owed = participant.tokens_owed.checked_add(tokens_bought)?;

    participant.contribution = contribution;
    participant.tokens_owed = tokens_owed;
    presale.tokens_sold = tokens_sold;
    PARTICIPANTS.save(storage, buyer, &participant)?;
    PRESALE.save(storage, &presale)?;

    Ok(PurchaseOutcome {
        tokens_bought,
        contribution,
        tokens_owed,
        tokens_sold,
    })
}

fn insufficient_supply(presale: &PresaleConfig, requested: String) -> ContractError {
    ContractError::InsufficientSupply {
        available: presale
            .total_tokens
            .saturating_sub(presale.tokens_sold)
            .to_string(),
        requested,
    }
}

pub fn execute_buy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Decimal,
) -> Result<Response, ContractError> {
    let outcome = attempt_purchase(deps.storage, &info.sender, amount, env.block.time)?;

    Ok(Response::new()
        .add_attribute("action", "presale.purchase")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("tokens_bought", outcome.tokens_bought.to_string())
        .add_attribute("contribution", outcome.contribution.to_string())
        .add_attribute("tokens_sold", outcome.tokens_sold.to_string()))
}
