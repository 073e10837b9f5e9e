use cosmwasm_std::{Decimal, Deps, Env, Order, StdResult, Timestamp};
use cw_storage_plus::Bound;

use crate::msg::{
    ParticipantQueryResponse, ParticipantResponse, ParticipantsResponse, PresaleResponse,
    ProgressResponse, QuoteResponse, WhitelistPolicyResponse,
};
use crate::state::{Participant, PresaleConfig, SaleStatus, PARTICIPANTS, PRESALE, WHITELIST_POLICY};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub fn query_presale(deps: Deps, env: Env) -> StdResult<PresaleResponse> {
    let presale = PRESALE.load(deps.storage)?;
    Ok(presale_to_response(presale, env.block.time))
}

pub fn query_participant(deps: Deps, address: String) -> StdResult<ParticipantQueryResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let participant = PARTICIPANTS
        .may_load(deps.storage, &addr)?
        .map(participant_to_response);
    Ok(ParticipantQueryResponse { participant })
}

pub fn query_participants(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ParticipantsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;

    let participants = PARTICIPANTS
        .range(
            deps.storage,
            start.as_ref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| item.map(|(_, participant)| participant_to_response(participant)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ParticipantsResponse { participants })
}

pub fn query_progress(deps: Deps, env: Env) -> StdResult<ProgressResponse> {
    let presale = PRESALE.load(deps.storage)?;
    let now = env.block.time;
    let effective_status = presale.effective_status(now);

    let progress_percent = if presale.total_tokens.is_zero() {
        Decimal::zero()
    } else {
        // What-if configs can push the ratio past Decimal's range; report the ceiling.
        presale
            .tokens_sold
            .checked_div(presale.total_tokens)
            .unwrap_or(Decimal::MAX)
            .saturating_mul(Decimal::percent(10_000))
    };

    let seconds_remaining = if effective_status == SaleStatus::Ended {
        0
    } else {
        presale.sale_end_time.seconds().saturating_sub(now.seconds())
    };

    Ok(ProgressResponse {
        tokens_remaining: presale.total_tokens.saturating_sub(presale.tokens_sold),
        tokens_sold: presale.tokens_sold,
        total_tokens: presale.total_tokens,
        progress_percent,
        effective_status,
        seconds_remaining,
    })
}

pub fn query_quote(deps: Deps, amount: Decimal) -> StdResult<QuoteResponse> {
    let presale = PRESALE.load(deps.storage)?;

    let tokens = if presale.token_price.is_zero() || amount.is_zero() {
        Decimal::zero()
    } else {
        amount
            .checked_div(presale.token_price)
            .unwrap_or(Decimal::MAX)
    };

    Ok(QuoteResponse {
        amount,
        token_price: presale.token_price,
        tokens,
    })
}

pub fn query_whitelist_policy(deps: Deps) -> StdResult<WhitelistPolicyResponse> {
    let policy = WHITELIST_POLICY.load(deps.storage)?;
    Ok(WhitelistPolicyResponse { policy })
}

pub fn presale_to_response(presale: PresaleConfig, now: Timestamp) -> PresaleResponse {
    PresaleResponse {
        effective_status: presale.effective_status(now),
        token_name: presale.token_name,
        token_symbol: presale.token_symbol,
        status: presale.status,
        tokens_sold: presale.tokens_sold,
        total_tokens: presale.total_tokens,
        token_price: presale.token_price,
        sale_end_time: presale.sale_end_time,
        min_purchase: presale.min_purchase,
        max_purchase: presale.max_purchase,
    }
}

pub fn participant_to_response(participant: Participant) -> ParticipantResponse {
    ParticipantResponse {
        address: participant.address,
        is_whitelisted: participant.is_whitelisted,
        contribution: participant.contribution,
        tokens_owed: participant.tokens_owed,
    }
}
