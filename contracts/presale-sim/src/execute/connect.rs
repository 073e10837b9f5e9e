use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::query::participant_to_response;
use crate::state::{get_or_create_participant, WHITELIST_POLICY};

/// Simulated wallet connection: the sender becomes a participant on first call.
pub fn execute_connect(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let policy = WHITELIST_POLICY.load(deps.storage)?;
    let (participant, created) = get_or_create_participant(deps.storage, &info.sender, &policy)?;
    let whitelisted = participant.is_whitelisted;

    Ok(Response::new()
        .set_data(to_json_binary(&participant_to_response(participant))?)
        .add_attribute("action", "presale.connect")
        .add_attribute("participant", info.sender.to_string())
        .add_attribute("created", created.to_string())
        .add_attribute("whitelisted", whitelisted.to_string()))
}
