use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::query::presale_to_response;
use crate::state::{PresaleConfig, PRESALE, WHITELIST_POLICY};
use crate::whitelist::WhitelistPolicy;

/// Creator mode: overwrite every presale field. No bounds are checked,
/// so a what-if configuration (zero price, sold > total) is stored as given.
pub fn execute_set_presale_config(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    config: PresaleConfig,
) -> Result<Response, ContractError> {
    PRESALE.save(deps.storage, &config)?;

    let response = presale_to_response(config, env.block.time);

    Ok(Response::new()
        .add_attribute("action", "presale.set_config")
        .add_attribute("editor", info.sender.to_string())
        .add_attribute("token", format!("{} ({})", response.token_name, response.token_symbol))
        .add_attribute("status", response.status.to_string())
        .add_attribute("token_price", response.token_price.to_string())
        .set_data(to_json_binary(&response)?))
}

/// Existing participants keep the whitelist flag they were registered with.
pub fn execute_set_whitelist_policy(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    policy: WhitelistPolicy,
) -> Result<Response, ContractError> {
    policy.validate()?;
    WHITELIST_POLICY.save(deps.storage, &policy)?;

    let mut response = Response::new()
        .add_attribute("action", "presale.set_whitelist_policy")
        .add_attribute("editor", info.sender.to_string())
        .add_attribute("policy", policy.name());
    if let WhitelistPolicy::Sampled { approval_bps } = policy {
        response = response.add_attribute("approval_bps", approval_bps.to_string());
    }

    Ok(response)
}
