use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, DEFAULT_SALE_DURATION_SECS};
use crate::state::{PresaleConfig, PRESALE, WHITELIST_POLICY};

const CONTRACT_NAME: &str = "crates.io:presale-sim";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    msg.whitelist_policy.validate()?;

    let sale_end_time = msg
        .sale_end_time
        .unwrap_or_else(|| env.block.time.plus_seconds(DEFAULT_SALE_DURATION_SECS));

    let presale = PresaleConfig {
        token_name: msg.token_name,
        token_symbol: msg.token_symbol,
        status: msg.status,
        tokens_sold: msg.tokens_sold,
        total_tokens: msg.total_tokens,
        token_price: msg.token_price,
        sale_end_time,
        min_purchase: msg.min_purchase,
        max_purchase: msg.max_purchase,
    };

    PRESALE.save(deps.storage, &presale)?;
    WHITELIST_POLICY.save(deps.storage, &msg.whitelist_policy)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("token", format!("{} ({})", presale.token_name, presale.token_symbol))
        .add_attribute("token_price", presale.token_price.to_string())
        .add_attribute("sale_end_time", presale.sale_end_time.seconds().to_string())
        .add_attribute("whitelist_policy", msg.whitelist_policy.name()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Connect {} => crate::execute::connect::execute_connect(deps, env, info),
        ExecuteMsg::Buy { amount } => crate::execute::buy::execute_buy(deps, env, info, amount),
        ExecuteMsg::SetPresaleConfig { config } => {
            crate::execute::update_config::execute_set_presale_config(deps, env, info, config)
        }
        ExecuteMsg::SetWhitelistPolicy { policy } => {
            crate::execute::update_config::execute_set_whitelist_policy(deps, env, info, policy)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Presale {} => to_json_binary(&crate::query::query_presale(deps, env)?),
        QueryMsg::Participant { address } => {
            to_json_binary(&crate::query::query_participant(deps, address)?)
        }
        QueryMsg::Participants { start_after, limit } => {
            to_json_binary(&crate::query::query_participants(deps, start_after, limit)?)
        }
        QueryMsg::Progress {} => to_json_binary(&crate::query::query_progress(deps, env)?),
        QueryMsg::Quote { amount } => to_json_binary(&crate::query::query_quote(deps, amount)?),
        QueryMsg::WhitelistPolicy {} => {
            to_json_binary(&crate::query::query_whitelist_policy(deps)?)
        }
    }
}
