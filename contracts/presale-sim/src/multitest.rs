//! Whole-contract flows through cw-multi-test's `App`.

use cosmwasm_std::{from_json, Addr, Decimal, Empty};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use crate::contract::{execute, instantiate, query};
use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, ParticipantQueryResponse, ParticipantResponse, PresaleResponse,
    ProgressResponse, QueryMsg, DEFAULT_SALE_DURATION_SECS,
};
use crate::state::SaleStatus;
use crate::testing::helpers::{dec, BUYER, CREATOR, OTHER_BUYER};
use crate::whitelist::WhitelistPolicy;

fn presale_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}

fn setup(msg: InstantiateMsg) -> (App, Addr) {
    let mut app = App::default();
    let code_id = app.store_code(presale_contract());
    let contract = app
        .instantiate_contract(code_id, Addr::unchecked(CREATOR), &msg, &[], "presale-sim", None)
        .unwrap();
    (app, contract)
}

fn exec(app: &mut App, contract: &Addr, sender: &str, msg: ExecuteMsg) -> anyhow::Result<AppResponse> {
    app.execute_contract(Addr::unchecked(sender), contract.clone(), &msg, &[])
}

fn rejection(err: &anyhow::Error) -> String {
    err.root_cause().to_string()
}

fn presale(app: &App, contract: &Addr) -> PresaleResponse {
    app.wrap()
        .query_wasm_smart(contract, &QueryMsg::Presale {})
        .unwrap()
}

fn participant(app: &App, contract: &Addr, address: &str) -> Option<ParticipantResponse> {
    let res: ParticipantQueryResponse = app
        .wrap()
        .query_wasm_smart(
            contract,
            &QueryMsg::Participant {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.participant
}

fn buy_msg(amount: &str) -> ExecuteMsg {
    ExecuteMsg::Buy { amount: dec(amount) }
}

#[test]
fn connect_then_buy_flow() {
    let (mut app, contract) = setup(InstantiateMsg {
        whitelist_policy: WhitelistPolicy::AllowAll {},
        ..InstantiateMsg::default()
    });

    let res = exec(&mut app, &contract, BUYER, ExecuteMsg::Connect {}).unwrap();
    let connected: ParticipantResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(connected.address, BUYER);
    assert!(connected.is_whitelisted);

    exec(&mut app, &contract, BUYER, buy_msg("1.0")).unwrap();

    let after = participant(&app, &contract, BUYER).unwrap();
    assert_eq!(after.contribution, dec("1"));
    assert_eq!(after.tokens_owed, dec("200"));
    assert_eq!(presale(&app, &contract).tokens_sold, dec("65000200"));
}

#[test]
fn rejected_purchase_leaves_state_untouched() {
    let (mut app, contract) = setup(InstantiateMsg {
        whitelist_policy: WhitelistPolicy::AllowAll {},
        ..InstantiateMsg::default()
    });
    exec(&mut app, &contract, BUYER, ExecuteMsg::Connect {}).unwrap();
    exec(&mut app, &contract, BUYER, buy_msg("4")).unwrap();

    let before_presale = presale(&app, &contract);
    let before_participant = participant(&app, &contract, BUYER);

    let err = exec(&mut app, &contract, BUYER, buy_msg("2")).unwrap_err();
    assert_eq!(
        rejection(&err),
        ContractError::ExceedsMaximum { max: "5".to_string() }.to_string()
    );

    assert_eq!(presale(&app, &contract), before_presale);
    assert_eq!(participant(&app, &contract, BUYER), before_participant);
}

#[test]
fn unknown_participant_cannot_buy() {
    let (mut app, contract) = setup(InstantiateMsg::default());

    let err = exec(&mut app, &contract, OTHER_BUYER, buy_msg("1")).unwrap_err();
    assert_eq!(
        rejection(&err),
        ContractError::UnknownParticipant {
            address: OTHER_BUYER.to_string()
        }
        .to_string()
    );
    assert!(participant(&app, &contract, OTHER_BUYER).is_none());
}

#[test]
fn sale_closes_when_clock_passes_end_time() {
    let (mut app, contract) = setup(InstantiateMsg {
        whitelist_policy: WhitelistPolicy::AllowAll {},
        ..InstantiateMsg::default()
    });
    exec(&mut app, &contract, BUYER, ExecuteMsg::Connect {}).unwrap();

    app.update_block(|block| {
        block.time = block.time.plus_seconds(DEFAULT_SALE_DURATION_SECS);
        block.height += 1;
    });

    let view = presale(&app, &contract);
    assert_eq!(view.status, SaleStatus::Live);
    assert_eq!(view.effective_status, SaleStatus::Ended);

    let progress: ProgressResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::Progress {})
        .unwrap();
    assert_eq!(progress.seconds_remaining, 0);

    let err = exec(&mut app, &contract, BUYER, buy_msg("1")).unwrap_err();
    assert_eq!(
        rejection(&err),
        ContractError::SaleNotActive {
            status: "ended".to_string()
        }
        .to_string()
    );
}

#[test]
fn creator_edits_apply_to_next_purchase() {
    let (mut app, contract) = setup(InstantiateMsg {
        whitelist_policy: WhitelistPolicy::AllowAll {},
        ..InstantiateMsg::default()
    });
    exec(&mut app, &contract, BUYER, ExecuteMsg::Connect {}).unwrap();

    let view = presale(&app, &contract);
    let config = crate::state::PresaleConfig {
        token_name: view.token_name,
        token_symbol: view.token_symbol,
        status: view.status,
        tokens_sold: Decimal::zero(),
        total_tokens: dec("1000"),
        token_price: dec("0.5"),
        sale_end_time: view.sale_end_time,
        min_purchase: dec("1"),
        max_purchase: dec("100"),
    };
    let res = exec(
        &mut app,
        &contract,
        CREATOR,
        ExecuteMsg::SetPresaleConfig { config },
    )
    .unwrap();
    let returned: PresaleResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(returned.total_tokens, dec("1000"));

    exec(&mut app, &contract, BUYER, buy_msg("10")).unwrap();
    let after = participant(&app, &contract, BUYER).unwrap();
    assert_eq!(after.tokens_owed, dec("20"));
    assert_eq!(presale(&app, &contract).tokens_sold, dec("20"));
}
