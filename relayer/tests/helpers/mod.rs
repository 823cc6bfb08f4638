//! Shared setup for the relayer integration tests.
//!
//! Deploys the relayer contract, two cw20-base tokens and a mock token bridge
//! that speaks the `common` token bridge interface. The mock treats a "vaa" as
//! the JSON encoding of the `TransferInfoResponse` it should report.

#![allow(dead_code)]

use cosmwasm_std::{
    coins, from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo,
    Response, StdError, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::Map;

use common::{TokenBridgeExecuteMsg, TokenBridgeQueryMsg, TokenBridgeReceiveMsg, TransferInfoResponse};
use token_bridge_relayer::address_codec::{encode_bech32_address, local_address_to_identity};
use token_bridge_relayer::msg::{ExecuteMsg, InstantiateMsg, ReceiveMsg};
use token_bridge_relayer::{denormalize_amount, TransferWithRelay};

pub const CHAIN_ID: u16 = 3;
pub const REMOTE_CHAIN: u16 = 5;
pub const NATIVE_DENOM: &str = "uluna";
pub const NATIVE_DECIMALS: u8 = 6;
pub const SWAP_RATE_PRECISION: u128 = 100_000_000;
pub const RELAYER_FEE_PRECISION: u128 = 100_000_000;

/// Token balance the mock bridge holds for releases
pub const BRIDGE_LIQUIDITY: u128 = 1_000_000_000_000_000_000_000_000;
/// Token balance every user starts with
pub const USER_BALANCE: u128 = 1_000_000_000_000_000_000_000;

pub struct Suite {
    pub app: App,
    pub owner: Addr,
    pub assistant: Addr,
    pub relayer: Addr,
    pub user: Addr,
    pub relayer_contract: Addr,
    pub relayer_code_id: u64,
    pub bridge: Addr,
    /// 18-decimal token
    pub token: Addr,
    /// 6-decimal token
    pub stable: Addr,
}

// ============================================================================
// Mock Token Bridge
// ============================================================================

const COMPLETED: Map<&[u8], bool> = Map::new("completed");

#[cosmwasm_schema::cw_serde]
pub struct MockBridgeInstantiateMsg {}

fn bridge_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: MockBridgeInstantiateMsg,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn bridge_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: TokenBridgeExecuteMsg,
) -> StdResult<Response> {
    match msg {
        TokenBridgeExecuteMsg::Receive(wrapper) => {
            let TokenBridgeReceiveMsg::InitiateTransferWithPayload {
                recipient_chain,
                recipient,
                payload,
                nonce,
            } = from_json(&wrapper.msg)?;
            Ok(Response::new()
                .add_attribute("action", "initiate_transfer_with_payload")
                .add_attribute("token", info.sender)
                .add_attribute("transfer_sender", wrapper.sender)
                .add_attribute("transfer_amount", wrapper.amount.to_string())
                .add_attribute("recipient_chain", recipient_chain.to_string())
                .add_attribute("recipient", hex::encode(recipient.as_slice()))
                .add_attribute("payload", hex::encode(payload.as_slice()))
                .add_attribute("nonce", nonce.to_string()))
        }
        TokenBridgeExecuteMsg::CompleteTransferWithPayload { data, relayer } => {
            let transfer: TransferInfoResponse = from_json(&data)?;
            if info.sender.as_str() != transfer.recipient {
                return Err(StdError::generic_err("caller is not the transfer recipient"));
            }
            if COMPLETED.has(deps.storage, data.as_slice()) {
                return Err(StdError::generic_err("transfer already completed"));
            }
            COMPLETED.save(deps.storage, data.as_slice(), &true)?;

            let token_info: TokenInfoResponse = deps
                .querier
                .query_wasm_smart(&transfer.token_address, &Cw20QueryMsg::TokenInfo {})?;
            let amount = denormalize_amount(transfer.amount, token_info.decimals)?;

            Ok(Response::new()
                .add_message(WasmMsg::Execute {
                    contract_addr: transfer.token_address,
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: info.sender.to_string(),
                        amount,
                    })?,
                    funds: vec![],
                })
                .add_attribute("action", "complete_transfer_with_payload")
                .add_attribute("relayer", relayer))
        }
    }
}

fn bridge_query(_deps: Deps, _env: Env, msg: TokenBridgeQueryMsg) -> StdResult<Binary> {
    match msg {
        TokenBridgeQueryMsg::TransferInfo { vaa } => {
            let transfer: TransferInfoResponse = from_json(&vaa)?;
            to_json_binary(&transfer)
        }
    }
}

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_relayer() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        token_bridge_relayer::contract::execute,
        token_bridge_relayer::contract::instantiate,
        token_bridge_relayer::contract::query,
    )
    .with_migrate(token_bridge_relayer::contract::migrate);
    Box::new(contract)
}

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        bridge_execute,
        bridge_instantiate,
        bridge_query,
    ))
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Setup
// ============================================================================

/// The counterpart relayer registered for `REMOTE_CHAIN`
pub fn counterpart() -> [u8; 32] {
    [0xcc; 32]
}

/// A local recipient with a checksummed bech32 address
pub fn recipient() -> Addr {
    Addr::unchecked(encode_bech32_address(&[0x42; 20], "terra").unwrap())
}

pub fn recipient_identity() -> [u8; 32] {
    local_address_to_identity(recipient().as_str()).unwrap()
}

fn instantiate_token(
    app: &mut App,
    code_id: u64,
    owner: &Addr,
    symbol: &str,
    decimals: u8,
    initial_balances: Vec<Cw20Coin>,
) -> Addr {
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{} Token", symbol),
            symbol: symbol.to_string(),
            decimals,
            initial_balances,
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

/// Deploy everything. Nothing is registered yet.
pub fn setup() -> Suite {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let assistant = Addr::unchecked("terra1assistant");
    let relayer = Addr::unchecked("terra1relayer");
    let user = Addr::unchecked("terra1user");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &relayer, coins(10_000_000_000, NATIVE_DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &user, coins(10_000_000_000, NATIVE_DENOM))
            .unwrap();
    });

    let bridge_code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code_id,
            owner.clone(),
            &MockBridgeInstantiateMsg {},
            &[],
            "token-bridge",
            None,
        )
        .unwrap();

    let cw20_code_id = app.store_code(contract_cw20());
    let balances = || {
        vec![
            Cw20Coin {
                address: bridge.to_string(),
                amount: Uint128::new(BRIDGE_LIQUIDITY),
            },
            Cw20Coin {
                address: user.to_string(),
                amount: Uint128::new(USER_BALANCE),
            },
        ]
    };
    let token = instantiate_token(&mut app, cw20_code_id, &owner, "WETH", 18, balances());
    let stable = instantiate_token(&mut app, cw20_code_id, &owner, "USDC", 6, balances());

    let relayer_code_id = app.store_code(contract_relayer());
    let relayer_contract = app
        .instantiate_contract(
            relayer_code_id,
            owner.clone(),
            &InstantiateMsg {
                chain_id: CHAIN_ID,
                token_bridge: bridge.to_string(),
                native_denom: NATIVE_DENOM.to_string(),
                native_decimals: NATIVE_DECIMALS,
                wrapped_native_token: None,
                address_prefix: "terra".to_string(),
                owner_assistant: assistant.to_string(),
                swap_rate_precision: Uint128::new(SWAP_RATE_PRECISION),
                relayer_fee_precision: Uint128::new(RELAYER_FEE_PRECISION),
                unwrap_native: false,
            },
            &[],
            "token-bridge-relayer",
            Some(owner.to_string()),
        )
        .unwrap();

    Suite {
        app,
        owner,
        assistant,
        relayer,
        user,
        relayer_contract,
        relayer_code_id,
        bridge,
        token,
        stable,
    }
}

/// Deploy everything, register the counterpart on `REMOTE_CHAIN` and accept
/// both tokens.
pub fn setup_registered() -> Suite {
    let mut suite = setup();
    suite
        .execute_owner(&ExecuteMsg::RegisterContract {
            chain_id: REMOTE_CHAIN,
            contract_address: Binary::from(counterpart().to_vec()),
        })
        .unwrap();
    for token in [suite.token.clone(), suite.stable.clone()] {
        suite
            .execute_owner(&ExecuteMsg::RegisterToken {
                chain_id: CHAIN_ID,
                token: token.to_string(),
            })
            .unwrap();
    }
    suite
}

// ============================================================================
// Helpers
// ============================================================================

impl Suite {
    pub fn execute_owner(&mut self, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.owner.clone(),
            self.relayer_contract.clone(),
            msg,
            &[],
        )
    }

    /// Send `amount` of `token` from the user with a relay hook.
    pub fn send_with_relay(
        &mut self,
        token: &Addr,
        amount: u128,
        target_chain: u16,
        target_recipient: Binary,
        to_native_token_amount: u128,
        batch_id: u32,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            self.user.clone(),
            token.clone(),
            &Cw20ExecuteMsg::Send {
                contract: self.relayer_contract.to_string(),
                amount: Uint128::new(amount),
                msg: to_json_binary(&ReceiveMsg::TransferTokensWithRelay {
                    target_chain,
                    target_recipient,
                    to_native_token_amount: Uint128::new(to_native_token_amount),
                    batch_id,
                })
                .unwrap(),
            },
            &[],
        )
    }

    /// A transfer from the registered counterpart addressed to the relayer
    /// contract. Amounts are in wire precision.
    pub fn transfer_vaa(
        &self,
        token: &Addr,
        amount: u128,
        relayer_fee: u128,
        to_native_token_amount: u128,
    ) -> Binary {
        let payload = TransferWithRelay {
            target_relayer_fee: Uint128::new(relayer_fee),
            to_native_token_amount: Uint128::new(to_native_token_amount),
            target_recipient: recipient_identity(),
        };
        self.vaa(TransferInfoResponse {
            amount: Uint128::new(amount),
            token_address: token.to_string(),
            sender_chain: REMOTE_CHAIN,
            sender: Binary::from(counterpart().to_vec()),
            recipient_chain: CHAIN_ID,
            recipient: self.relayer_contract.to_string(),
            payload: payload.encode(),
        })
    }

    pub fn vaa(&self, transfer: TransferInfoResponse) -> Binary {
        to_json_binary(&transfer).unwrap()
    }

    pub fn token_balance(&self, token: &Addr, account: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn native_balance(&self, account: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_balance(account, NATIVE_DENOM)
            .unwrap()
            .amount
    }
}

/// Find an attribute value across all events of a response.
pub fn attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

/// Root cause of a failed execution.
pub fn err_msg(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}
