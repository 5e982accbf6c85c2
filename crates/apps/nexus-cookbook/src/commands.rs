use crate::app::{
    AssetsAction, BlockSelector, FinanceAction, LedgerAction, ObjectsAction, Operation, RawArgs,
    Selector, SupplyAction, SystemAction, TokensAction, UsersAction,
};
use nexus_sdk::{error_code, ApiResult, ErrorCategory, NexusClient, SdkError, Transport};
use serde::Serialize;
use serde_json::Value as JsonValue;

impl Operation {
    /// True when the call signs with `pin` + `session` or reads the logged in
    /// account's genesis id, so the cookbook has to log in first.
    pub fn needs_session(&self) -> bool {
        match self {
            Operation::System(_) | Operation::Ledger(_) | Operation::Raw(_) => false,
            Operation::Users(command) => !matches!(
                command.action,
                UsersAction::Transactions { by_username: true, .. }
                    | UsersAction::Notifications { by_username: true, .. }
            ),
            Operation::Supply(command) => matches!(
                command.action,
                SupplyAction::Create { .. }
                    | SupplyAction::Update { .. }
                    | SupplyAction::Transfer { .. }
                    | SupplyAction::Claim { .. }
            ),
            Operation::Assets(command) => matches!(
                command.action,
                AssetsAction::Create { .. }
                    | AssetsAction::Update { .. }
                    | AssetsAction::Transfer { .. }
                    | AssetsAction::Claim { .. }
                    | AssetsAction::Tokenize { .. }
            ),
            Operation::Tokens(command) => {
                !matches!(command.action, TokensAction::GetToken(_) | TokensAction::GetAccount(_))
            }
            Operation::Finance(command) => !matches!(command.action, FinanceAction::GetAccount(_)),
            Operation::Objects(command) => {
                matches!(command.action, ObjectsAction::CreateSchema { .. })
            }
        }
    }
}

pub fn execute<T: Transport>(
    client: &NexusClient<T>,
    operation: &Operation,
) -> ApiResult<JsonValue> {
    match operation {
        Operation::System(command) => match command.action {
            SystemAction::Info => client.system_get_info(),
            SystemAction::Peers => client.system_list_peers(),
            SystemAction::LispEids => client.system_list_lisp_eids(),
        },
        Operation::Users(command) => users(client, &command.action),
        Operation::Supply(command) => supply(client, &command.action),
        Operation::Assets(command) => assets(client, &command.action),
        Operation::Tokens(command) => tokens(client, &command.action),
        Operation::Finance(command) => finance(client, &command.action),
        Operation::Ledger(command) => ledger(client, &command.action),
        Operation::Objects(command) => match &command.action {
            ObjectsAction::CreateSchema { name, json } => {
                to_json(client.objects_create_schema(name, json))
            }
            ObjectsAction::GetSchema(Selector { name: Some(name), .. }) => {
                client.objects_get_schema_by_name(name)
            }
            ObjectsAction::GetSchema(Selector { address, .. }) => {
                client.objects_get_schema_by_address(address.as_deref().unwrap_or_default())
            }
        },
        Operation::Raw(args) => raw(client, args),
    }
}

fn users<T: Transport>(client: &NexusClient<T>, action: &UsersAction) -> ApiResult<JsonValue> {
    match action {
        UsersAction::Transactions { paging, verbose, by_username } => {
            let verbose = verbose.as_deref();
            if *by_username {
                client.users_list_transactions_by_username(paging.page, paging.limit, verbose)
            } else {
                client.users_list_transactions_by_genesis(paging.page, paging.limit, verbose)
            }
        }
        UsersAction::Notifications { paging, verbose, by_username } => {
            let verbose = verbose.as_deref();
            if *by_username {
                client.users_list_notifications_by_username(paging.page, paging.limit, verbose)
            } else {
                client.users_list_notifications_by_genesis(paging.page, paging.limit, verbose)
            }
        }
        UsersAction::Assets { paging } => {
            client.users_list_assets_by_genesis(paging.page, paging.limit)
        }
        UsersAction::Tokens => client.users_list_tokens_by_genesis(),
        UsersAction::Accounts => client.users_list_accounts_by_genesis(),
        UsersAction::Lock => client.lock(),
        UsersAction::Unlock => client.unlock(),
    }
}

fn supply<T: Transport>(client: &NexusClient<T>, action: &SupplyAction) -> ApiResult<JsonValue> {
    match action {
        SupplyAction::Create { name, data } => to_json(client.supply_create_item(name, data)),
        SupplyAction::Get(selector) => match by_name(selector) {
            Ok(name) => to_json(client.supply_get_item_by_name(name)),
            Err(address) => to_json(client.supply_get_item_by_address(address)),
        },
        SupplyAction::Update { address, data } => {
            to_json(client.supply_update_item_by_address(address, data))
        }
        SupplyAction::Transfer { item, to } => match by_name(item) {
            Ok(name) => to_json(client.supply_transfer_item_by_name(name, to)),
            Err(address) => to_json(client.supply_transfer_item_by_address(address, to)),
        },
        SupplyAction::Claim { txid } => to_json(client.supply_claim_item(txid)),
        SupplyAction::History(selector) => match by_name(selector) {
            Ok(name) => to_json(client.supply_list_item_history_by_name(name)),
            Err(address) => to_json(client.supply_list_item_history_by_address(address)),
        },
    }
}

fn assets<T: Transport>(client: &NexusClient<T>, action: &AssetsAction) -> ApiResult<JsonValue> {
    match action {
        AssetsAction::Create { name, data } => to_json(client.assets_create_asset(name, data)),
        AssetsAction::Get(selector) => match by_name(selector) {
            Ok(name) => to_json(client.assets_get_asset_by_name(name)),
            Err(address) => to_json(client.assets_get_asset_by_address(address)),
        },
        AssetsAction::Update { address, data } => {
            to_json(client.assets_update_asset_by_address(address, data))
        }
        AssetsAction::Transfer { asset, to } => match by_name(asset) {
            Ok(name) => to_json(client.assets_transfer_asset_by_name(name, to)),
            Err(address) => to_json(client.assets_transfer_asset_by_address(address, to)),
        },
        AssetsAction::Claim { txid } => to_json(client.assets_claim_asset(txid)),
        AssetsAction::Tokenize { asset_name, token_name } => {
            to_json(client.assets_tokenize_asset_by_name(asset_name, token_name))
        }
        AssetsAction::History(selector) => match by_name(selector) {
            Ok(name) => to_json(client.assets_list_asset_history_by_name(name)),
            Err(address) => to_json(client.assets_list_asset_history_by_address(address)),
        },
    }
}

fn tokens<T: Transport>(client: &NexusClient<T>, action: &TokensAction) -> ApiResult<JsonValue> {
    match action {
        TokensAction::CreateToken { name, supply, digits } => {
            to_json(client.tokens_create_token(name, *supply, *digits))
        }
        TokensAction::CreateAccount { name, token_name } => {
            to_json(client.tokens_create_account(name, token_name))
        }
        TokensAction::GetToken(selector) => match by_name(selector) {
            Ok(name) => to_json(client.tokens_get_token_by_name(name)),
            Err(address) => to_json(client.tokens_get_token_by_address(address)),
        },
        TokensAction::GetAccount(selector) => match by_name(selector) {
            Ok(name) => to_json(client.tokens_get_account_by_name(name)),
            Err(address) => to_json(client.tokens_get_account_by_address(address)),
        },
        TokensAction::DebitToken { from, to, amount } => match by_name(from) {
            Ok(name) => to_json(client.tokens_debit_token_by_name(name, to, *amount)),
            Err(address) => to_json(client.tokens_debit_token_by_address(address, to, *amount)),
        },
        TokensAction::CreditToken { name, amount, txid } => {
            to_json(client.tokens_credit_token_by_name(name, *amount, txid))
        }
        TokensAction::DebitAccount { from, to, amount } => match by_name(from) {
            Ok(name) => to_json(client.tokens_debit_account_by_name(name, to, *amount)),
            Err(address) => to_json(client.tokens_debit_account_by_address(address, to, *amount)),
        },
        TokensAction::CreditAccount { account, amount, txid, proof } => {
            let proof = proof.as_deref();
            match by_name(account) {
                Ok(name) => {
                    to_json(client.tokens_credit_account_by_name(name, *amount, txid, proof))
                }
                Err(address) => {
                    to_json(client.tokens_credit_account_by_address(address, *amount, txid, proof))
                }
            }
        }
    }
}

fn finance<T: Transport>(client: &NexusClient<T>, action: &FinanceAction) -> ApiResult<JsonValue> {
    match action {
        FinanceAction::CreateAccount { name } => to_json(client.finance_create_account(name)),
        FinanceAction::GetAccount(selector) => match by_name(selector) {
            Ok(name) => to_json(client.finance_get_account_by_name(name)),
            Err(address) => to_json(client.finance_get_account_by_address(address)),
        },
        FinanceAction::Debit { from, to, amount } => match by_name(from) {
            Ok(name) => to_json(client.finance_debit_account_by_name(name, to, *amount)),
            Err(address) => to_json(client.finance_debit_account_by_address(address, to, *amount)),
        },
        FinanceAction::Credit { account, amount, txid, proof } => {
            let proof = proof.as_deref();
            match by_name(account) {
                Ok(name) => {
                    to_json(client.finance_credit_account_by_name(name, *amount, txid, proof))
                }
                Err(address) => {
                    to_json(client.finance_credit_account_by_address(address, *amount, txid, proof))
                }
            }
        }
        FinanceAction::ListAccounts => to_json(client.finance_list_accounts()),
    }
}

fn ledger<T: Transport>(client: &NexusClient<T>, action: &LedgerAction) -> ApiResult<JsonValue> {
    match action {
        LedgerAction::Blockhash { height } => client.ledger_get_blockhash(*height),
        LedgerAction::Block { at, verbose } => match at {
            BlockSelector { height: Some(height), .. } => {
                client.ledger_get_block_by_height(*height, verbose.as_deref())
            }
            BlockSelector { hash, .. } => client
                .ledger_get_block_by_hash(hash.as_deref().unwrap_or_default(), verbose.as_deref()),
        },
        LedgerAction::Transaction { hash, verbose } => {
            client.ledger_get_transaction(hash, verbose.as_deref())
        }
        LedgerAction::MiningInfo => client.ledger_get_mininginfo(),
        LedgerAction::Submit { data } => client.ledger_submit_transaction(data),
        LedgerAction::Blocks { from, limit, verbose } => match from {
            BlockSelector { height: Some(height), .. } => {
                client.ledger_list_blocks_by_height(*height, *limit, verbose.as_deref())
            }
            BlockSelector { hash, .. } => client.ledger_list_blocks_by_hash(
                hash.as_deref().unwrap_or_default(),
                *limit,
                verbose.as_deref(),
            ),
        },
    }
}

fn raw<T: Transport>(client: &NexusClient<T>, args: &RawArgs) -> ApiResult<JsonValue> {
    let mut params = Vec::with_capacity(args.params.len());
    for pair in &args.params {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(SdkError::new(
                error_code::INTERNAL,
                ErrorCategory::Local,
                format!("raw parameter '{pair}' is not key=value"),
            ));
        };
        params.push((key, value));
    }
    client.call_raw(&args.family, &args.action, &params)
}

/// `Ok(name)` when the selector names the record, `Err(address)` otherwise.
/// Clap guarantees exactly one of the two is set.
fn by_name(selector: &Selector) -> Result<&str, &str> {
    match (&selector.name, &selector.address) {
        (Some(name), _) => Ok(name.as_str()),
        (None, address) => Err(address.as_deref().unwrap_or_default()),
    }
}

fn to_json<R: Serialize>(result: ApiResult<R>) -> ApiResult<JsonValue> {
    let value = result?;
    serde_json::to_value(value).map_err(|err| {
        SdkError::new(
            error_code::INTERNAL,
            ErrorCategory::Local,
            format!("failed to render result: {err}"),
        )
    })
}
