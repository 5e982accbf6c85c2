use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "nexus-cookbook", about = "Exercise the Nexus ledger API", version)]
pub struct Cli {
    /// TOML file with url, username, password, pin and timeout_secs
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub pin: Option<String>,
    /// Register the account before logging in
    #[arg(long)]
    pub create_user: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read commands from stdin, keeping logged in clients by session id
    Shell,
    #[command(flatten)]
    Api(Operation),
}

/// One API call, as typed on the command line or on a shell line.
#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    System(SystemCommand),
    Users(UsersCommand),
    Supply(SupplyCommand),
    Assets(AssetsCommand),
    Tokens(TokensCommand),
    Finance(FinanceCommand),
    Ledger(LedgerCommand),
    Objects(ObjectsCommand),
    /// Call any endpoint: `raw <family> <action> [key=value..]`
    Raw(RawArgs),
}

/// Parser for the operation part of a shell line.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct ShellOperation {
    #[command(subcommand)]
    pub operation: Operation,
}

#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct Selector {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct BlockSelector {
    #[arg(long)]
    pub height: Option<u64>,
    #[arg(long)]
    pub hash: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct Paging {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

#[derive(Debug, Clone, Args)]
pub struct SystemCommand {
    #[command(subcommand)]
    pub action: SystemAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SystemAction {
    Info,
    Peers,
    LispEids,
}

#[derive(Debug, Clone, Args)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum UsersAction {
    Transactions {
        #[command(flatten)]
        paging: Paging,
        #[arg(long)]
        verbose: Option<String>,
        /// Look the account up by username instead of genesis id
        #[arg(long)]
        by_username: bool,
    },
    Notifications {
        #[command(flatten)]
        paging: Paging,
        #[arg(long)]
        verbose: Option<String>,
        #[arg(long)]
        by_username: bool,
    },
    Assets {
        #[command(flatten)]
        paging: Paging,
    },
    Tokens,
    Accounts,
    Lock,
    Unlock,
}

#[derive(Debug, Clone, Args)]
pub struct SupplyCommand {
    #[command(subcommand)]
    pub action: SupplyAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum SupplyAction {
    Create {
        name: String,
        data: String,
    },
    Get(Selector),
    Update {
        address: String,
        data: String,
    },
    /// `--to` is a username with `--name`, a genesis id with `--address`
    Transfer {
        #[command(flatten)]
        item: Selector,
        #[arg(long)]
        to: String,
    },
    Claim {
        txid: String,
    },
    History(Selector),
}

#[derive(Debug, Clone, Args)]
pub struct AssetsCommand {
    #[command(subcommand)]
    pub action: AssetsAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum AssetsAction {
    Create {
        name: String,
        data: String,
    },
    Get(Selector),
    Update {
        address: String,
        data: String,
    },
    Transfer {
        #[command(flatten)]
        asset: Selector,
        #[arg(long)]
        to: String,
    },
    Claim {
        txid: String,
    },
    Tokenize {
        asset_name: String,
        token_name: String,
    },
    History(Selector),
}

#[derive(Debug, Clone, Args)]
pub struct TokensCommand {
    #[command(subcommand)]
    pub action: TokensAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TokensAction {
    CreateToken {
        name: String,
        supply: u64,
        #[arg(long)]
        digits: Option<u8>,
    },
    CreateAccount {
        name: String,
        token_name: String,
    },
    GetToken(Selector),
    GetAccount(Selector),
    /// Moves units out of a token into the account named or addressed by `--to`
    DebitToken {
        #[command(flatten)]
        from: Selector,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: f64,
    },
    CreditToken {
        name: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        txid: String,
    },
    DebitAccount {
        #[command(flatten)]
        from: Selector,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: f64,
    },
    CreditAccount {
        #[command(flatten)]
        account: Selector,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        txid: String,
        #[arg(long)]
        proof: Option<String>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct FinanceCommand {
    #[command(subcommand)]
    pub action: FinanceAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FinanceAction {
    CreateAccount {
        name: String,
    },
    GetAccount(Selector),
    Debit {
        #[command(flatten)]
        from: Selector,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: f64,
    },
    Credit {
        #[command(flatten)]
        account: Selector,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        txid: String,
        #[arg(long)]
        proof: Option<String>,
    },
    ListAccounts,
}

#[derive(Debug, Clone, Args)]
pub struct LedgerCommand {
    #[command(subcommand)]
    pub action: LedgerAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum LedgerAction {
    Blockhash {
        height: u64,
    },
    Block {
        #[command(flatten)]
        at: BlockSelector,
        #[arg(long)]
        verbose: Option<String>,
    },
    Transaction {
        hash: String,
        #[arg(long)]
        verbose: Option<String>,
    },
    MiningInfo,
    Submit {
        data: String,
    },
    Blocks {
        #[command(flatten)]
        from: BlockSelector,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long)]
        verbose: Option<String>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ObjectsCommand {
    #[command(subcommand)]
    pub action: ObjectsAction,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ObjectsAction {
    CreateSchema { name: String, json: String },
    GetSchema(Selector),
}

#[derive(Debug, Clone, Args)]
pub struct RawArgs {
    pub family: String,
    pub action: String,
    /// `key=value` pairs, sent in the given order
    pub params: Vec<String>,
}
