mod app;
mod commands;
mod config;
mod output;
mod shell;

use anyhow::{bail, Result};
use app::{Cli, Command, Operation};
use clap::Parser;
use config::{CookbookConfig, Overrides, Settings};
use nexus_sdk::{Credentials, HttpClient, NexusClient, Transport};
use output::Outcome;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("nexus-cookbook: {err:#}");
            ExitCode::from(Outcome::Rejected.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let file = match &cli.config {
        Some(path) => CookbookConfig::from_path(path)?,
        None => CookbookConfig::default(),
    };
    let overrides = Overrides {
        url: cli.url,
        username: cli.username,
        password: cli.password,
        pin: cli.pin,
    };
    let settings = Settings::resolve(file, overrides)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Shell => {
            let mut shell = shell::Shell::new(settings.client, HttpClient::with_config);
            shell.run(io::stdin().lock(), &mut out)
        }
        Command::Api(operation) => {
            let credentials = match settings.credentials {
                Some(credentials) => credentials,
                None if operation.needs_session() || cli.create_user => {
                    bail!("this operation needs --username, --password and --pin")
                }
                None => Credentials::new("", "", ""),
            };
            let client = HttpClient::with_config(credentials, settings.client);
            one_shot(client, cli.create_user, &operation, &mut out)
        }
    }
}

/// Runs a single operation, logging in first and out afterwards when the
/// operation needs a session.
fn one_shot<T: Transport, W: Write>(
    mut client: NexusClient<T>,
    create_user: bool,
    operation: &Operation,
    out: &mut W,
) -> Result<Outcome> {
    if create_user {
        match client.create_account() {
            Ok(created) => {
                log::info!("cookbook: registered {} {:?}", client.username(), created.genesis)
            }
            Err(err) if err.is_fatal() => return output::emit(out, Err(err)),
            Err(err) => log::warn!("cookbook: create user: {err}"),
        }
    }
    if operation.needs_session() {
        if let Err(err) = client.login() {
            return output::emit(out, Err(err));
        }
    }

    let result = commands::execute(&client, operation);

    if client.is_logged_in() {
        if let Err(err) = client.logout() {
            log::warn!("cookbook: logout failed: {err}");
        }
    }
    output::emit(out, result)
}
