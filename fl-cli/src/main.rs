//! fl - FarmLink marketplace CLI
//!
//! A command-line client for the FarmLink marketplace API. Sessions persist
//! across invocations; stored credentials are revalidated against the
//! server before any command that reads them.
//!
//! # Examples
//!
//! ```bash
//! # Log in as a farmer and persist the session
//! fl login --email asha@example.com --password secret --role farmer
//!
//! # Show the account behind the stored session
//! fl whoami
//!
//! # Browse listings (works logged out too)
//! fl product list --pretty
//!
//! # Drop the session
//! fl logout
//! ```

mod cli;
mod commands;
mod logger;
mod market_commands;
mod output;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::market_commands::{OrderCommands, ProductCommands};

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use fl_api::{ApiClient, ApiResult, BearerToken};
use fl_auth::{CredentialStore, SessionManager};
use fl_config::{Config, LogLevel};
use fl_core::{Credentials, Registration, UserRole};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let level = if cli.verbose {
        LogLevel(log::LevelFilter::Debug)
    } else {
        config.logging.level
    };
    if let Err(e) = logger::initialize(
        level,
        config.logging.file.clone().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error initializing logger: {e}");
        return ExitCode::FAILURE;
    }

    // Explicit flag wins over the configured base URL
    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    let store = match CredentialStore::default_location() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let api = ApiClient::new(&server_url, config.api.timeout_secs, BearerToken::new());
    let session = SessionManager::new(store, api);

    // Commands that read the existing session bootstrap first; login,
    // register, and logout replace it outright.
    let result = match cli.command {
        Commands::Login {
            email,
            password,
            role,
        } => login(&session, email, password, role).await,

        Commands::Register {
            name,
            email,
            phone,
            password,
            role,
            city,
            state,
        } => register(&session, name, email, phone, password, role, city, state).await,

        Commands::Logout => logout(&session).await,

        Commands::Whoami => {
            session.bootstrap().await;
            whoami(&session).await
        }

        Commands::Session => {
            session.bootstrap().await;
            Ok(output::describe_session(&session.snapshot().await))
        }

        Commands::Product { action } => match action {
            ProductCommands::List => {
                session.bootstrap().await;
                json_line(session.api().list_products().await, cli.pretty)
            }
        },

        Commands::Order { action } => match action {
            OrderCommands::List => {
                session.bootstrap().await;
                json_line(session.api().my_orders().await, cli.pretty)
            }
        },
    };

    match result {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Run the login flow.
///
/// The optional expected role is a client-side guard only: the session is
/// not committed when the account's stored role differs. The server does
/// not enforce this at the login boundary.
async fn login(
    session: &SessionManager,
    email: String,
    password: String,
    role: Option<String>,
) -> Result<String, String> {
    let expected = match role {
        Some(role) => Some(UserRole::from_str(&role).map_err(|e| e.to_string())?),
        None => None,
    };

    let auth = session
        .api()
        .login(&Credentials { email, password })
        .await
        .map_err(|e| e.to_string())?;

    if let Some(expected) = expected
        && auth.user.user_type != expected
    {
        return Err(format!(
            "this account is registered as {}, not {}",
            auth.user.user_type, expected
        ));
    }

    let user = auth.user.clone();
    session.login(auth).await.map_err(|e| e.to_string())?;
    Ok(format!("Logged in as {}", output::describe_user(&user)))
}

#[allow(clippy::too_many_arguments)]
async fn register(
    session: &SessionManager,
    name: String,
    email: String,
    phone: String,
    password: String,
    role: String,
    city: Option<String>,
    state: Option<String>,
) -> Result<String, String> {
    let user_type = UserRole::from_str(&role).map_err(|e| e.to_string())?;

    let registration = Registration {
        name,
        email,
        phone,
        password,
        user_type,
        city,
        state,
    };

    let user = session
        .sign_up(&registration)
        .await
        .map_err(|e| e.to_string())?;
    Ok(format!("Registered {}", output::describe_user(&user)))
}

async fn logout(session: &SessionManager) -> Result<String, String> {
    session.logout().await.map_err(|e| e.to_string())?;
    Ok(String::from("Logged out"))
}

async fn whoami(session: &SessionManager) -> Result<String, String> {
    match session.current_user().await {
        Some(user) => Ok(output::describe_user(&user)),
        None => Err(String::from("not logged in")),
    }
}

/// Serialize an API response for printing.
fn json_line(result: ApiResult<Value>, pretty: bool) -> Result<String, String> {
    let value = result.map_err(|e| e.to_string())?;

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    output.map_err(|e| format!("Error serializing response: {e}"))
}
