//! Login - Entry Point
//!
//! Prompts for an email and password and checks them against the credential store.

use log::info;
use std::process::ExitCode;
use tokio::io::{BufReader, stdin, stdout};

use login_auth::auth::Authenticator;
use login_auth::error::AppError;
use login_auth::error::handlers::{
    EXIT_LOGIN_REJECTED, EXIT_LOGIN_SUCCESS, error_to_exit_code, handle_error,
};
use login_auth::prompt::{FAULT_MESSAGE, read_login_attempt, verdict_message};
use login_auth::{AppConfig, CredentialStore, SqlCredentialStore};

#[tokio::main]
async fn main() -> ExitCode {
    login_auth::utils::setup_logging();

    match run().await {
        Ok(true) => ExitCode::from(EXIT_LOGIN_SUCCESS),
        Ok(false) => ExitCode::from(EXIT_LOGIN_REJECTED),
        Err(e) => {
            handle_error(&e);
            if matches!(e, AppError::Auth(_)) {
                eprintln!("{FAULT_MESSAGE}");
            }
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

async fn run() -> Result<bool, AppError> {
    let config = AppConfig::load()?;

    info!("Launching login prompt...");

    let store = SqlCredentialStore::connect(&config.store).await?;
    if config.store.create_schema {
        store.ensure_schema().await?;
    }
    store.ping().await?;

    let authenticator = Authenticator::new(store);

    let mut reader = BufReader::new(stdin());
    let mut writer = stdout();
    let Some(attempt) = read_login_attempt(&mut reader, &mut writer).await? else {
        info!("Input closed before credentials were entered");
        authenticator.store().close().await;
        return Ok(false);
    };

    let outcome = authenticator.check(&attempt).await;
    authenticator.store().close().await;
    let outcome = outcome?;

    println!("{}", verdict_message(&outcome));
    Ok(outcome.is_authenticated())
}
