//! Terminal login prompt
//!
//! Reads one login attempt from a line-oriented reader and formats the
//! verdict shown to the user.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::{AuthOutcome, LoginAttempt};

pub const EMAIL_PROMPT: &str = "Email: ";
pub const PASSWORD_PROMPT: &str = "Password: ";
pub const SUCCESS_MESSAGE: &str = "Login successful.";
pub const REJECTED_MESSAGE: &str = "Invalid email or password.";
pub const FAULT_MESSAGE: &str = "Unable to reach the credential store. Please try again later.";

/// Prompt for email then password. Returns `None` if input ends first.
pub async fn read_login_attempt<R, W>(
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<Option<LoginAttempt>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(email) = read_field(reader, writer, EMAIL_PROMPT).await? else {
        return Ok(None);
    };
    let Some(password) = read_field(reader, writer, PASSWORD_PROMPT).await? else {
        return Ok(None);
    };
    Ok(Some(LoginAttempt { email, password }))
}

async fn read_field<R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(prompt.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }

    // Only the line terminator is stripped; spaces are part of the credential
    let value = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);
    Ok(Some(value.to_string()))
}

/// Message for the user. Never says which of email or password was wrong.
pub fn verdict_message(outcome: &AuthOutcome) -> &'static str {
    if outcome.is_authenticated() {
        SUCCESS_MESSAGE
    } else {
        REJECTED_MESSAGE
    }
}
