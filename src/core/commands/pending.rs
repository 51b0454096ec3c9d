//! Network-bound command work that completes after `submit` returns.

use tracing::debug;

use crate::core::error::FetchError;
use crate::core::host::ShellHost;
use crate::models::{OutputLine, ShellFlavor};

pub const IP_FAILURE: &str = "Erro ao recuperar IP";
pub const REMOTE_INVALID: &str = "Resposta inválida do backend";
pub const REMOTE_UNREACHABLE: &str = "Backend inacessível";

/// The asynchronous half of a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingTask {
    /// `ifconfig`: look up the public address and print it shell-style.
    PublicIp { flavor: ShellFlavor },
    /// Unknown command: ask the remote service, else report not found.
    Remote { line: String, key: String },
}

impl PendingTask {
    /// Await the host and render the outcome. Never fails; every error
    /// becomes exactly one line.
    pub async fn run<H: ShellHost>(self, host: &H) -> Vec<OutputLine> {
        match self {
            Self::PublicIp { flavor } => match host.public_ip().await {
                Ok(ip) => vec![OutputLine::text(match flavor {
                    ShellFlavor::Posix => format!("inet addr: {}", ip),
                    ShellFlavor::Windows => format!("Endereço IPv4 : {}", ip),
                })],
                Err(e) => {
                    debug!("public ip lookup failed: {}", e);
                    vec![OutputLine::error(IP_FAILURE)]
                }
            },
            Self::Remote { line, key } => match host.remote_command(&line).await {
                Ok(lines) if !lines.is_empty() => lines.into_iter().map(OutputLine::text).collect(),
                Ok(_) | Err(FetchError::Disabled) => vec![not_found(&key)],
                Err(e) => {
                    debug!("remote fallback for {:?} failed: {}", line, e);
                    vec![OutputLine::error(remote_error_line(&e))]
                }
            },
        }
    }
}

pub fn not_found(key: &str) -> OutputLine {
    OutputLine::error(format!("{}: comando não encontrado", key))
}

fn remote_error_line(error: &FetchError) -> String {
    match error {
        FetchError::Api(_) => error.to_string(),
        FetchError::InvalidContent | FetchError::JsonParseError(_) => REMOTE_INVALID.to_string(),
        _ => REMOTE_UNREACHABLE.to_string(),
    }
}
