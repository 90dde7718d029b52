use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployKeyError {
    #[error("could not get deploy keys")]
    GetKey(#[source] KeyErrorCause),

    #[error("could not parse deploy keys")]
    Decode(#[source] serde_json::Error),

    #[error("could not delete key ID {key_id}")]
    DeleteKey {
        key_id: u64,
        #[source]
        cause: KeyErrorCause,
    },

    #[error("could not create deploy key")]
    CreateKey(#[source] KeyErrorCause),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeployKeyError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::GetKey(cause) | Self::DeleteKey { cause, .. } | Self::CreateKey(cause) => {
                match cause {
                    KeyErrorCause::Status { status, .. } => Some(*status),
                    _ => None,
                }
            }
            Self::Decode(_) | Self::Other(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum KeyErrorCause {
    #[error("request failed")]
    Transport(#[source] anyhow::Error),

    #[error("could not read response body")]
    Body(#[source] reqwest::Error),

    #[error("could not parse response body")]
    Decode(#[source] serde_json::Error),

    #[error("unexpected http status {status}{}", describe(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

fn describe(message: &Option<String>) -> String {
    match message {
        Some(s) => format!(" ({s})"),
        None => String::new(),
    }
}
