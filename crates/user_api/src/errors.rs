use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx answer. `message` is the `message` field of the body, when the
    /// body could be parsed and the field was not blank.
    #[error("{}", rejected_message(.status, .message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("No bearer token available")]
    Unauthenticated,

    #[error("{0}")]
    Transport(String),

    #[error("Error parsing json: {0}")]
    Json(String),

    #[error("Failed to parse url")]
    UrlParsing,
}

fn rejected_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("request rejected with status {status}"),
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
