// parley/parley-stomp
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Not connected")]
    NotConnected,
    #[error("Request error: {msg}")]
    Generic { msg: String },
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Parse error: {msg}")]
    Generic { msg: String },
    #[error("Unknown command '{command}'")]
    UnknownCommand { command: String },
    #[error("Malformed header line '{line}'")]
    MalformedHeader { line: String },
    #[error("Invalid escape sequence '\\{sequence}' in header")]
    InvalidEscape { sequence: char },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        Self::ParseError(value.into())
    }
}
