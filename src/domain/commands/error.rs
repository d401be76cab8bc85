use std::fmt;

use crate::domain::gist::GistError;

/// Failure reported by the editor host while serving a port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    CallFailed(String),
    InvalidResponse(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::CallFailed(msg) => write!(f, "Host call failed: {msg}"),
            HostError::InvalidResponse(msg) => write!(f, "Invalid host response: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

impl HostError {
    pub fn call_failed(message: impl Into<String>) -> Self {
        HostError::CallFailed(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        HostError::InvalidResponse(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Host(HostError),
    Gist(GistError),
    InvalidToken(String),
    MissingToken,
    UnknownCommand(String),
    NotRegistered(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Host(err) => write!(f, "{err}"),
            CommandError::Gist(err) => write!(f, "{err}"),
            CommandError::InvalidToken(msg) => write!(f, "{msg}"),
            CommandError::MissingToken => write!(f, "No GitHub access token is stored"),
            CommandError::UnknownCommand(id) => write!(f, "Unknown command: {id}"),
            CommandError::NotRegistered(id) => write!(f, "Command is not registered: {id}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Host(err) => Some(err),
            CommandError::Gist(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HostError> for CommandError {
    fn from(err: HostError) -> Self {
        CommandError::Host(err)
    }
}

impl From<GistError> for CommandError {
    fn from(err: GistError) -> Self {
        CommandError::Gist(err)
    }
}
