pub mod error;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::gist::CreatedGist;

pub use error::{CommandError, HostError};

/// Commands contributed to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    CreateGist,
    SetToken,
}

const COMMAND_TABLE: [(CommandId, &str); 2] = [
    (CommandId::CreateGist, "gistmate.gist.create"),
    (CommandId::SetToken, "gistmate.profiles.setToken"),
];

impl CommandId {
    pub fn as_str(self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        COMMAND_TABLE
            .iter()
            .find(|(_, name)| *name == value)
            .map(|(id, _)| *id)
            .ok_or_else(|| CommandError::UnknownCommand(value.to_string()))
    }
}

/// Every command the extension registers on activation.
pub fn supported_commands() -> Vec<CommandId> {
    COMMAND_TABLE.iter().map(|(id, _)| *id).collect()
}

/// Result of running a command, reported back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CommandOutcome {
    GistCreated { gist: CreatedGist },
    TokenStored,
    Cancelled,
    Failed { message: String },
}
