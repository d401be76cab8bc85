use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GistError {
    NoActiveEditor,
    /// Rejected user input; the message is shown as-is in prompts.
    InvalidInput(String),
    Api { status: u16, message: String },
    Transport(String),
    InvalidResponse(String),
}

impl fmt::Display for GistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GistError::NoActiveEditor => write!(f, "Open a file before creating a gist"),
            GistError::InvalidInput(msg) => write!(f, "{msg}"),
            GistError::Api { status, message } => {
                write!(f, "GitHub API error ({status}): {message}")
            }
            GistError::Transport(msg) => write!(f, "Request to GitHub failed: {msg}"),
            GistError::InvalidResponse(msg) => write!(f, "Unexpected GitHub response: {msg}"),
        }
    }
}

impl std::error::Error for GistError {}

impl GistError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GistError::InvalidInput(message.into())
    }
}
