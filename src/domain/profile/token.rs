use crate::domain::commands::CommandError;

/// Secret-store key of the GitHub access token.
pub const TOKEN_SECRET_KEY: &str = "gistMateToken";

pub const TOKEN_PREFIX: &str = "ghp_";

/// GitHub page for creating a classic token with the `gist` scope.
pub const NEW_TOKEN_URL: &str =
    "https://github.com/settings/tokens/new?scopes=gist&description=GistMate Extension";

pub fn validate_token(value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        return Err(CommandError::InvalidToken("Token cannot be empty".to_string()));
    }
    if !value.starts_with(TOKEN_PREFIX) {
        return Err(CommandError::InvalidToken("Invalid token format".to_string()));
    }
    Ok(())
}
