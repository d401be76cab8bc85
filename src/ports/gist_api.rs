use async_trait::async_trait;

use crate::domain::gist::{CreatedGist, GistError, NewGist};

/// Remote gist service (GitHub's `POST /gists`).
#[async_trait(?Send)]
pub trait GistApiPort {
    async fn create_gist(&self, token: &str, gist: &NewGist) -> Result<CreatedGist, GistError>;
}
