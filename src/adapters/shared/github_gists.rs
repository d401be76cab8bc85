use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::domain::gist::{CreatedGist, GistError, NewGist};
use crate::ports::GistApiPort;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// GitHub REST client for `POST /gists`.
pub struct GithubGistClient {
    client: reqwest::Client,
    base_url: String,
}

impl GithubGistClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/gists", self.base_url)
    }
}

/// Builds the error for a failed response. GitHub puts a human readable
/// reason in the `message` field of the body.
pub fn api_error(status: u16, body: &str) -> GistError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(str::to_string))
        .filter(|message| !message.is_empty())
        .or_else(|| {
            StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Unknown error".to_string());
    GistError::Api { status, message }
}

#[async_trait(?Send)]
impl GistApiPort for GithubGistClient {
    async fn create_gist(&self, token: &str, gist: &NewGist) -> Result<CreatedGist, GistError> {
        let request = self
            .client
            .post(self.endpoint())
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION)
            .bearer_auth(token)
            .json(gist);

        // Browsers refuse a scripted User-Agent.
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.header(
            reqwest::header::USER_AGENT,
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
        );

        let response = request
            .send()
            .await
            .map_err(|e| GistError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        response
            .json::<CreatedGist>()
            .await
            .map_err(|e| GistError::InvalidResponse(e.to_string()))
    }
}
