use std::rc::Rc;

use super::token::{validate_token, NEW_TOKEN_URL, TOKEN_SECRET_KEY};
use crate::context::ExtensionContext;
use crate::domain::commands::{CommandError, CommandId};
use crate::domain::logging::Cause;
use crate::ports::{InputBoxOptions, MessageItem};

const GET_TOKEN: &str = "GET";
const ENTER_TOKEN: &str = "SET";

/// Walks the user through storing a GitHub access token.
///
/// Returns `Ok(false)` when the user backs out without entering one.
pub async fn set_access_token(ctx: &ExtensionContext) -> Result<bool, CommandError> {
    let prompt = ctx.prompt();

    let choice = prompt
        .show_information_message(
            "GistMate needs a GitHub access token for this feature.\n\
             The token must include the \"gist\" scope.",
            true,
            &[
                MessageItem {
                    title: "Get one on GitHub".to_string(),
                    value: GET_TOKEN.to_string(),
                    is_close_affordance: false,
                },
                MessageItem {
                    title: "Enter token manually".to_string(),
                    value: ENTER_TOKEN.to_string(),
                    is_close_affordance: true,
                },
            ],
        )
        .await?
        .unwrap_or_else(|| ENTER_TOKEN.to_string());

    if choice == GET_TOKEN {
        ctx.logger().debug("opening GitHub token page", &[]);
        prompt.open_external(NEW_TOKEN_URL).await?;
    }

    let options = InputBoxOptions {
        title: "GitHub authentication".to_string(),
        prompt: "Enter your GitHub access token".to_string(),
        place_holder: "ghp_".to_string(),
        password: true,
        validate: Some(Rc::new(|value: &str| {
            validate_token(value).map_err(|err| err.to_string())
        })),
        ..InputBoxOptions::default()
    };

    let token = prompt
        .show_input_box(options)
        .await?
        .filter(|token| !token.is_empty());

    let Some(token) = token else {
        prompt
            .show_information_message("A GitHub access token is required to continue", false, &[])
            .await?;
        return Ok(false);
    };

    validate_token(&token)?;
    ctx.secrets().store(TOKEN_SECRET_KEY, &token).await?;
    ctx.logger().log("access token stored", &[]);
    Ok(true)
}

/// `true` when a token is already stored; otherwise asks for one.
///
/// A failure while asking is logged under the token command's own id and
/// reads as "no token", so the guarded command just stops.
pub async fn with_access_token(ctx: &ExtensionContext) -> Result<bool, CommandError> {
    let stored = ctx.secrets().get(TOKEN_SECRET_KEY).await?;
    if stored.is_some_and(|token| !token.is_empty()) {
        return Ok(true);
    }
    match set_access_token(ctx).await {
        Ok(stored) => Ok(stored),
        Err(err) => {
            ctx.logger()
                .error(CommandId::SetToken.as_str(), Some(Cause::from(&err)), &[]);
            Ok(false)
        }
    }
}
