use std::rc::Rc;

use super::error::GistError;
use super::types::{CreatedGist, NewGist, Visibility};
use super::validation::{base_name, validate_description, validate_file_name};
use crate::context::ExtensionContext;
use crate::domain::commands::CommandError;
use crate::domain::logging::LogParam;
use crate::domain::profile::{with_access_token, TOKEN_SECRET_KEY};
use crate::ports::{InputBoxOptions, QuickPickItem, QuickPickOptions};

/// Creates a gist from the active document, or from its selection when the
/// selection is not empty.
///
/// Returns `Ok(None)` when the user cancels any of the prompts.
pub async fn create_gist(ctx: &ExtensionContext) -> Result<Option<CreatedGist>, CommandError> {
    if !with_access_token(ctx).await? {
        return Ok(None);
    }
    let token = ctx
        .secrets()
        .get(TOKEN_SECRET_KEY)
        .await?
        .ok_or(CommandError::MissingToken)?;

    let document = ctx
        .editor()
        .active_document()?
        .ok_or(GistError::NoActiveEditor)?;
    let untitled = document.is_untitled();
    let suggested = document
        .file_name
        .as_deref()
        .map(base_name)
        .unwrap_or_default()
        .to_string();

    let Some(filename) = prompt_file_name(ctx, suggested, untitled).await? else {
        return Ok(None);
    };
    let Some(description) = prompt_description(ctx).await? else {
        return Ok(None);
    };
    let visibility = prompt_visibility(ctx).await?;

    let content = match document.selected_text {
        Some(selected) if !selected.is_empty() => selected,
        _ => document.text,
    };

    let gist = NewGist::single_file(description, visibility, filename.clone(), content);
    ctx.logger().debug(
        "creating gist",
        &[LogParam::from(&filename), LogParam::from(visibility.is_public())],
    );

    let created = ctx.gists().create_gist(&token, &gist).await?;
    ctx.logger()
        .log("gist created", &[LogParam::from(created.html_url.as_str())]);
    Ok(Some(created))
}

async fn prompt_file_name(
    ctx: &ExtensionContext,
    suggested: String,
    untitled: bool,
) -> Result<Option<String>, CommandError> {
    let options = InputBoxOptions {
        title: "Gist file name".to_string(),
        prompt: "Enter the gist file name, including its extension".to_string(),
        place_holder: "For example: example.ts".to_string(),
        value: suggested,
        validate: Some(Rc::new(move |value: &str| {
            validate_file_name(value, untitled).map_err(|err| err.to_string())
        })),
        ..InputBoxOptions::default()
    };

    let Some(filename) = ctx.prompt().show_input_box(options).await? else {
        return Ok(None);
    };
    if filename.is_empty() {
        return Ok(None);
    }
    validate_file_name(&filename, untitled)?;
    Ok(Some(filename))
}

async fn prompt_description(ctx: &ExtensionContext) -> Result<Option<String>, CommandError> {
    let options = InputBoxOptions {
        title: "Gist description".to_string(),
        prompt: "Enter a description for the gist".to_string(),
        place_holder: "Gist description".to_string(),
        validate: Some(Rc::new(|value: &str| {
            validate_description(value).map_err(|err| err.to_string())
        })),
        ..InputBoxOptions::default()
    };

    let Some(description) = ctx.prompt().show_input_box(options).await? else {
        return Ok(None);
    };
    if description.is_empty() {
        return Ok(None);
    }
    validate_description(&description)?;
    Ok(Some(description))
}

/// Dismissing the pick falls back to the `default_private` setting.
async fn prompt_visibility(ctx: &ExtensionContext) -> Result<Visibility, CommandError> {
    let items = [
        QuickPickItem {
            label: "Public".to_string(),
            value: Visibility::Public.pick_value().to_string(),
            description: "Anyone can see this gist".to_string(),
        },
        QuickPickItem {
            label: "Secret".to_string(),
            value: Visibility::Secret.pick_value().to_string(),
            description: "Only you and people you share the link with can see this gist"
                .to_string(),
        },
    ];
    let options = QuickPickOptions {
        title: "Gist visibility".to_string(),
        place_holder: "Choose the gist visibility".to_string(),
        ignore_focus_out: true,
    };

    let picked = ctx.prompt().show_quick_pick(&items, &options).await?;
    let visibility = match picked {
        Some(value) => Visibility::from_pick_value(&value),
        None if ctx.settings().default_private => Visibility::Secret,
        None => Visibility::Public,
    };
    Ok(visibility)
}
