use std::path::Path;

use super::error::GistError;

/// Checks a gist file name typed by the user.
///
/// Untitled documents have no name to fall back on, so they require one.
/// `gistfileN` names are reserved for the names GitHub generates itself.
pub fn validate_file_name(value: &str, untitled: bool) -> Result<(), GistError> {
    if untitled && value.trim().is_empty() {
        return Err(GistError::invalid_input("A new gist needs a file name"));
    }
    if Path::new(value).extension().is_none() {
        return Err(GistError::invalid_input(
            "The gist file name needs an extension (for example: example.ts)",
        ));
    }
    if is_generated_name(value) {
        return Err(GistError::invalid_input(
            "The gist file name cannot look like 'gistfile' plus a number (for example: gistfile1.ts)",
        ));
    }
    Ok(())
}

pub fn validate_description(value: &str) -> Result<(), GistError> {
    if value.trim().is_empty() {
        return Err(GistError::invalid_input("The gist description cannot be empty"));
    }
    Ok(())
}

/// `^gistfile\d+(\.\w+)?$`, case-insensitive, on the trimmed value.
fn is_generated_name(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    let Some(rest) = lower.strip_prefix("gistfile") else {
        return false;
    };

    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }

    match rest[digits..].strip_prefix('.') {
        None => rest.len() == digits,
        Some(ext) => !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
    }
}

/// Last component of a path, accepting both `/` and `\` separators.
pub fn base_name(path: &str) -> &str {
    path.rsplit(&['/', '\\'][..]).next().unwrap_or(path)
}
