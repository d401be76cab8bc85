use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::commands::HostError;

/// Returns `Err(message)` to reject the current input.
pub type InputValidator = Rc<dyn Fn(&str) -> Result<(), String>>;

#[derive(Clone, Default)]
pub struct InputBoxOptions {
    pub title: String,
    pub prompt: String,
    pub place_holder: String,
    pub value: String,
    pub password: bool,
    /// Keep the box open when focus moves elsewhere.
    pub ignore_focus_out: bool,
    pub validate: Option<InputValidator>,
}

impl InputBoxOptions {
    /// Runs the validator, if any, against `value`.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match &self.validate {
            Some(validate) => validate(value),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickPickItem {
    pub label: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickPickOptions {
    pub title: String,
    pub place_holder: String,
    pub ignore_focus_out: bool,
}

/// A button on an information message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageItem {
    pub title: String,
    pub value: String,
    pub is_close_affordance: bool,
}

/// User interaction offered by the host editor. Every prompt resolves to
/// `None` when the user dismisses it.
#[async_trait(?Send)]
pub trait PromptPort {
    async fn show_input_box(&self, options: InputBoxOptions) -> Result<Option<String>, HostError>;

    /// Resolves to the `value` of the picked item.
    async fn show_quick_pick(
        &self,
        items: &[QuickPickItem],
        options: &QuickPickOptions,
    ) -> Result<Option<String>, HostError>;

    /// Resolves to the `value` of the chosen item.
    async fn show_information_message(
        &self,
        message: &str,
        modal: bool,
        items: &[MessageItem],
    ) -> Result<Option<String>, HostError>;

    async fn open_external(&self, url: &str) -> Result<(), HostError>;
}
