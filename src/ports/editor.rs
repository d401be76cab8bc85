use serde::{Deserialize, Serialize};

use crate::domain::commands::HostError;

/// Snapshot of the document in the active editor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDocument {
    /// Path of the file on disk, `None` for untitled documents.
    pub file_name: Option<String>,
    pub text: String,
    /// Text covered by the selection; `None` or empty when nothing is selected.
    pub selected_text: Option<String>,
}

impl ActiveDocument {
    pub fn is_untitled(&self) -> bool {
        self.file_name.is_none()
    }
}

pub trait EditorPort {
    /// The document in the active text editor, if any.
    fn active_document(&self) -> Result<Option<ActiveDocument>, HostError>;
}
