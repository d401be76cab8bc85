use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistFile {
    pub content: String,
}

/// Body of `POST /gists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGist {
    pub description: String,
    pub public: bool,
    pub files: BTreeMap<String, GistFile>,
}

impl NewGist {
    pub fn single_file(
        description: impl Into<String>,
        visibility: Visibility,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let mut files = BTreeMap::new();
        files.insert(
            filename.into(),
            GistFile {
                content: content.into(),
            },
        );
        Self {
            description: description.into(),
            public: visibility.is_public(),
            files,
        }
    }
}

/// The subset of GitHub's gist response the extension uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedGist {
    pub id: String,
    pub html_url: String,
    pub public: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Secret,
}

impl Visibility {
    /// Value carried by the quick-pick item for this visibility.
    pub fn pick_value(self) -> &'static str {
        match self {
            Visibility::Public => "Y",
            Visibility::Secret => "N",
        }
    }

    pub fn from_pick_value(value: &str) -> Self {
        if value == "Y" {
            Visibility::Public
        } else {
            Visibility::Secret
        }
    }

    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}
