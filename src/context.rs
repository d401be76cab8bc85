use std::sync::Arc;

use crate::adapters::shared::GithubGistClient;
use crate::config::{ExtensionMode, Settings};
use crate::domain::logging::Logger;
use crate::platform::Platform;
use crate::ports::{ChannelProvider, EditorPort, GistApiPort, PromptPort, SecretStorePort};

/// Services the editor host hands to the extension on activation.
pub struct HostServices {
    pub secrets: Box<dyn SecretStorePort>,
    pub editor: Box<dyn EditorPort>,
    pub prompt: Box<dyn PromptPort>,
    pub channels: Arc<dyn ChannelProvider>,
}

/// Everything a command needs: host ports, settings and the platform.
pub struct ExtensionContext {
    platform: Platform,
    mode: ExtensionMode,
    settings: Settings,
    host: HostServices,
    gists: Box<dyn GistApiPort>,
}

impl ExtensionContext {
    /// Context using the process-wide logger and the GitHub REST client
    /// pointed at `settings.api_base_url`.
    pub fn new(host: HostServices, settings: Settings) -> Self {
        let gists = Box::new(GithubGistClient::new(settings.api_base_url.clone()));
        Self {
            platform: Platform::new(),
            mode: ExtensionMode::default(),
            settings,
            host,
            gists,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_mode(mut self, mode: ExtensionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_gist_api(mut self, gists: Box<dyn GistApiPort>) -> Self {
        self.gists = gists;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    #[inline]
    pub fn logger(&self) -> &'static Logger {
        self.platform.logger()
    }

    pub fn mode(&self) -> ExtensionMode {
        self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn secrets(&self) -> &dyn SecretStorePort {
        self.host.secrets.as_ref()
    }

    pub fn editor(&self) -> &dyn EditorPort {
        self.host.editor.as_ref()
    }

    pub fn prompt(&self) -> &dyn PromptPort {
        self.host.prompt.as_ref()
    }

    pub fn gists(&self) -> &dyn GistApiPort {
        self.gists.as_ref()
    }

    pub fn channels(&self) -> Arc<dyn ChannelProvider> {
        Arc::clone(&self.host.channels)
    }
}
