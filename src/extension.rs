//! Extension lifecycle: activation, command dispatch and deactivation.

use crate::adapters::install_log_bridge;
use crate::config::ExtensionMode;
use crate::context::ExtensionContext;
use crate::domain::commands::{supported_commands, CommandError, CommandId, CommandOutcome};
use crate::domain::gist::create_gist;
use crate::domain::logging::{Cause, LogParam, Logger};
use crate::domain::profile::set_access_token;

pub struct Extension {
    context: ExtensionContext,
    registered: Vec<CommandId>,
}

impl Extension {
    /// Configures the logger from the context and registers every command.
    pub fn activate(context: ExtensionContext) -> Self {
        let logger = context.logger();
        let settings = context.settings();
        let debugging = context.mode() == ExtensionMode::Development || settings.debugging;
        logger.configure(context.channels(), settings.log_level, debugging);

        // A second activation finds the bridge already installed.
        let _ = install_log_bridge(logger);

        logger.debug("extension activate", &[]);
        let registered = supported_commands();
        for id in &registered {
            logger.debug("command registered", &[LogParam::from(id.as_str())]);
        }

        Self {
            context,
            registered,
        }
    }

    pub fn context(&self) -> &ExtensionContext {
        &self.context
    }

    pub fn commands(&self) -> &[CommandId] {
        &self.registered
    }

    fn logger(&self) -> &'static Logger {
        self.context.logger()
    }

    /// Runs a command. Failures are logged under the command id and reported
    /// as [`CommandOutcome::Failed`].
    pub async fn execute(&self, id: CommandId) -> CommandOutcome {
        match self.run(id).await {
            Ok(outcome) => outcome,
            Err(err) => {
                self.logger().error(id.as_str(), Some(Cause::from(&err)), &[]);
                CommandOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Looks up a command by its registered name and runs it.
    pub async fn execute_str(&self, command: &str) -> Result<CommandOutcome, CommandError> {
        let id: CommandId = command.parse()?;
        if !self.registered.contains(&id) {
            return Err(CommandError::NotRegistered(command.to_string()));
        }
        Ok(self.execute(id).await)
    }

    async fn run(&self, id: CommandId) -> Result<CommandOutcome, CommandError> {
        self.logger().debug("running command", &[LogParam::from(id.as_str())]);
        let outcome = match id {
            CommandId::CreateGist => match create_gist(&self.context).await? {
                Some(gist) => CommandOutcome::GistCreated { gist },
                None => CommandOutcome::Cancelled,
            },
            CommandId::SetToken => {
                if set_access_token(&self.context).await? {
                    CommandOutcome::TokenStored
                } else {
                    CommandOutcome::Cancelled
                }
            }
        };
        Ok(outcome)
    }

    /// Drops every command registration. The logger keeps its channel.
    pub fn deactivate(&mut self) {
        self.registered.clear();
        self.logger().debug("extension deactivate", &[]);
    }
}
