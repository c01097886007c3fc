use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::info;

use super::{command::CommandHandlingStatus, BotCommand, CommandParser};
use crate::{use_cases::auth::SetToken, CoreContext, Result};

/// Acknowledgement sent back to the sender once the token is stored.
pub const TOKEN_SET_REPLY: &str = "Token set.";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleChatCommandInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        sender: &str,
        message: &str,
    ) -> Result<CommandHandlingStatus>;
}

#[derive(Component)]
#[shaku(interface = HandleChatCommandInterface)]
pub(crate) struct HandleChatCommand;

#[async_trait]
impl HandleChatCommandInterface for HandleChatCommand {
    #[tracing::instrument(skip(self, ctx, message), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        sender: &str,
        message: &str,
    ) -> Result<CommandHandlingStatus> {
        match CommandParser::parse(message) {
            Some(BotCommand::SetToken(value)) => {
                SetToken.run(ctx, sender, &value).await?;

                // Only acknowledge once the record is actually persisted.
                ctx.chat_service.message(sender, TOKEN_SET_REPLY).await?;

                info!(login = sender, message = "Token stored");

                Ok(CommandHandlingStatus::Handled)
            }
            None => Ok(CommandHandlingStatus::Ignored),
        }
    }
}
