use glbot_models::ChannelName;

use crate::{CoreContext, Result};

/// Join a channel if the bot is not already a member.
///
/// A redundant join request is harmless at the chat-protocol level, so the
/// membership check does not need to be atomic across concurrent callers.
pub struct EnsureChannelJoined;

impl EnsureChannelJoined {
    #[tracing::instrument(skip(self, ctx), fields(channel = %channel))]
    pub async fn run(&self, ctx: &CoreContext<'_>, channel: &ChannelName) -> Result<()> {
        let members = ctx.chat_service.channel_members(channel.as_str()).await?;
        if !members.iter().any(|nick| nick == &ctx.config.name) {
            ctx.chat_service.join(channel.as_str(), true).await?;
        }

        Ok(())
    }
}
