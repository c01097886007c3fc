use async_trait::async_trait;
use glbot_models::{events::GlPushEvent, ChannelName};
use shaku::{Component, Interface};
use tracing::info;

use super::format_push_notice::FormatPushNotice;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandlePushNoticeEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, channel: &str, event: GlPushEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandlePushNoticeEventInterface)]
pub(crate) struct HandlePushNoticeEvent;

#[async_trait]
impl HandlePushNoticeEventInterface for HandlePushNoticeEvent {
    #[tracing::instrument(skip(self, ctx, event), fields(commits = event.commits.len()))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, channel: &str, event: GlPushEvent) -> Result<()> {
        // Unlike system notices, push notices go to the channel named in the
        // webhook call.
        let target = ChannelName::from(channel);

        let lines = FormatPushNotice::default().run(&event);
        let count = lines.len();
        for line in lines {
            ctx.chat_service.message(target.as_str(), &line).await?;
        }

        info!(
            channel = %target,
            commits = count,
            message = "Push notice relayed",
        );

        Ok(())
    }
}
