use async_trait::async_trait;
use glbot_models::events::GlSystemEvent;
use shaku::{Component, Interface};
use tracing::info;

use super::format_system_notice::FormatSystemNotice;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleSystemNoticeEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GlSystemEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandleSystemNoticeEventInterface)]
pub(crate) struct HandleSystemNoticeEvent;

#[async_trait]
impl HandleSystemNoticeEventInterface for HandleSystemNoticeEvent {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GlSystemEvent) -> Result<()> {
        let notice = FormatSystemNotice::default().run(ctx.config, &event);

        // System notices always stream to the configured channel, whatever
        // channel the webhook call asked to join.
        ctx.chat_service
            .message(&ctx.config.chat.notification_channel, &notice)
            .await?;

        info!(
            channel = %ctx.config.chat.notification_channel,
            message = "System notice relayed",
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glbot_chat_interface::MockChatService;
    use glbot_models::events::{GlSystemEvent, GlUserEventPayload};

    use super::{HandleSystemNoticeEvent, HandleSystemNoticeEventInterface};
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_delivers_to_the_configured_channel() {
        let mut ctx = CoreContextTest::new();
        ctx.config.chat.notification_channel = "#gitlab".into();
        ctx.chat_service = {
            let mut svc = MockChatService::new();
            svc.expect_message()
                .once()
                .withf(|target, text| {
                    target == "#gitlab" && text == "User: event: created - name: Ada <ada@x.com>"
                })
                .return_once(|_, _| Ok(()));

            svc
        };

        HandleSystemNoticeEvent
            .run(
                &ctx.as_context(),
                GlSystemEvent::UserCreated(GlUserEventPayload {
                    name: "Ada".into(),
                    email: "ada@x.com".into(),
                }),
            )
            .await
            .unwrap();
    }
}
