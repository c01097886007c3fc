//! Push notice webhook handlers.

use actix_web::{web, HttpResponse, Result as ActixResult};
use glbot_core::use_cases::{
    channels::EnsureChannelJoined, notices::HandlePushNoticeEventInterface,
};
use glbot_models::{events::GlPushEvent, ChannelName};
use shaku::HasComponent;
use tracing::warn;

use super::{parse_event_body, ChannelQuery};
use crate::{server::AppContext, utils::convert_payload_to_string, Result};

pub(crate) fn parse_push_event(body: &str) -> Result<GlPushEvent> {
    parse_event_body("push", body)
}

#[tracing::instrument(skip_all, fields(channel = %query.channel))]
pub(crate) async fn push_notices_handler(
    query: web::Query<ChannelQuery>,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    let body = match convert_payload_to_string(&mut payload).await {
        Ok(body) => body,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Bad payload for push notice."
            })))
        }
    };

    let core_ctx = ctx.as_core_context();

    let channel = ChannelName::from(query.channel.as_str());
    if let Err(e) = EnsureChannelJoined.run(&core_ctx, &channel).await {
        warn!(channel = %channel, error = %e, message = "Could not join target channel");
    }

    let event = parse_push_event(&body)?;

    let handler: &dyn HandlePushNoticeEventInterface = ctx.core_module.resolve_ref();
    if let Err(e) = handler.run(&core_ctx, &query.channel, event).await {
        warn!(error = %e, message = "Push notice delivery failed");
    }

    Ok(HttpResponse::Accepted().body("Push notice."))
}
