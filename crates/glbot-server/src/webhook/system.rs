//! System notice webhook handlers.

use actix_web::{web, HttpResponse, Result as ActixResult};
use glbot_core::use_cases::{
    channels::EnsureChannelJoined, notices::HandleSystemNoticeEventInterface,
};
use glbot_models::{
    events::{GlSystemEvent, SystemEventType},
    ChannelName,
};
use serde::Deserialize;
use shaku::HasComponent;
use tracing::{info, warn};

use super::{parse_event_body, ChannelQuery};
use crate::{server::AppContext, utils::convert_payload_to_string, Result};

#[derive(Debug, Deserialize)]
struct EventTag {
    event_name: String,
}

pub(crate) fn classify_system_event(body: &str) -> Result<Option<SystemEventType>> {
    let tag: EventTag = parse_event_body("system", body)?;
    Ok(SystemEventType::try_from(tag.event_name.as_str()).ok())
}

pub(crate) fn parse_system_event(
    event_type: SystemEventType,
    body: &str,
) -> Result<GlSystemEvent> {
    let name = event_type.to_str();
    let event = match event_type {
        SystemEventType::ProjectCreate => {
            GlSystemEvent::ProjectCreated(parse_event_body(name, body)?)
        }
        SystemEventType::ProjectDestroy => {
            GlSystemEvent::ProjectDestroyed(parse_event_body(name, body)?)
        }
        SystemEventType::UserAddToTeam => {
            GlSystemEvent::TeamMemberAdded(parse_event_body(name, body)?)
        }
        SystemEventType::UserRemoveFromTeam => {
            GlSystemEvent::TeamMemberRemoved(parse_event_body(name, body)?)
        }
        SystemEventType::UserCreate => GlSystemEvent::UserCreated(parse_event_body(name, body)?),
        SystemEventType::UserDestroy => GlSystemEvent::UserDestroyed(parse_event_body(name, body)?),
    };

    Ok(event)
}

#[tracing::instrument(skip_all, fields(channel = %query.channel))]
pub(crate) async fn system_notices_handler(
    query: web::Query<ChannelQuery>,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    let body = match convert_payload_to_string(&mut payload).await {
        Ok(body) => body,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Bad payload for system notice."
            })))
        }
    };

    let core_ctx = ctx.as_core_context();

    // The original bot joins before reading the payload; a malformed body
    // still triggers the join.
    let channel = ChannelName::from(query.channel.as_str());
    if let Err(e) = EnsureChannelJoined.run(&core_ctx, &channel).await {
        warn!(channel = %channel, error = %e, message = "Could not join target channel");
    }

    let event_type = match classify_system_event(&body)? {
        Some(event_type) => event_type,
        None => {
            info!(message = "Unsupported system event, nothing to relay");
            return Ok(HttpResponse::Accepted().body("System notice."));
        }
    };

    let event = parse_system_event(event_type, &body)?;

    let handler: &dyn HandleSystemNoticeEventInterface = ctx.core_module.resolve_ref();
    if let Err(e) = handler.run(&core_ctx, event).await {
        warn!(error = %e, message = "System notice delivery failed");
    }

    Ok(HttpResponse::Accepted().body("System notice."))
}
