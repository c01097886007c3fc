//! Webhook handlers.

mod push;
mod system;

#[cfg(test)]
mod tests;

use actix_web::web;
use serde::Deserialize;

use crate::{Result, ServerError};

/// Target channel, from the request query string.
#[derive(Debug, Deserialize)]
pub(crate) struct ChannelQuery {
    pub(crate) channel: String,
}

fn parse_event_body<'de, T>(event_type: &str, body: &'de str) -> Result<T>
where
    T: Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| ServerError::EventParseError {
        event_type: event_type.into(),
        source: e,
    })
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/system_notices",
        web::post().to(system::system_notices_handler),
    )
    .route(
        "/project_notices",
        web::post().to(push::push_notices_handler),
    );
}
