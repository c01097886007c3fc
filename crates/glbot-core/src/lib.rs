//! Core logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod bot_commands;
mod context;
pub mod errors;
pub mod use_cases;

use bot_commands::handle_chat_command::HandleChatCommand;
pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::notices::{
    handle_push_notice_event::HandlePushNoticeEvent,
    handle_system_notice_event::HandleSystemNoticeEvent,
};

module! {
    pub CoreModule {
        components = [
            HandleChatCommand, HandlePushNoticeEvent, HandleSystemNoticeEvent
        ],
        providers = []
    }
}
