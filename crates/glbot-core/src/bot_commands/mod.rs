//! Bot commands module.

mod command;
pub(crate) mod handle_chat_command;
mod parser;

pub use command::{BotCommand, CommandHandlingStatus};
#[cfg(any(test, feature = "testkit"))]
pub use handle_chat_command::MockHandleChatCommandInterface;
pub use handle_chat_command::{HandleChatCommandInterface, TOKEN_SET_REPLY};
pub use parser::CommandParser;
