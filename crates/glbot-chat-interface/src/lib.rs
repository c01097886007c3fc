//! Chat service interface.

mod errors;
mod interface;

pub use errors::{ChatError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockChatService;
pub use interface::ChatService;
