//! Null driver for the chat service.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use glbot_chat_interface::{ChatService, Result};

/// Null chat service. Logs outgoing traffic and drops it.
#[derive(Clone, Default)]
pub struct NullChatService {
    _private: (),
}

impl NullChatService {
    /// Build a null chat service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ChatService for NullChatService {
    #[tracing::instrument(skip(self))]
    async fn join(&self, channel: &str, immediate: bool) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn message(&self, target: &str, text: &str) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn channel_members(&self, channel: &str) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use glbot_chat_interface::ChatService;

    use super::NullChatService;

    #[tokio::test]
    async fn null_service_accepts_everything() {
        let svc = NullChatService::new();

        svc.join("#ops", true).await.unwrap();
        svc.message("#ops", "hello").await.unwrap();
        assert!(svc.channel_members("#ops").await.unwrap().is_empty());
    }
}
