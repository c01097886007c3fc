use async_trait::async_trait;

use crate::Result;

/// Chat connection adapter interface.
///
/// The actual chat-protocol connection (connecting, authenticating,
/// membership tracking) lives behind this trait.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Join a channel. With `immediate`, the channel is usable before the
    /// join handshake completes.
    async fn join(&self, channel: &str, immediate: bool) -> Result<()>;
    /// Send a message to a channel or a user.
    async fn message(&self, target: &str, text: &str) -> Result<()>;
    /// List nicknames present in a channel.
    async fn channel_members(&self, channel: &str) -> Result<Vec<String>>;
}
