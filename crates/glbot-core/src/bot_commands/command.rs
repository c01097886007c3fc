/// Bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Store the sender's GitLab API token.
    SetToken(String),
}

/// Command handling status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandHandlingStatus {
    /// Command handled.
    Handled,
    /// Command ignored.
    #[default]
    Ignored,
}
