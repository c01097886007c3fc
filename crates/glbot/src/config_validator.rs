use glbot_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing bot name (BOT_NAME)")]
    MissingBotName,
    #[error("Missing GitLab endpoint (BOT_GITLAB_ENDPOINT)")]
    MissingGitLabEndpoint,
    #[error("Missing notification channel (BOT_CHAT_NOTIFICATION_CHANNEL)")]
    MissingNotificationChannel,
}

pub(crate) fn validate_configuration(config: &Config) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::MissingBotName);
    }

    if config.gitlab.endpoint.is_empty() {
        return Err(ConfigError::MissingGitLabEndpoint);
    }

    if config.chat.notification_channel.is_empty() {
        return Err(ConfigError::MissingNotificationChannel);
    }

    Ok(())
}
