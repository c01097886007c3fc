pub(crate) mod ensure_channel_joined;

pub use ensure_channel_joined::EnsureChannelJoined;
