//! GitLab webhook event models.

mod push;
mod system;

pub use push::{GlCommit, GlCommitAuthor, GlPushEvent, GlRepository};
pub use system::{
    GlProjectEventPayload, GlSystemEvent, GlTeamMemberEventPayload, GlUserEventPayload,
    SystemEventType, SystemEventTypeError,
};
