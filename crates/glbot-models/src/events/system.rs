use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemEventTypeError {
    /// Unsupported event.
    #[error("Unsupported event: {}", event)]
    UnsupportedEvent { event: String },
}

/// System hook event type, as carried by the `event_name` payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventType {
    /// Project created.
    ProjectCreate,
    /// Project destroyed.
    ProjectDestroy,
    /// User added to a project team.
    UserAddToTeam,
    /// User removed from a project team.
    UserRemoveFromTeam,
    /// User created.
    UserCreate,
    /// User destroyed.
    UserDestroy,
}

impl SystemEventType {
    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for SystemEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for SystemEventType {
    type Error = SystemEventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "project_create" => Ok(Self::ProjectCreate),
            "project_destroy" => Ok(Self::ProjectDestroy),
            "user_add_to_team" => Ok(Self::UserAddToTeam),
            "user_remove_from_team" => Ok(Self::UserRemoveFromTeam),
            "user_create" => Ok(Self::UserCreate),
            "user_destroy" => Ok(Self::UserDestroy),
            name => Err(SystemEventTypeError::UnsupportedEvent {
                event: name.to_owned(),
            }),
        }
    }
}

impl From<SystemEventType> for &'static str {
    fn from(event_type: SystemEventType) -> Self {
        match event_type {
            SystemEventType::ProjectCreate => "project_create",
            SystemEventType::ProjectDestroy => "project_destroy",
            SystemEventType::UserAddToTeam => "user_add_to_team",
            SystemEventType::UserRemoveFromTeam => "user_remove_from_team",
            SystemEventType::UserCreate => "user_create",
            SystemEventType::UserDestroy => "user_destroy",
        }
    }
}

/// GitLab project system event payload.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GlProjectEventPayload {
    /// Project name.
    pub name: String,
    /// Owner name.
    pub owner_name: String,
    /// Owner email.
    pub owner_email: String,
    /// Project path with namespace.
    pub path_with_namespace: String,
}

/// GitLab team membership system event payload.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GlTeamMemberEventPayload {
    /// Project name.
    pub project_name: String,
    /// Project path.
    pub project_path: String,
    /// User name.
    pub user_name: String,
    /// User email.
    pub user_email: String,
    /// Access level.
    pub project_access: String,
}

/// GitLab user system event payload.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GlUserEventPayload {
    /// User name.
    pub name: String,
    /// User email.
    pub email: String,
}

/// GitLab system hook event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlSystemEvent {
    /// Project created.
    ProjectCreated(GlProjectEventPayload),
    /// Project destroyed.
    ProjectDestroyed(GlProjectEventPayload),
    /// User added to a project team.
    TeamMemberAdded(GlTeamMemberEventPayload),
    /// User removed from a project team.
    TeamMemberRemoved(GlTeamMemberEventPayload),
    /// User created.
    UserCreated(GlUserEventPayload),
    /// User destroyed.
    UserDestroyed(GlUserEventPayload),
}
