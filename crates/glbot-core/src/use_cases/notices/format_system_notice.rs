use glbot_config::Config;
use glbot_models::events::{
    GlProjectEventPayload, GlSystemEvent, GlTeamMemberEventPayload, GlUserEventPayload,
};

/// Format a system hook event into a single notice line.
#[derive(Default)]
pub struct FormatSystemNotice {
    _private: (),
}

impl FormatSystemNotice {
    #[tracing::instrument(skip_all, ret)]
    pub fn run(&self, config: &Config, event: &GlSystemEvent) -> String {
        match event {
            GlSystemEvent::ProjectCreated(payload) => {
                self.project_line(config, "created", payload)
            }
            GlSystemEvent::ProjectDestroyed(payload) => {
                self.project_line(config, "destroyed", payload)
            }
            GlSystemEvent::TeamMemberAdded(payload) => self.team_line("added to", payload),
            GlSystemEvent::TeamMemberRemoved(payload) => self.team_line("removed from", payload),
            GlSystemEvent::UserCreated(payload) => self.user_line("created", payload),
            GlSystemEvent::UserDestroyed(payload) => self.user_line("destroyed", payload),
        }
    }

    fn project_line(&self, config: &Config, action: &str, payload: &GlProjectEventPayload) -> String {
        // The web root is the API endpoint with its API path suffix removed.
        let base_url = config.gitlab.endpoint.replacen("api/v3", "", 1);
        format!(
            "Project: event: {} - name: {} - owner: {} <{}> - {}{}",
            action,
            payload.name,
            payload.owner_name,
            payload.owner_email,
            base_url,
            payload.path_with_namespace
        )
    }

    fn team_line(&self, action: &str, payload: &GlTeamMemberEventPayload) -> String {
        format!(
            "User: event: {} team - name: {} ({}) - user: {} <{}> - access: {}",
            action,
            payload.project_name,
            payload.project_path,
            payload.user_name,
            payload.user_email,
            payload.project_access
        )
    }

    fn user_line(&self, action: &str, payload: &GlUserEventPayload) -> String {
        format!(
            "User: event: {} - name: {} <{}>",
            action, payload.name, payload.email
        )
    }
}
