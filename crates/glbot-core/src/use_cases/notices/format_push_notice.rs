use glbot_models::events::GlPushEvent;

const BOLD: &str = "\x02";
const COLOR_GREEN: &str = "\x033";
const COLOR_YELLOW: &str = "\x038";
const COLOR_RESET: &str = "\x03";

/// Format a push event into one notice line per commit.
///
/// The control characters around the repository, author, branch and short id
/// are emphasis markers understood by the chat protocol; they are part of the
/// wire contract, not decoration.
#[derive(Default)]
pub struct FormatPushNotice {
    _private: (),
}

impl FormatPushNotice {
    #[tracing::instrument(skip_all, ret)]
    pub fn run(&self, event: &GlPushEvent) -> Vec<String> {
        let branch = event.git_ref.replace("refs/heads/", "");

        event
            .commits
            .iter()
            .map(|commit| {
                let short_id: String = commit.id.chars().take(9).collect();
                format!(
                    "{BOLD}{}:{BOLD} {COLOR_GREEN}{} <{}>{COLOR_RESET} {COLOR_YELLOW}{}{COLOR_RESET} * {BOLD}{}{BOLD}: {}",
                    event.repository.name,
                    commit.author.name,
                    commit.author.email,
                    branch,
                    short_id,
                    commit.message
                )
            })
            .collect()
    }
}
