use glbot_models::CredentialRecord;

use crate::{CoreContext, Result};

/// Store a GitLab API token for a chat login.
///
/// A repeat call from the same login replaces the stored key in place;
/// records are never deleted.
pub struct SetToken;

impl SetToken {
    #[tracing::instrument(skip(self, ctx, key))]
    pub async fn run(&self, ctx: &CoreContext<'_>, login: &str, key: &str) -> Result<CredentialRecord> {
        let record = CredentialRecord {
            login: login.into(),
            key: key.into(),
        };

        Ok(ctx.db_service.credentials_upsert(record).await?)
    }
}
