//! @acp:module "Release Command"
//! @acp:summary "Remove subscription filters (not implemented)"
//! @acp:domain cli
//! @acp:layer handler

use crate::error::Result;
use crate::session::CloudWatchSession;

use super::CommandOutcome;

/// Execute the release command
pub async fn execute_release(session: &CloudWatchSession) -> Result<CommandOutcome> {
    session.client().await?;
    Ok(CommandOutcome::NotImplemented("release"))
}
