//! @acp:module "Retention Command"
//! @acp:summary "Set log retention time (not implemented)"
//! @acp:domain cli
//! @acp:layer handler

use crate::error::Result;
use crate::session::CloudWatchSession;

use super::CommandOutcome;

/// Execute the retention command
pub async fn execute_retention(session: &CloudWatchSession) -> Result<CommandOutcome> {
    session.client().await?;
    Ok(CommandOutcome::NotImplemented("retention"))
}
