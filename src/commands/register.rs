//! @acp:module "Register Command"
//! @acp:summary "(Re-)register subscription filters (not implemented)"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Not implemented yet. The command only traces the project's functions.

use crate::error::Result;
use crate::session::CloudWatchSession;

use super::CommandOutcome;

/// Execute the register command
pub async fn execute_register(session: &CloudWatchSession) -> Result<CommandOutcome> {
    session.client().await?;

    let functions = &session.config().functions;
    tracing::debug!(count = functions.len(), "Project functions");
    for name in functions {
        tracing::debug!(function = %name);
    }

    Ok(CommandOutcome::NotImplemented("register"))
}
