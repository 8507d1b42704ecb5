//! @acp:module "List Command"
//! @acp:summary "Report the project's LogGroups and subscription filters"
//! @acp:domain cli
//! @acp:layer handler

use crate::error::Result;
use crate::report::{LogGroupReporter, ReportContext, ReportSink};
use crate::session::CloudWatchSession;

use super::CommandOutcome;

/// Execute the list command
pub async fn execute_list(
    session: &CloudWatchSession,
    sink: &mut dyn ReportSink,
) -> Result<CommandOutcome> {
    let client = session.client().await?;
    let context = ReportContext::from_config(session.config());
    tracing::debug!(prefix = %context.service_prefix, "Listing log groups");

    LogGroupReporter::new(client.as_ref(), context)
        .generate_report(sink)
        .await?;

    Ok(CommandOutcome::Completed)
}
