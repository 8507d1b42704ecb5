//! @acp:module "LogGroup Report"
//! @acp:summary "Enumerate LogGroups and subscription filters into a text report"
//! @acp:domain cloudwatch
//! @acp:layer service
//!
//! Enumerates the LogGroups of a service/stage and their subscription
//! filters, and writes a human-readable report to a [`ReportSink`].
//!
//! ```text
//! AWS CloudWatch LogGroups
//! * LogGroup /aws/lambda/orders-prod-create
//!   Created 2024-01-15T09:30:00.000Z
//!   Retention days: 14
//!   + Filter: ship-to-es
//!     Destination: arn:aws:lambda:...:function:shipper
//!     Pattern: [timestamp, level=ERROR, ...]
//!
//! ```

use std::collections::HashSet;
use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::ProjectConfig;
use crate::error::{CloudWatchError, Result};
use crate::logs::{LogGroup, LogsApi, Page, SubscriptionFilter};

/// First line of every report
pub const REPORT_HEADER: &str = "AWS CloudWatch LogGroups";

/// Rendering of a LogGroup without a retention setting
pub const NEVER_EXPIRE: &str = "never expire";

/// Line-oriented output of a report
pub trait ReportSink {
    fn line(&mut self, line: &str);
}

/// Writes report lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn line(&mut self, line: &str) {
        println!("{}", line);
    }
}

impl ReportSink for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Per-invocation report parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    pub service_prefix: String,
}

impl ReportContext {
    pub fn new(service_prefix: impl Into<String>) -> Self {
        Self {
            service_prefix: service_prefix.into(),
        }
    }

    pub fn from_config(config: &ProjectConfig) -> Self {
        Self::new(config.log_group_prefix())
    }
}

/// Lists LogGroups and subscription filters and renders the report
pub struct LogGroupReporter<'a> {
    api: &'a dyn LogsApi,
    context: ReportContext,
}

impl<'a> LogGroupReporter<'a> {
    pub fn new(api: &'a dyn LogsApi, context: ReportContext) -> Self {
        Self { api, context }
    }

    /// All LogGroups whose name starts with `prefix`, in API order
    pub async fn list_log_groups(&self, prefix: &str) -> Result<Vec<LogGroup>> {
        let api = self.api;
        collect_pages(move |token| api.describe_log_groups(prefix, token)).await
    }

    /// All subscription filters of the named LogGroup, in API order
    pub async fn list_subscription_filters(
        &self,
        log_group_name: &str,
    ) -> Result<Vec<SubscriptionFilter>> {
        let api = self.api;
        collect_pages(move |token| api.describe_subscription_filters(log_group_name, token)).await
    }

    /// Write the report for the context's prefix to `sink`.
    ///
    /// The first failing API call aborts the report; lines already written
    /// stay written.
    pub async fn generate_report(&self, sink: &mut dyn ReportSink) -> Result<()> {
        sink.line(REPORT_HEADER);

        let groups = self.list_log_groups(&self.context.service_prefix).await?;
        tracing::debug!(
            prefix = %self.context.service_prefix,
            count = groups.len(),
            "Listed log groups"
        );

        for group in &groups {
            for line in render_group(group)? {
                sink.line(&line);
            }

            for filter in self.list_subscription_filters(&group.name).await? {
                for line in render_filter(&filter) {
                    sink.line(&line);
                }
            }

            sink.line("");
        }

        Ok(())
    }
}

/// Follow continuation tokens until the last page, concatenating items.
///
/// Stops at the first token that was already requested, so a cycle of any
/// length ends after each page has been fetched once.
async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(token.take()).await?;
        pages += 1;
        items.extend(page.items);

        match page.next_token {
            Some(next) if !seen.insert(next.clone()) => {
                tracing::warn!(token = %next, "API returned an already requested continuation token");
                break;
            }
            Some(next) => token = Some(next),
            None => break,
        }
    }

    tracing::debug!(pages, items = items.len(), "Pagination finished");
    Ok(items)
}

/// Creation time as ISO-8601 UTC with millisecond precision
pub fn format_creation_time(millis: i64) -> Result<String> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|time| time.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or(CloudWatchError::InvalidTimestamp(millis))
}

pub fn format_retention(retention_days: Option<i32>) -> String {
    match retention_days {
        Some(days) => days.to_string(),
        None => NEVER_EXPIRE.to_string(),
    }
}

fn render_group(group: &LogGroup) -> Result<[String; 3]> {
    Ok([
        format!("* LogGroup {}", group.name),
        format!("  Created {}", format_creation_time(group.creation_time_millis)?),
        format!("  Retention days: {}", format_retention(group.retention_days)),
    ])
}

fn render_filter(filter: &SubscriptionFilter) -> [String; 3] {
    [
        format!("  + Filter: {}", filter.filter_name),
        format!("    Destination: {}", filter.destination_arn),
        format!("    Pattern: {}", filter.filter_pattern),
    ]
}
