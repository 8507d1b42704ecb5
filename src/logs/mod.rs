//! @acp:module "CloudWatch Logs"
//! @acp:summary "Typed LogGroup/SubscriptionFilter records and the paged API seam"
//! @acp:domain cloudwatch
//! @acp:layer service
//!
//! Typed records for the two listing calls the commands use, and the
//! [`LogsApi`] seam the reporter talks to. [`client::AwsLogsApi`] is the
//! production implementation over the AWS SDK; tests substitute their own.

pub mod client;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ProjectConfig;
use crate::error::Result;

pub use client::{AwsLogsApi, AwsLogsApiFactory};

/// A LogGroup as returned by the listing API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogGroup {
    pub name: String,
    /// Creation time in milliseconds since the Unix epoch
    pub creation_time_millis: i64,
    /// `None` means events never expire
    pub retention_days: Option<i32>,
}

impl LogGroup {
    pub fn new(name: impl Into<String>, creation_time_millis: i64) -> Self {
        Self {
            name: name.into(),
            creation_time_millis,
            retention_days: None,
        }
    }

    pub fn with_retention_days(mut self, days: i32) -> Self {
        self.retention_days = Some(days);
        self
    }
}

/// A subscription filter attached to one LogGroup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionFilter {
    pub filter_name: String,
    pub destination_arn: String,
    pub filter_pattern: String,
}

impl SubscriptionFilter {
    pub fn new(
        filter_name: impl Into<String>,
        destination_arn: impl Into<String>,
        filter_pattern: impl Into<String>,
    ) -> Self {
        Self {
            filter_name: filter_name.into(),
            destination_arn: destination_arn.into(),
            filter_pattern: filter_pattern.into(),
        }
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation token; `None` on the last page
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    pub fn with_next(items: Vec<T>, next_token: impl Into<String>) -> Self {
        Self {
            items,
            next_token: Some(next_token.into()),
        }
    }
}

/// Single-page calls against the log-management service
#[async_trait]
pub trait LogsApi: Send + Sync {
    /// List LogGroups whose name starts with `prefix`
    async fn describe_log_groups(
        &self,
        prefix: &str,
        next_token: Option<String>,
    ) -> Result<Page<LogGroup>>;

    /// List the subscription filters of exactly one LogGroup
    async fn describe_subscription_filters(
        &self,
        log_group_name: &str,
        next_token: Option<String>,
    ) -> Result<Page<SubscriptionFilter>>;
}

/// Builds the API client for an invocation
#[async_trait]
pub trait LogsApiFactory: Send + Sync {
    async fn create(&self, config: &ProjectConfig) -> Result<Arc<dyn LogsApi>>;
}
