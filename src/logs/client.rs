//! @acp:module "CloudWatch Logs Client"
//! @acp:summary "AWS SDK implementation of the paged listing calls"
//! @acp:domain cloudwatch
//! @acp:layer integration
//!
//! Maps the SDK's loosely-populated response shapes onto [`LogGroup`] and
//! [`SubscriptionFilter`]. Each call fetches one page; following the
//! continuation tokens is the caller's job.

use std::sync::Arc;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatchlogs as cloudwatchlogs;
use aws_sdk_cloudwatchlogs::config::Region;

use crate::config::ProjectConfig;
use crate::error::{CloudWatchError, Result};

use super::{LogGroup, LogsApi, LogsApiFactory, Page, SubscriptionFilter};

/// [`LogsApi`] backed by the AWS SDK
#[derive(Clone, Debug)]
pub struct AwsLogsApi {
    client: cloudwatchlogs::Client,
}

impl AwsLogsApi {
    pub fn new(client: cloudwatchlogs::Client) -> Self {
        Self { client }
    }

    /// Build a client for `region` using the default credential chain
    pub async fn for_region(region: &str) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self::new(cloudwatchlogs::Client::new(&aws_config))
    }
}

#[async_trait]
impl LogsApi for AwsLogsApi {
    async fn describe_log_groups(
        &self,
        prefix: &str,
        next_token: Option<String>,
    ) -> Result<Page<LogGroup>> {
        tracing::debug!(prefix, ?next_token, "DescribeLogGroups");

        let response = self
            .client
            .describe_log_groups()
            .log_group_name_prefix(prefix)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| CloudWatchError::api("DescribeLogGroups", e))?;

        let items = response
            .log_groups
            .unwrap_or_default()
            .into_iter()
            .map(convert_log_group)
            .collect::<Result<Vec<_>>>()?;

        Ok(Page {
            items,
            next_token: response.next_token,
        })
    }

    async fn describe_subscription_filters(
        &self,
        log_group_name: &str,
        next_token: Option<String>,
    ) -> Result<Page<SubscriptionFilter>> {
        tracing::debug!(log_group_name, ?next_token, "DescribeSubscriptionFilters");

        let response = self
            .client
            .describe_subscription_filters()
            .log_group_name(log_group_name)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| CloudWatchError::api("DescribeSubscriptionFilters", e))?;

        let items = response
            .subscription_filters
            .unwrap_or_default()
            .into_iter()
            .map(convert_subscription_filter)
            .collect();

        Ok(Page {
            items,
            next_token: response.next_token,
        })
    }
}

/// Creates an [`AwsLogsApi`] for the project's deployment region
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsLogsApiFactory;

#[async_trait]
impl LogsApiFactory for AwsLogsApiFactory {
    async fn create(&self, config: &ProjectConfig) -> Result<Arc<dyn LogsApi>> {
        tracing::debug!(region = %config.region, "Creating CloudWatch Logs client");
        Ok(Arc::new(AwsLogsApi::for_region(&config.region).await))
    }
}

fn convert_log_group(group: cloudwatchlogs::types::LogGroup) -> Result<LogGroup> {
    let name = group.log_group_name.ok_or_else(|| {
        CloudWatchError::MalformedResponse("log group without a name".to_string())
    })?;

    let creation_time_millis = group.creation_time.ok_or_else(|| {
        CloudWatchError::MalformedResponse(format!("log group {} has no creation time", name))
    })?;

    Ok(LogGroup {
        name,
        creation_time_millis,
        retention_days: group.retention_in_days,
    })
}

fn convert_subscription_filter(
    filter: cloudwatchlogs::types::SubscriptionFilter,
) -> SubscriptionFilter {
    SubscriptionFilter {
        filter_name: filter.filter_name.unwrap_or_default(),
        destination_arn: filter.destination_arn.unwrap_or_default(),
        filter_pattern: filter.filter_pattern.unwrap_or_default(),
    }
}
