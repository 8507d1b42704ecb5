//! Scripted CloudWatch Logs API for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sls_cloudwatch::{
    CloudWatchError, LogGroup, LogsApi, LogsApiFactory, Page, ProjectConfig, Result,
    SubscriptionFilter,
};

/// Split `chunks` into pages whose tokens are the index of the next page
pub fn paged<T: Clone>(chunks: Vec<Vec<T>>) -> Vec<Page<T>> {
    let count = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, items)| {
            if i + 1 < count {
                Page::with_next(items, (i + 1).to_string())
            } else {
                Page::last(items)
            }
        })
        .collect()
}

pub fn throttled() -> CloudWatchError {
    CloudWatchError::api(
        "DescribeLogGroups",
        std::io::Error::new(std::io::ErrorKind::Other, "Rate exceeded"),
    )
}

#[derive(Default)]
pub struct MockLogsApi {
    pub group_pages: Vec<Page<LogGroup>>,
    pub filter_pages: HashMap<String, Vec<Page<SubscriptionFilter>>>,
    pub fail_groups: bool,
    pub fail_filters_for: Option<String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockLogsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups(mut self, pages: Vec<Page<LogGroup>>) -> Self {
        self.group_pages = pages;
        self
    }

    pub fn with_filters(mut self, group: &str, pages: Vec<Page<SubscriptionFilter>>) -> Self {
        self.filter_pages.insert(group.to_string(), pages);
        self
    }

    pub fn failing_groups(mut self) -> Self {
        self.fail_groups = true;
        self
    }

    pub fn failing_filters_for(mut self, group: &str) -> Self {
        self.fail_filters_for = Some(group.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn page_at<T: Clone>(pages: &[Page<T>], token: Option<&str>) -> Page<T> {
    let index = token.map(|t| t.parse::<usize>().unwrap()).unwrap_or(0);
    pages
        .get(index)
        .cloned()
        .unwrap_or_else(|| Page::last(Vec::new()))
}

#[async_trait]
impl LogsApi for MockLogsApi {
    async fn describe_log_groups(
        &self,
        prefix: &str,
        next_token: Option<String>,
    ) -> Result<Page<LogGroup>> {
        self.record(format!(
            "groups {} {}",
            prefix,
            next_token.as_deref().unwrap_or("-")
        ));
        if self.fail_groups {
            return Err(throttled());
        }
        Ok(page_at(&self.group_pages, next_token.as_deref()))
    }

    async fn describe_subscription_filters(
        &self,
        log_group_name: &str,
        next_token: Option<String>,
    ) -> Result<Page<SubscriptionFilter>> {
        self.record(format!(
            "filters {} {}",
            log_group_name,
            next_token.as_deref().unwrap_or("-")
        ));
        if self.fail_filters_for.as_deref() == Some(log_group_name) {
            return Err(CloudWatchError::api(
                "DescribeSubscriptionFilters",
                std::io::Error::new(std::io::ErrorKind::Other, "ResourceNotFoundException"),
            ));
        }
        let pages = self
            .filter_pages
            .get(log_group_name)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        Ok(page_at(pages, next_token.as_deref()))
    }
}

/// Hands out one shared [`MockLogsApi`] and counts how often it was asked
pub struct MockFactory {
    pub api: Arc<MockLogsApi>,
    pub created: Arc<AtomicUsize>,
    pub fail: bool,
}

impl MockFactory {
    pub fn new(api: Arc<MockLogsApi>) -> Self {
        Self {
            api,
            created: Arc::new(AtomicUsize::new(0)),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Arc::new(MockLogsApi::new()))
        }
    }
}

#[async_trait]
impl LogsApiFactory for MockFactory {
    async fn create(&self, _config: &ProjectConfig) -> Result<Arc<dyn LogsApi>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CloudWatchError::Config("missing region".to_string()));
        }
        let api: Arc<dyn LogsApi> = self.api.clone();
        Ok(api)
    }
}
