//! @acp:module "Session"
//! @acp:summary "Per-invocation config and lazily created API client"
//! @acp:domain cloudwatch
//! @acp:layer service
//!
//! Holds the resolved [`ProjectConfig`] and creates the API client on first
//! use. The client is shared read-only by every operation of the invocation.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::logs::{AwsLogsApiFactory, LogsApi, LogsApiFactory};

pub struct CloudWatchSession {
    config: ProjectConfig,
    factory: Box<dyn LogsApiFactory>,
    client: OnceCell<Arc<dyn LogsApi>>,
}

impl CloudWatchSession {
    pub fn new(config: ProjectConfig, factory: Box<dyn LogsApiFactory>) -> Self {
        Self {
            config,
            factory,
            client: OnceCell::new(),
        }
    }

    /// Session backed by the AWS SDK
    pub fn aws(config: ProjectConfig) -> Self {
        Self::new(config, Box::new(AwsLogsApiFactory))
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// The API client, created by the factory on the first call
    pub async fn client(&self) -> Result<Arc<dyn LogsApi>> {
        let client = self
            .client
            .get_or_try_init(|| self.factory.create(&self.config))
            .await?;
        Ok(Arc::clone(client))
    }
}
