#![forbid(unsafe_code)]

//! @acp:module "sls-cloudwatch Library"
//! @acp:summary "Inspect and manage CloudWatch LogGroups of a serverless project"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # sls-cloudwatch
//!
//! Inspect and manage the AWS CloudWatch LogGroups of a deployed serverless
//! project.
//!
//! ## Commands
//!
//! - **list**: report every LogGroup of the project's service/stage together
//!   with its subscription filters
//! - **register**, **release**, **retention**: reserved, not implemented yet
//!
//! ## Example
//!
//! ```rust,no_run
//! use sls_cloudwatch::{CloudWatchSession, ConfigOverrides, ProjectConfig};
//! use sls_cloudwatch::commands::execute_list;
//! use sls_cloudwatch::report::ConsoleSink;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ProjectConfig::load("serverless.yml", &ConfigOverrides::default())?;
//!     let session = CloudWatchSession::aws(config);
//!
//!     execute_list(&session, &mut ConsoleSink).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod logs;
pub mod report;
pub mod session;

// Re-exports
pub use commands::CommandOutcome;
pub use config::{ConfigOverrides, ProjectConfig};
pub use error::{CloudWatchError, Result};
pub use logs::{LogGroup, LogsApi, LogsApiFactory, Page, SubscriptionFilter};
pub use report::{LogGroupReporter, ReportContext, ReportSink};
pub use session::CloudWatchSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
