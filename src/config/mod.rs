//! @acp:module "Configuration"
//! @acp:summary "Project descriptor loading and identifier resolution"
//! @acp:domain cli
//! @acp:layer config
//!
//! Reads the deployment framework's project descriptor (`serverless.yml` or
//! `serverless.json`) and resolves the identifiers the CloudWatch commands
//! need: service name, stage, region and the declared function names.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CloudWatchError, Result};

/// Default descriptor file name
pub const DEFAULT_DESCRIPTOR: &str = "serverless.yml";

/// Stage used when neither descriptor nor CLI names one
pub const DEFAULT_STAGE: &str = "dev";

/// Region used when neither descriptor nor CLI names one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Resolved identifiers for one command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub service_name: String,
    pub stage: String,
    pub region: String,
    /// Function names in declaration order
    pub functions: Vec<String>,
}

/// Values given on the command line; they win over the descriptor
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub stage: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ServiceField {
    Name(String),
    Detailed { name: String },
}

#[derive(Debug, Default, Deserialize)]
struct ProviderSection {
    #[serde(default)]
    stage: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Descriptor {
    #[serde(default)]
    service: Option<ServiceField>,
    #[serde(default)]
    provider: ProviderSection,
    #[serde(default)]
    functions: Option<serde_yaml::Mapping>,
}

impl ProjectConfig {
    pub fn new(
        service_name: impl Into<String>,
        stage: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            stage: stage.into(),
            region: region.into(),
            functions: Vec::new(),
        }
    }

    pub fn with_functions(mut self, functions: Vec<String>) -> Self {
        self.functions = functions;
        self
    }

    /// Load the descriptor at `path`, JSON for `.json` files and YAML otherwise
    pub fn load<P: AsRef<Path>>(path: P, overrides: &ConfigOverrides) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CloudWatchError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json(&content, overrides)
        } else {
            Self::from_yaml(&content, overrides)
        }
    }

    pub fn from_yaml(content: &str, overrides: &ConfigOverrides) -> Result<Self> {
        let descriptor: Descriptor = serde_yaml::from_str(content)
            .map_err(|e| CloudWatchError::Config(format!("Invalid YAML descriptor: {}", e)))?;
        Ok(Self::resolve(descriptor, overrides))
    }

    pub fn from_json(content: &str, overrides: &ConfigOverrides) -> Result<Self> {
        let descriptor: Descriptor = serde_json::from_str(content)
            .map_err(|e| CloudWatchError::Config(format!("Invalid JSON descriptor: {}", e)))?;
        Ok(Self::resolve(descriptor, overrides))
    }

    fn resolve(descriptor: Descriptor, overrides: &ConfigOverrides) -> Self {
        // Missing identifiers are left for the API to reject
        let service_name = match descriptor.service {
            Some(ServiceField::Name(name)) => name,
            Some(ServiceField::Detailed { name }) => name,
            None => String::new(),
        };

        let stage = overrides
            .stage
            .clone()
            .or(descriptor.provider.stage)
            .unwrap_or_else(|| DEFAULT_STAGE.to_string());

        let region = overrides
            .region
            .clone()
            .or(descriptor.provider.region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let functions = descriptor
            .functions
            .map(|mapping| {
                mapping
                    .iter()
                    .filter_map(|(key, _)| key.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            service_name,
            stage,
            region,
            functions,
        }
    }

    /// Name prefix shared by every Lambda LogGroup of this service and stage
    pub fn log_group_prefix(&self) -> String {
        format!("/aws/lambda/{}-{}-", self.service_name, self.stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"
service: orders
provider:
  name: aws
  stage: prod
  region: eu-west-1
functions:
  create:
    handler: src/create.handler
  cancel:
    handler: src/cancel.handler
  archive:
    handler: src/archive.handler
"#;

    #[test]
    fn test_prefix_is_plain_concatenation() {
        let config = ProjectConfig::new("my-app", "prod", "us-east-1");
        assert_eq!(config.log_group_prefix(), "/aws/lambda/my-app-prod-");

        let config = ProjectConfig::new(" spaced ", "a/b", "us-east-1");
        assert_eq!(config.log_group_prefix(), "/aws/lambda/ spaced -a/b-");
    }

    #[test]
    fn test_from_yaml() {
        let config = ProjectConfig::from_yaml(DESCRIPTOR, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.service_name, "orders");
        assert_eq!(config.stage, "prod");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.functions, vec!["create", "cancel", "archive"]);
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            stage: Some("staging".to_string()),
            region: Some("ap-south-1".to_string()),
        };
        let config = ProjectConfig::from_yaml(DESCRIPTOR, &overrides).unwrap();
        assert_eq!(config.stage, "staging");
        assert_eq!(config.region, "ap-south-1");
    }

    #[test]
    fn test_defaults_when_provider_is_silent() {
        let config =
            ProjectConfig::from_yaml("service: bare\n", &ConfigOverrides::default()).unwrap();
        assert_eq!(config.stage, DEFAULT_STAGE);
        assert_eq!(config.region, DEFAULT_REGION);
        assert!(config.functions.is_empty());
    }

    #[test]
    fn test_service_mapping_form() {
        let yaml = "service:\n  name: detailed\nprovider:\n  stage: qa\n";
        let config = ProjectConfig::from_yaml(yaml, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.service_name, "detailed");
        assert_eq!(config.log_group_prefix(), "/aws/lambda/detailed-qa-");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"service": "api", "provider": {"region": "us-west-2"}, "functions": {"b": {}, "a": {}}}"#;
        let config = ProjectConfig::from_json(json, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.service_name, "api");
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.functions, vec!["b", "a"]);
    }

    #[test]
    fn test_missing_service_is_not_validated() {
        let config =
            ProjectConfig::from_yaml("provider:\n  stage: dev\n", &ConfigOverrides::default())
                .unwrap();
        assert_eq!(config.service_name, "");
        assert_eq!(config.log_group_prefix(), "/aws/lambda/-dev-");
    }

    #[test]
    fn test_parse_failures_are_config_errors() {
        let yaml = ProjectConfig::from_yaml("service: [bad\n", &ConfigOverrides::default());
        assert!(matches!(yaml, Err(CloudWatchError::Config(_))));

        let json = ProjectConfig::from_json("{\"service\": ", &ConfigOverrides::default());
        assert!(matches!(json, Err(CloudWatchError::Config(_))));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = ProjectConfig::load("does/not/exist.yml", &ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, CloudWatchError::Config(_)));
    }
}
