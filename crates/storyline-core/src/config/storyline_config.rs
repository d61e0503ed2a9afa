//! Top-level Storyline configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{
    ClusteringConfig, DateStyle, EmbeddingConfig, ObservabilityConfig, TemporalConfig,
    TimelineConfig,
};
use crate::errors::ConfigError;
use crate::models::DateOrder;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`STORYLINE_*`)
/// 3. Config file (explicit path, or `storyline.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorylineConfig {
    pub temporal: TemporalConfig,
    pub embedding: EmbeddingConfig,
    pub clustering: ClusteringConfig,
    pub timeline: TimelineConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub date_order: Option<DateOrder>,
    pub selection_epsilon: Option<f64>,
    pub embedding_provider: Option<String>,
    pub model_path: Option<String>,
    pub tokenizer_path: Option<String>,
    pub date_style: Option<DateStyle>,
    pub log_level: Option<String>,
}

impl StorylineConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `storyline.toml` in
    /// the working directory is used when present.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let local = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if local.exists() {
                    Self::from_file(local)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `STORYLINE_*` environment variables.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, keyed by full variable name.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{}{suffix}", defaults::ENV_PREFIX));

        if let Some(order) = var("DATE_ORDER") {
            self.temporal.date_order =
                order
                    .parse()
                    .map_err(|message| ConfigError::ValidationFailed {
                        field: "STORYLINE_DATE_ORDER".to_string(),
                        message,
                    })?;
        }
        if let Some(provider) = var("EMBEDDING_PROVIDER") {
            self.embedding.provider = provider;
        }
        if let Some(path) = var("MODEL_PATH") {
            self.embedding.model_path = Some(path);
        }
        if let Some(path) = var("TOKENIZER_PATH") {
            self.embedding.tokenizer_path = Some(path);
        }
        if let Some(eps) = var("CLUSTER_EPSILON") {
            self.clustering.selection_epsilon =
                eps.parse().map_err(|_| ConfigError::ValidationFailed {
                    field: "STORYLINE_CLUSTER_EPSILON".to_string(),
                    message: format!("'{eps}' is not a number"),
                })?;
        }
        if let Some(style) = var("DATE_STYLE") {
            self.timeline.date_style =
                style
                    .parse()
                    .map_err(|message| ConfigError::ValidationFailed {
                        field: "STORYLINE_DATE_STYLE".to_string(),
                        message,
                    })?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.observability.log_level = level;
        }
        Ok(())
    }

    /// Apply CLI flags, the highest-priority layer.
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(order) = cli.date_order {
            self.temporal.date_order = order;
        }
        if let Some(eps) = cli.selection_epsilon {
            self.clustering.selection_epsilon = eps;
        }
        if let Some(ref provider) = cli.embedding_provider {
            self.embedding.provider = provider.clone();
        }
        if let Some(ref path) = cli.model_path {
            self.embedding.model_path = Some(path.clone());
        }
        if let Some(ref path) = cli.tokenizer_path {
            self.embedding.tokenizer_path = Some(path.clone());
        }
        if let Some(style) = cli.date_style {
            self.timeline.date_style = style;
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clustering.min_cluster_size < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.min_cluster_size".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        if self.clustering.min_samples == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.min_samples".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let eps = self.clustering.selection_epsilon;
        if !eps.is_finite() || eps < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.selection_epsilon".to_string(),
                message: "must be a finite, non-negative distance".to_string(),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.embedding.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.embedding.provider == "onnx" && self.embedding.model_path.is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.model_path".to_string(),
                message: "required when provider is \"onnx\"".to_string(),
            });
        }
        if self.embedding.provider == "onnx" && self.embedding.tokenizer_path.is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.tokenizer_path".to_string(),
                message: "required when provider is \"onnx\"".to_string(),
            });
        }
        Ok(())
    }
}
