use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::operation::OperationKind;
use crate::selection::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};

pub const DEFAULT_CONFIG_FILE: &str = "gql-generator.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub generate_queries: bool,
    pub generate_mutations: bool,
    pub generate_subscriptions: bool,
    pub max_recursion_depth: usize,
    pub strip_aws_directives: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_queries: true,
            generate_mutations: true,
            generate_subscriptions: false,
            max_recursion_depth: DEFAULT_MAX_DEPTH,
            strip_aws_directives: true,
        }
    }
}

impl GeneratorConfig {
    pub fn enabled(&self, kind: OperationKind) -> bool {
        match kind {
            OperationKind::Query => self.generate_queries,
            OperationKind::Mutation => self.generate_mutations,
            OperationKind::Subscription => self.generate_subscriptions,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_recursion_depth > MAX_DEPTH_LIMIT {
            anyhow::bail!(
                "maxRecursionDepth {} exceeds the limit of {MAX_DEPTH_LIMIT}",
                self.max_recursion_depth
            );
        }
        Ok(())
    }
}

/// `gql-generator.json` in the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

pub fn load_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    if s.trim().is_empty() {
        anyhow::bail!("empty config file {}", path.display());
    }
    let config: GeneratorConfig = serde_json::from_str(&s)
        .with_context(|| format!("invalid config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Loads `explicit` when given; otherwise the default file if it exists;
/// otherwise built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let path = default_config_path();
            if path.is_file() {
                tracing::debug!("using config {}", path.display());
                load_config(&path)
            } else {
                Ok(GeneratorConfig::default())
            }
        }
    }
}
