//! Configuration for the `rsds` binary with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file passed with `--config`
//! 3. Environment variables: `RSDS_*` prefix, `__` between sections,
//!    `,` between list items (e.g. `RSDS_TREE__VALUES=5,3,8`)

use std::path::Path;

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};

use crate::cli::error::{CliError, CliResult};

/// Traversal orders offered for the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Recursive in-order (ascending)
    In,
    /// Queue based breadth-first
    Bft,
    /// Stack based depth-first, right subtree first
    Dft,
    /// Recursive pre-order
    Pre,
    /// Recursive post-order
    Post,
}

impl Traversal {
    fn key(self) -> &'static str {
        match self {
            Traversal::In => "in",
            Traversal::Bft => "bft",
            Traversal::Dft => "dft",
            Traversal::Pre => "pre",
            Traversal::Post => "post",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Traversal::In => "in order",
            Traversal::Bft => "breadth first",
            Traversal::Dft => "depth first (stack)",
            Traversal::Pre => "pre order",
            Traversal::Post => "post order",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeSettings {
    /// Values inserted in order; the first one becomes the root
    pub values: Vec<i64>,
    /// Traversals printed when none are given on the command line
    pub orders: Vec<Traversal>,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            values: vec![1, 8, 5, 7, 6, 3, 4, 2],
            orders: vec![Traversal::Bft, Traversal::Dft],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListSettings {
    /// Values appended at the tail
    pub values: Vec<i64>,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            values: vec![1, 2, 3, 4, 5],
        }
    }
}

/// Effective settings of the demonstration binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub tree: TreeSettings,
    pub list: ListSettings,
}

impl Settings {
    /// Load defaults, then the optional file, then `RSDS_*` from the process environment.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Same as [`Settings::load`], reading environment overrides from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> CliResult<Self> {
        let defaults = Settings::default();
        let orders: Vec<String> = defaults
            .tree
            .orders
            .iter()
            .map(|o| o.key().to_string())
            .collect();

        let mut builder = Config::builder()
            .set_default("tree.values", defaults.tree.values.clone())
            .map_err(config_err)?
            .set_default("tree.orders", orders)
            .map_err(config_err)?
            .set_default("list.values", defaults.list.values.clone())
            .map_err(config_err)?;

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(CliError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("RSDS")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("tree.values")
                .with_list_parse_key("tree.orders")
                .with_list_parse_key("list.values")
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# rsds configuration
#
# Locations (by precedence, lowest to highest):
#   File: passed with --config <FILE>
#   Env:  RSDS_* environment variables, e.g. RSDS_TREE__VALUES=5,3,8
#
# Lists given in the file or environment replace the defaults.

[tree]
# Values inserted in order, the first one is the root
# values = [1, 8, 5, 7, 6, 3, 4, 2]

# Traversals printed by `rsds tree` without --order: in, bft, dft, pre, post
# orders = ["bft", "dft"]

[list]
# Values appended to the positional list
# values = [1, 2, 3, 4, 5]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}
