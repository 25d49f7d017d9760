use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level project configuration loaded from `.postoa.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostoaConfig {
    pub input: String,
    /// Defaults to `<input stem>.swagger.json` next to the input.
    pub output: Option<String>,
    pub openapi_version: String,
    pub api_version: String,
    pub skip_disabled_queries: bool,
    pub pretty: bool,
}

impl Default for PostoaConfig {
    fn default() -> Self {
        let options = ConvertOptions::default();
        Self {
            input: "collection.json".to_string(),
            output: None,
            openapi_version: options.openapi_version,
            api_version: options.api_version,
            skip_disabled_queries: options.skip_disabled_queries,
            pretty: options.pretty,
        }
    }
}

impl PostoaConfig {
    /// The subset of the config that affects conversion.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            openapi_version: self.openapi_version.clone(),
            api_version: self.api_version.clone(),
            skip_disabled_queries: self.skip_disabled_queries,
            pretty: self.pretty,
        }
    }

    /// Resolve the output path, deriving it from `input` when unset.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        match &self.output {
            Some(output) => PathBuf::from(output),
            None => default_output_path(input),
        }
    }
}

/// Options controlling the conversion itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Written verbatim as the document's `openapi` field.
    pub openapi_version: String,
    /// Written as `info.version`.
    pub api_version: String,
    /// Leave out query entries Postman marks as disabled.
    pub skip_disabled_queries: bool,
    pub pretty: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            openapi_version: "3.0.0".to_string(),
            api_version: String::new(),
            skip_disabled_queries: false,
            pretty: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".postoa.yaml";

/// `collection.json` becomes `collection.swagger.json` in the same directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("swagger.json")
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<PostoaConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: PostoaConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# postoa configuration
input: collection.json
# output: collection.swagger.json   # defaults to <input stem>.swagger.json

openapi_version: "3.0.0"
api_version: ""

# Postman keeps disabled query params in the export; they are converted
# unless this is set.
skip_disabled_queries: false

pretty: false
"#
}
