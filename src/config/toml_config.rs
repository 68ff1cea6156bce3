use crate::adapters::repository::{source_for, FileSource, HttpSource};
use crate::core::query::{QuerySettings, ANY_DEGREE, DEFAULT_LIMIT, DEFAULT_MAX_LIMIT};
use crate::domain::ports::DatasetSource;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub directory: DirectoryInfo,
    pub source: Option<SourceConfig>,
    pub query: QueryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryInfo {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: SourceType,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    File,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub default_limit: usize,
    pub max_limit: usize,
    pub any_degree: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            any_degree: ANY_DEGREE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DirectoryError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DATASET_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::{Captures, Regex};
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn query_settings(&self) -> QuerySettings {
        QuerySettings {
            default_limit: self.query.default_limit,
            max_limit: self.query.max_limit,
            any_degree: self.query.any_degree.clone(),
        }
    }

    /// Builds the configured dataset source, or `None` if no `[source]` section was given.
    pub fn dataset_source(&self) -> Result<Option<Box<dyn DatasetSource>>> {
        let Some(source) = &self.source else {
            return Ok(None);
        };

        let boxed: Box<dyn DatasetSource> = match source.r#type {
            SourceType::File => {
                let path = source.path.as_ref().ok_or_else(|| DirectoryError::MissingConfigError {
                    field: "source.path".to_string(),
                })?;
                Box::new(FileSource::new(path))
            }
            SourceType::Http => {
                let endpoint =
                    source.endpoint.as_ref().ok_or_else(|| DirectoryError::MissingConfigError {
                        field: "source.endpoint".to_string(),
                    })?;
                let mut http = HttpSource::new(endpoint.clone());
                if let Some(secs) = source.timeout_seconds {
                    http = http.with_timeout(Duration::from_secs(secs));
                }
                Box::new(http)
            }
        };
        Ok(Some(boxed))
    }

    /// Picks the dataset source: an explicit `--data` location first, then `[source]`,
    /// then `default_dataset` if that file exists. Relative paths resolve against the
    /// current working directory.
    pub fn resolve_source(
        &self,
        cli_data: Option<&str>,
        default_dataset: &Path,
    ) -> Result<Box<dyn DatasetSource>> {
        if let Some(location) = cli_data {
            return Ok(source_for(location));
        }
        if let Some(source) = self.dataset_source()? {
            return Ok(source);
        }
        if default_dataset.is_file() {
            tracing::debug!("Using default dataset: {}", default_dataset.display());
            return Ok(Box::new(FileSource::new(default_dataset)));
        }
        Err(DirectoryError::MissingConfigError {
            field: format!(
                "--data or [source] (default {} not found in {})",
                default_dataset.display(),
                std::env::current_dir()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|_| "the working directory".to_string())
            ),
        })
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        if let Some(source) = &self.source {
            match source.r#type {
                SourceType::File => {
                    if let Some(path) = &source.path {
                        validate_path("source.path", path)?;
                    }
                }
                SourceType::Http => {
                    if let Some(endpoint) = &source.endpoint {
                        validate_url("source.endpoint", endpoint)?;
                    }
                }
            }
            if let Some(secs) = source.timeout_seconds {
                validate_range("source.timeout_seconds", secs, 1, 300)?;
            }
        }

        validate_range("query.max_limit", self.query.max_limit, 1, 10_000)?;
        validate_range(
            "query.default_limit",
            self.query.default_limit,
            1,
            self.query.max_limit,
        )?;
        validate_non_empty_string("query.any_degree", &self.query.any_degree)?;

        Ok(())
    }
}
