use crate::config::{JoinOptions, PathOptions};
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{validate_distinct, validate_non_empty_string, Validate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static ENV_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub margin_marker: String,
    pub path: PathOptions,
    pub join: JoinOptions,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            margin_marker: "|".to_string(),
            path: PathOptions::default(),
            join: JoinOptions::default(),
        }
    }
}

impl KitConfig {
    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let config: Self = toml::from_str(&processed_content).map_err(|e| KitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// 替換環境變數 (例如 ${SEPARATOR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| KitError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }
}

impl Validate for KitConfig {
    fn validate(&self) -> Result<()> {
        validate_distinct(
            "path.directory_separator",
            self.path.directory_separator,
            self.path.extension_separator,
        )?;
        validate_non_empty_string("margin_marker", &self.margin_marker)?;
        Ok(())
    }
}
