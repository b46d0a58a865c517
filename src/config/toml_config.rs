use crate::utils::error::{EtlError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// TOML 設定檔；所有區段與欄位皆可省略，省略時使用預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub filter: FilterConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub input_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub region_code: Option<String>,
    pub region_name: Option<String>,
    pub address_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    pub table: Option<String>,
    pub srid: Option<u32>,
}

fn env_var_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EtlError::ConfigError {
            message: format!("cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ELEVATOR_INPUT})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_regex()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
input_path = "data/cgcElevators2025.geojson"

[filter]
region_code = "MB"
region_name = "Manitoba"

[load]
output_path = "out/mb.sql"
table = "mb_elevators"
srid = 4326
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.source.input_path.as_deref(),
            Some("data/cgcElevators2025.geojson")
        );
        assert_eq!(config.filter.region_code.as_deref(), Some("MB"));
        assert_eq!(config.filter.address_suffix, None);
        assert_eq!(config.load.table.as_deref(), Some("mb_elevators"));
        assert_eq!(config.load.srid, Some(4326));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.source.input_path.is_none());
        assert!(config.load.output_path.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ELEVATOR_SQL_TEST_INPUT", "/data/elevators.geojson");

        let toml_content = r#"
[source]
input_path = "${ELEVATOR_SQL_TEST_INPUT}"

[load]
output_path = "${ELEVATOR_SQL_TEST_UNDEFINED}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.source.input_path.as_deref(),
            Some("/data/elevators.geojson")
        );
        assert_eq!(
            config.load.output_path.as_deref(),
            Some("${ELEVATOR_SQL_TEST_UNDEFINED}")
        );

        std::env::remove_var("ELEVATOR_SQL_TEST_INPUT");
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[load]\nsrid = \"not a number\"").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[filter]\nregion_code = \"AB\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.filter.region_code.as_deref(), Some("AB"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = TomlConfig::from_file("/nonexistent/elevator-sql.toml").unwrap_err();
        assert!(matches!(err, EtlError::ConfigError { .. }));
    }
}
