pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INPUT_PATH: &str = "cgcElevators2025.geojson";
pub const DEFAULT_OUTPUT_PATH: &str = "import_elevators_complete.sql";
pub const DEFAULT_REGION_CODE: &str = "SK";
pub const DEFAULT_REGION_NAME: &str = "Saskatchewan";
pub const DEFAULT_TABLE: &str = "elevators";
pub const DEFAULT_SRID: u32 = 4326;

/// 最終生效的設定：預設值 ← TOML ← 命令列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    pub input_path: String,
    pub output_path: String,
    pub region_code: String,
    pub region_name: String,
    pub address_suffix: Option<String>,
    pub table: String,
    pub srid: u32,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            region_code: DEFAULT_REGION_CODE.to_string(),
            region_name: DEFAULT_REGION_NAME.to_string(),
            address_suffix: None,
            table: DEFAULT_TABLE.to_string(),
            srid: DEFAULT_SRID,
        }
    }
}

impl ImportSettings {
    pub fn apply_toml(mut self, config: TomlConfig) -> Self {
        if let Some(input_path) = config.source.input_path {
            self.input_path = input_path;
        }
        if let Some(region_code) = config.filter.region_code {
            self.region_code = region_code;
        }
        if let Some(region_name) = config.filter.region_name {
            self.region_name = region_name;
        }
        if config.filter.address_suffix.is_some() {
            self.address_suffix = config.filter.address_suffix;
        }
        if let Some(output_path) = config.load.output_path {
            self.output_path = output_path;
        }
        if let Some(table) = config.load.table {
            self.table = table;
        }
        if let Some(srid) = config.load.srid {
            self.srid = srid;
        }
        self
    }
}

impl ConfigProvider for ImportSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn region_code(&self) -> &str {
        &self.region_code
    }

    fn region_name(&self) -> &str {
        &self.region_name
    }

    fn address_suffix(&self) -> &str {
        self.address_suffix.as_deref().unwrap_or(&self.region_code)
    }

    fn table_name(&self) -> &str {
        &self.table
    }

    fn srid(&self) -> u32 {
        self.srid
    }
}

impl Validate for ImportSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_file_extension("input_path", &self.input_path, &["geojson", "json"])?;
        validation::validate_path("output_path", &self.output_path)?;

        validation::validate_non_empty_string("region_code", &self.region_code)?;
        validation::validate_no_quotes("region_code", &self.region_code)?;

        // 區域名稱只出現在註解內，不可換行
        if self.region_name.contains('\n') {
            return Err(crate::utils::error::EtlError::InvalidConfigValueError {
                field: "region_name".to_string(),
                value: self.region_name.clone(),
                reason: "Value cannot contain line breaks".to_string(),
            });
        }

        validation::validate_sql_identifier("table", &self.table)?;
        validation::validate_range("srid", self.srid, 1, 998_999)?;

        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "elevator-sql")]
#[command(about = "Generate a PostGIS import script from grain elevator GeoJSON")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// GeoJSON feature collection to read
    #[arg(short, long)]
    pub input: Option<String>,

    /// SQL script to write (overwritten)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Region code matched against the PR property
    #[arg(long)]
    pub region: Option<String>,

    /// Region name used in the script comments
    #[arg(long)]
    pub region_name: Option<String>,

    /// Suffix appended to derived addresses (defaults to the region code)
    #[arg(long)]
    pub address_suffix: Option<String>,

    /// Target table name
    #[arg(long)]
    pub table: Option<String>,

    /// Spatial reference identifier for the location column
    #[arg(long)]
    pub srid: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入 TOML（若有指定）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<ImportSettings> {
        let mut settings = ImportSettings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            settings = settings.apply_toml(TomlConfig::from_file(path)?);
        }

        if let Some(input) = &self.input {
            settings.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }
        if let Some(region) = &self.region {
            settings.region_code = region.clone();
        }
        if let Some(region_name) = &self.region_name {
            settings.region_name = region_name.clone();
        }
        if let Some(suffix) = &self.address_suffix {
            settings.address_suffix = Some(suffix.clone());
        }
        if let Some(table) = &self.table {
            settings.table = table.clone();
        }
        if let Some(srid) = self.srid {
            settings.srid = srid;
        }

        Ok(settings)
    }
}
