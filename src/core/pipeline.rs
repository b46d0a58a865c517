use crate::core::projection::{project_region, sort_by_name};
use crate::core::sql::SqlScriptBuilder;
use crate::core::{ConfigProvider, Feature, FeatureCollection, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};

/// GeoJSON → SQL 匯入腳本的 Pipeline
pub struct ElevatorPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ElevatorPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn script_builder(&self) -> SqlScriptBuilder {
        SqlScriptBuilder {
            table: self.config.table_name().to_string(),
            region_name: self.config.region_name().to_string(),
            address_suffix: self.config.address_suffix().to_string(),
            srid: self.config.srid(),
        }
    }
}

/// 解析 FeatureCollection；結構不符（例如缺 features）歸類為 MalformedInput
pub fn parse_feature_collection(data: &[u8]) -> Result<FeatureCollection> {
    serde_json::from_slice(data).map_err(|e| match e.classify() {
        serde_json::error::Category::Data => EtlError::malformed(e.to_string()),
        _ => EtlError::SerializationError(e),
    })
}

impl<S: Storage, C: ConfigProvider> Pipeline for ElevatorPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Feature>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading feature collection from: {}", input_path);

        let data = self.storage.read_file(input_path)?;
        tracing::debug!("Read {} bytes", data.len());

        let collection = parse_feature_collection(&data)?;
        Ok(collection.features)
    }

    fn transform(&self, data: Vec<Feature>) -> Result<TransformResult> {
        let region_code = self.config.region_code();

        let mut records = project_region(&data, region_code)?;
        tracing::debug!(
            "{} of {} features matched region '{}'",
            records.len(),
            data.len(),
            region_code
        );

        sort_by_name(&mut records);

        let sql_script = self.script_builder().render_script(&records);

        Ok(TransformResult {
            records,
            sql_script,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        tracing::debug!(
            "Writing SQL script ({} bytes) to storage",
            result.sql_script.len()
        );
        self.storage
            .write_file(&output_path, result.sql_script.as_bytes())?;

        tracing::debug!("SQL script saved successfully");
        Ok(output_path)
    }
}
