use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting ETL process...");

        // Extract
        let features = self.pipeline.extract()?;
        tracing::info!("📥 Extracted {} features", features.len());

        // Transform
        let result = self.pipeline.transform(features)?;
        let record_count = result.records.len();
        tracing::info!("🔄 Transformed {} elevator records", record_count);

        // Load
        let output_path = self.pipeline.load(result)?;
        tracing::info!("💾 SQL script saved to: {}", output_path);

        Ok(RunSummary {
            record_count,
            output_path,
        })
    }
}
