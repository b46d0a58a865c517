pub mod etl;
pub mod pipeline;
pub mod projection;
pub mod sql;

pub use crate::domain::model::{
    ElevatorRecord, Feature, FeatureCollection, GrainType, RunSummary, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
