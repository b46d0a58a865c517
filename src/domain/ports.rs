use crate::domain::model::{Feature, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn region_code(&self) -> &str;
    fn region_name(&self) -> &str;
    /// 地址後綴，未設定時沿用區域代碼
    fn address_suffix(&self) -> &str {
        self.region_code()
    }
    fn table_name(&self) -> &str;
    fn srid(&self) -> u32;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Feature>>;
    fn transform(&self, data: Vec<Feature>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
