use serde::Deserialize;

/// GeoJSON FeatureCollection，只解析會用到的欄位
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl Feature {
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref().and_then(|props| props.get(key))
    }

    /// 取出 (經度, 緯度)；座標缺漏或不是數字時回傳 None
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        let coords = self.geometry.as_ref()?.coordinates.as_array()?;
        let lon = coords.first()?.as_f64()?;
        let lat = coords.get(1)?.as_f64()?;
        Some((lon, lat))
    }
}

/// 投影後的穀倉記錄，建立後不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorRecord {
    pub name: String,
    pub company: String,
    pub longitude: f64,
    pub latitude: f64,
    pub capacity_tonnes: i64,
    pub elevator_type: String,
    pub railway: String,
    pub car_spots: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrainType {
    Wheat,
    Canola,
    Barley,
    Oats,
    Peas,
    Lentils,
    Chickpeas,
}

impl GrainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrainType::Wheat => "Wheat",
            GrainType::Canola => "Canola",
            GrainType::Barley => "Barley",
            GrainType::Oats => "Oats",
            GrainType::Peas => "Peas",
            GrainType::Lentils => "Lentils",
            GrainType::Chickpeas => "Chickpeas",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<ElevatorRecord>,
    pub sql_script: String,
}

/// 一次執行的結果摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub record_count: usize,
    pub output_path: String,
}

impl RunSummary {
    /// 成功時輸出到 stdout 的兩行摘要
    pub fn console_lines(&self, region_name: &str) -> [String; 2] {
        [
            format!(
                "Generated SQL import script with {} {} elevators",
                self.record_count, region_name
            ),
            format!("Output: {}", self.output_path),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_lines() {
        let summary = RunSummary {
            record_count: 412,
            output_path: "import_elevators_complete.sql".to_string(),
        };

        assert_eq!(
            summary.console_lines("Saskatchewan"),
            [
                "Generated SQL import script with 412 Saskatchewan elevators".to_string(),
                "Output: import_elevators_complete.sql".to_string(),
            ]
        );
    }
}
