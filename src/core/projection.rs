use crate::core::{ElevatorRecord, Feature};
use crate::domain::services::parse_capacity;
use crate::utils::error::{EtlError, Result};

pub const REGION_KEY: &str = "PR";
pub const STATION_KEY: &str = "Station";
pub const LICENSEE_KEY: &str = "Licensee";
pub const CAPACITY_KEY: &str = "Capacity_tonne";
pub const ELEVATOR_TYPE_KEY: &str = "Elevator_type";
pub const RAILWAY_KEY: &str = "Railway";
pub const CAR_SPOTS_KEY: &str = "Car_Spot_Open";

pub const DEFAULT_ELEVATOR_TYPE: &str = "Primary";
pub const DEFAULT_RAILWAY: &str = "NO";
pub const DEFAULT_CAR_SPOTS: &str = "< 25";

/// 屬性值轉文字；null、陣列與物件視為缺漏
fn text_property(feature: &Feature, key: &str) -> Option<String> {
    match feature.property(key)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_or_default(feature: &Feature, key: &str, default: &str) -> String {
    text_property(feature, key)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn in_region(feature: &Feature, region_code: &str) -> bool {
    matches!(
        feature.property(REGION_KEY),
        Some(serde_json::Value::String(code)) if code == region_code
    )
}

fn capacity_of(feature: &Feature, name: &str) -> i64 {
    match feature.property(CAPACITY_KEY) {
        None | Some(serde_json::Value::Null) => 0,
        Some(raw) => parse_capacity(raw).unwrap_or_else(|| {
            tracing::warn!(
                "⚠️ Unusable capacity {} for '{}', using 0",
                raw,
                name
            );
            0
        }),
    }
}

fn project(index: usize, feature: &Feature) -> Result<ElevatorRecord> {
    let name = text_property(feature, STATION_KEY).unwrap_or_default();

    let (longitude, latitude) = feature.lon_lat().ok_or_else(|| {
        EtlError::malformed(format!(
            "feature #{} ('{}') has no [longitude, latitude] coordinate pair",
            index, name
        ))
    })?;

    let capacity_tonnes = capacity_of(feature, &name);

    Ok(ElevatorRecord {
        company: text_property(feature, LICENSEE_KEY).unwrap_or_default(),
        longitude,
        latitude,
        capacity_tonnes,
        elevator_type: text_or_default(feature, ELEVATOR_TYPE_KEY, DEFAULT_ELEVATOR_TYPE),
        railway: text_or_default(feature, RAILWAY_KEY, DEFAULT_RAILWAY),
        car_spots: text_or_default(feature, CAR_SPOTS_KEY, DEFAULT_CAR_SPOTS),
        name,
    })
}

/// 篩選出指定區域的 feature 並投影成記錄，保留輸入順序
pub fn project_region(features: &[Feature], region_code: &str) -> Result<Vec<ElevatorRecord>> {
    features
        .iter()
        .enumerate()
        .filter(|(_, feature)| in_region(feature, region_code))
        .map(|(index, feature)| project(index, feature))
        .collect()
}

/// 依名稱排序（大小寫敏感、穩定排序）
pub fn sort_by_name(records: &mut [ElevatorRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}
