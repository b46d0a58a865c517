use crate::domain::model::{ElevatorRecord, GrainType};

const PULSE_GRAINS: &[GrainType] = &[GrainType::Peas, GrainType::Lentils, GrainType::Chickpeas];
const MALT_GRAINS: &[GrainType] = &[GrainType::Barley, GrainType::Wheat];
const CANOLA_CRUSHER_GRAINS: &[GrainType] = &[GrainType::Canola];
const OAT_MILL_GRAINS: &[GrainType] = &[GrainType::Oats, GrainType::Wheat];
const PROCESS_GRAINS: &[GrainType] = &[GrainType::Wheat, GrainType::Canola];
const PRIMARY_GRAINS: &[GrainType] = &[GrainType::Wheat, GrainType::Canola, GrainType::Barley];

/// 依公司、站名與穀倉類型推估處理的穀物，第一個符合的規則生效
pub fn classify_grains(record: &ElevatorRecord) -> &'static [GrainType] {
    let company = record.company.to_lowercase();
    let name = record.name.to_lowercase();

    if company.contains("pulse") || company.contains("alliance") {
        return PULSE_GRAINS;
    }
    if company.contains("malt") {
        return MALT_GRAINS;
    }
    if record.elevator_type == "Process" {
        // 加工廠通常只專精一兩種作物
        if name.contains("canola") || company.contains("canola") || company.contains("bunge") {
            return CANOLA_CRUSHER_GRAINS;
        }
        if company.contains("oat") || name.contains("oat") {
            return OAT_MILL_GRAINS;
        }
        return PROCESS_GRAINS;
    }

    PRIMARY_GRAINS
}

/// 把容量欄位轉成非負整數噸數；無法使用的值回傳 None
pub fn parse_capacity(value: &serde_json::Value) -> Option<i64> {
    let tonnes = match value {
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(whole) => return (whole >= 0).then_some(whole),
            None => n.as_f64()?,
        },
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    // 超出 i64 範圍的值視同無法使用，避免 `as` 飽和成 i64::MAX
    if !tonnes.is_finite() || tonnes < 0.0 || tonnes >= i64::MAX as f64 {
        return None;
    }

    Some(tonnes.trunc() as i64)
}

/// 站名 " - " 前的部分視為城鎮名稱
pub fn derive_address(name: &str, suffix: &str) -> String {
    let city = name.split_once(" - ").map_or(name, |(city, _)| city);
    format!("{}, {}", city, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, company: &str, elevator_type: &str) -> ElevatorRecord {
        ElevatorRecord {
            name: name.to_string(),
            company: company.to_string(),
            longitude: -104.6,
            latitude: 50.45,
            capacity_tonnes: 0,
            elevator_type: elevator_type.to_string(),
            railway: "NO".to_string(),
            car_spots: "< 25".to_string(),
        }
    }

    #[test]
    fn test_pulse_company_wins_regardless_of_type() {
        for elevator_type in ["Primary", "Process", "Terminal"] {
            let grains = classify_grains(&record("Canola Town", "Prairie Pulse Inc", elevator_type));
            assert_eq!(grains, &[GrainType::Peas, GrainType::Lentils, GrainType::Chickpeas]);
        }
        let grains = classify_grains(&record("Regina", "AGT ALLIANCE Grain", "Primary"));
        assert_eq!(grains, PULSE_GRAINS);
    }

    #[test]
    fn test_malt_company() {
        let grains = classify_grains(&record("Biggar", "Prairie Malt Ltd", "Process"));
        assert_eq!(grains, &[GrainType::Barley, GrainType::Wheat]);
    }

    #[test]
    fn test_process_elevators() {
        assert_eq!(
            classify_grains(&record("Yorkton Canola Crush", "Richardson", "Process")),
            &[GrainType::Canola]
        );
        assert_eq!(
            classify_grains(&record("Nipawin", "Bunge Canada", "Process")),
            &[GrainType::Canola]
        );
        assert_eq!(
            classify_grains(&record("Nipawin", "Canola Crushers Co", "Process")),
            &[GrainType::Canola]
        );
        assert_eq!(
            classify_grains(&record("Martensville", "Grain Millers OATS", "Process")),
            &[GrainType::Oats, GrainType::Wheat]
        );
        assert_eq!(
            classify_grains(&record("Oatley", "Foo", "Process")),
            &[GrainType::Oats, GrainType::Wheat]
        );
        assert_eq!(
            classify_grains(&record("Saskatoon", "Richardson", "Process")),
            &[GrainType::Wheat, GrainType::Canola]
        );
    }

    #[test]
    fn test_process_match_is_case_sensitive() {
        assert_eq!(
            classify_grains(&record("Yorkton Canola Crush", "Richardson", "process")),
            &[GrainType::Wheat, GrainType::Canola, GrainType::Barley]
        );
    }

    #[test]
    fn test_default_primary() {
        assert_eq!(
            classify_grains(&record("Regina - Main", "Viterra", "Primary")),
            &[GrainType::Wheat, GrainType::Canola, GrainType::Barley]
        );
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity(&json!("12500.7")), Some(12500));
        assert_eq!(parse_capacity(&json!(" 800 ")), Some(800));
        assert_eq!(parse_capacity(&json!(4200)), Some(4200));
        assert_eq!(parse_capacity(&json!(99.99)), Some(99));
        assert_eq!(parse_capacity(&json!("n/a")), None);
        assert_eq!(parse_capacity(&json!("")), None);
        assert_eq!(parse_capacity(&json!("inf")), None);
        assert_eq!(parse_capacity(&json!("-10")), None);
        assert_eq!(parse_capacity(&json!(null)), None);
        assert_eq!(parse_capacity(&json!(true)), None);
    }

    #[test]
    fn test_parse_capacity_out_of_range() {
        assert_eq!(parse_capacity(&json!("1e30")), None);
        assert_eq!(parse_capacity(&json!(1e30)), None);
        assert_eq!(parse_capacity(&json!(18_446_744_073_709_551_615u64)), None);
        assert_eq!(parse_capacity(&json!("9223372036854775807")), None);
        assert_eq!(parse_capacity(&json!(-5)), None);
        assert_eq!(
            parse_capacity(&json!(9_007_199_254_740_993i64)),
            Some(9_007_199_254_740_993)
        );
        assert_eq!(parse_capacity(&json!("9000000000000000000")), Some(9_000_000_000_000_000_000));
    }

    #[test]
    fn test_derive_address() {
        assert_eq!(derive_address("Regina - Main", "SK"), "Regina, SK");
        assert_eq!(derive_address("Moose Jaw - A - B", "SK"), "Moose Jaw, SK");
        assert_eq!(derive_address("Kindersley", "SK"), "Kindersley, SK");
        assert_eq!(derive_address("Rosetown-East", "SK"), "Rosetown-East, SK");
        assert_eq!(derive_address("", "SK"), ", SK");
    }
}
