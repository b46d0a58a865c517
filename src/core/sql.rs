use crate::core::{ElevatorRecord, GrainType};
use crate::domain::services::{classify_grains, derive_address};

pub const SOURCE_URL: &str = "https://agriculture.canada.ca/atlas/data_donnees/cgcElevators/";

const INSERT_COLUMNS: &str = "name, company, location, address, capacity_tonnes, grain_types, railway, elevator_type, car_spots, created_at";

/// SQL 字串常值跳脫：單引號加倍
pub fn escape_literal(text: &str) -> String {
    text.replace('\'', "''")
}

fn quoted(text: &str) -> String {
    format!("'{}'", escape_literal(text))
}

pub fn render_grain_array(grains: &[GrainType]) -> String {
    let items: Vec<String> = grains.iter().map(|grain| quoted(grain.as_str())).collect();
    format!("ARRAY[{}]", items.join(", "))
}

/// 產生匯入腳本所需的設定
#[derive(Debug, Clone)]
pub struct SqlScriptBuilder {
    pub table: String,
    pub region_name: String,
    pub address_suffix: String,
    pub srid: u32,
}

impl SqlScriptBuilder {
    /// 一筆記錄對應一組 VALUES tuple
    pub fn render_tuple(&self, record: &ElevatorRecord) -> String {
        let grains = classify_grains(record);
        let address = derive_address(&record.name, &self.address_suffix);

        format!(
            "({}, {}, ST_SetSRID(ST_MakePoint({}, {}), {})::geography, {}, {}, {}, {}, {}, {}, NOW())",
            quoted(&record.name),
            quoted(&record.company),
            record.longitude,
            record.latitude,
            self.srid,
            quoted(&address),
            record.capacity_tonnes,
            render_grain_array(grains),
            quoted(&record.railway),
            quoted(&record.elevator_type),
            quoted(&record.car_spots),
        )
    }

    /// 組出完整腳本，記錄需已排序
    pub fn render_script(&self, records: &[ElevatorRecord]) -> String {
        let table = &self.table;
        let tuples: Vec<String> = records.iter().map(|r| self.render_tuple(r)).collect();

        let lines = [
            format!(
                "-- Import {} Grain Elevators from Agriculture Canada 2025 data",
                self.region_name
            ),
            format!("-- Source: {}", SOURCE_URL),
            String::new(),
            "-- Clear existing elevator data (optional - comment out to keep existing data)"
                .to_string(),
            format!("-- DELETE FROM {};", table),
            String::new(),
            format!("-- Insert all {} elevators", self.region_name),
            format!("INSERT INTO {} ({}) VALUES", table, INSERT_COLUMNS),
            format!("{};", tuples.join(",\n")),
            String::new(),
            "-- Add indexes for better query performance".to_string(),
            format!(
                "CREATE INDEX IF NOT EXISTS idx_{t}_location ON {t} USING GIST(location);",
                t = table
            ),
            format!(
                "CREATE INDEX IF NOT EXISTS idx_{t}_company ON {t}(company);",
                t = table
            ),
            format!(
                "CREATE INDEX IF NOT EXISTS idx_{t}_capacity ON {t}(capacity_tonnes);",
                t = table
            ),
            String::new(),
            "-- Update statistics".to_string(),
            format!("ANALYZE {};", table),
        ];

        lines.join("\n")
    }
}
