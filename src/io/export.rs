//! Export a fetched schedule as JSON.
//!
//! The document is meant to be easy to consume from scripts: one entry per
//! water with its next/last stocking dates and every dated week.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::clock::{Clock, regional_now};
use crate::domain::{Calendar, Fish, Program, StockingData, Week};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct StockingExport {
    pub tool: String,
    pub program: Program,
    pub generated_at: DateTime<FixedOffset>,
    pub waters: Vec<WaterExport>,
}

#[derive(Debug, Serialize)]
pub struct WaterExport {
    pub water_name: String,
    pub next: Option<NaiveDate>,
    pub last: Option<NaiveDate>,
    pub weeks: Vec<WeekExport>,
}

#[derive(Debug, Serialize)]
pub struct WeekExport {
    pub date: NaiveDate,
    pub stock: Fish,
}

impl StockingExport {
    pub fn build(program: Program, data: &StockingData, clock: &dyn Clock) -> Self {
        let now = regional_now(clock);
        Self {
            tool: "stocker".to_string(),
            program,
            generated_at: now,
            waters: data.iter().map(|cal| water_export(cal, now)).collect(),
        }
    }
}

fn water_export(cal: &Calendar, now: DateTime<FixedOffset>) -> WaterExport {
    WaterExport {
        water_name: cal.water_name.clone(),
        next: present_date(&cal.next_after(now)),
        last: present_date(&cal.last_before(now)),
        // Weeks whose header day doesn't name a real date have nothing to export.
        weeks: cal
            .data
            .iter()
            .filter_map(|w| {
                w.date().map(|date| WeekExport {
                    date,
                    stock: w.stock,
                })
            })
            .collect(),
    }
}

fn present_date(week: &Week) -> Option<NaiveDate> {
    if week.is_zero() { None } else { week.date() }
}

/// Render the export document as pretty JSON.
pub fn stocking_json(program: Program, data: &StockingData, clock: &dyn Clock) -> Result<String, AppError> {
    let doc = StockingExport::build(program, data, clock);
    serde_json::to_string_pretty(&doc).map_err(|e| AppError::new(4, format!("Failed to encode stocking JSON: {e}")))
}

/// Write the export document to `path`.
pub fn write_stocking_json(
    path: &Path,
    program: Program,
    data: &StockingData,
    clock: &dyn Clock,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    let doc = StockingExport::build(program, data, clock);
    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{cfp_clock, cfp_fetcher};
    use serde_json::Value;

    #[test]
    fn export_shape() {
        let clock = cfp_clock();
        let data = crate::data::get(&cfp_fetcher(), &clock, Program::Cfp, &[]).unwrap();
        let text = stocking_json(Program::Cfp, &data, &clock).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(doc["tool"], "stocker");
        assert_eq!(doc["program"], "cfp");
        assert_eq!(doc["generated_at"], "2024-11-02T06:00:00-07:00");

        let kiwanis = &doc["waters"][0];
        assert_eq!(kiwanis["water_name"], "TEMPE - Kiwanis LAKE");
        assert_eq!(kiwanis["last"], "2024-10-21");
        assert_eq!(kiwanis["next"], "2024-11-04");
        assert_eq!(kiwanis["weeks"].as_array().unwrap().len(), 13);
        assert_eq!(kiwanis["weeks"][0]["date"], "2024-10-07");
        assert_eq!(kiwanis["weeks"][0]["stock"], "Unknown");
        assert_eq!(kiwanis["weeks"][2]["stock"], "Catfish");
    }

    #[test]
    fn missing_next_and_last_are_null() {
        let data = StockingData(vec![Calendar {
            water_name: "Dry Lake".to_string(),
            data: vec![],
        }]);
        let doc = StockingExport::build(Program::Winter, &data, &cfp_clock());
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["waters"][0]["next"].is_null());
        assert!(value["waters"][0]["last"].is_null());
        assert_eq!(value["waters"][0]["weeks"], Value::Array(vec![]));
    }

    #[test]
    fn writes_to_file() {
        let path = std::env::temp_dir().join(format!("stocker-export-{}.json", std::process::id()));
        let clock = cfp_clock();
        let data = crate::data::get(&cfp_fetcher(), &clock, Program::Cfp, &[]).unwrap();
        write_stocking_json(&path, Program::Cfp, &data, &clock).unwrap();

        let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(doc["waters"].as_array().unwrap().len(), 3);
    }
}
