//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use delivery_ledger::models::{FIELD_NAMES, Record};
use tempfile::TempDir;

pub const HEADER: &str = "Date,Client Name,Input Data,Service Name,Vendor Name,Delivery Date,V Send Date,V Receive Date,Other Remarks";

/// Builder for a scratch workspace holding import files, a store and an export directory
pub struct LedgerDirBuilder {
    temp_dir: TempDir,
}

impl LedgerDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Add an import file with the given content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write import file");
        self
    }

    /// Add a CSV import file built from records
    pub fn with_csv(self, name: &str, records: &[RecordBuilder]) -> Self {
        let content = csv_text(records);
        self.with_file(name, &content)
    }

    /// Add a JSON import file built from records
    pub fn with_json(self, name: &str, records: &[RecordBuilder]) -> Self {
        let content = json_text(records);
        self.with_file(name, &content)
    }

    pub fn build(self) -> LedgerDir {
        LedgerDir { temp_dir: self.temp_dir }
    }
}

pub struct LedgerDir {
    temp_dir: TempDir,
}

impl LedgerDir {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn store_path(&self) -> PathBuf {
        self.temp_dir.path().join("store").join("sessions.json")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.temp_dir.path().join("exports")
    }
}

/// Builder for one delivery record with realistic defaults
#[derive(Clone)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            record: Record {
                date: "2024-01-05".to_string(),
                client_name: "Acme".to_string(),
                input_data: "X".to_string(),
                service_name: "Translate".to_string(),
                vendor_name: "V1".to_string(),
                delivery_date: "2024-01-06".to_string(),
                v_send_date: "2024-01-05".to_string(),
                v_receive_date: "2024-01-06".to_string(),
                other_remarks: "ok".to_string(),
            },
        }
    }

    pub fn date(mut self, date: &str) -> Self {
        self.record.date = date.to_string();
        self
    }

    pub fn client(mut self, client: &str) -> Self {
        self.record.client_name = client.to_string();
        self
    }

    pub fn remarks(mut self, remarks: &str) -> Self {
        self.record.other_remarks = remarks.to_string();
        self
    }

    pub fn build(&self) -> Record {
        self.record.clone()
    }
}

/// Header line plus one naive comma-joined line per record
pub fn csv_text(records: &[RecordBuilder]) -> String {
    let mut lines = vec![HEADER.to_string()];
    lines.extend(records.iter().map(|r| r.build().values().join(",")));
    lines.join("\n")
}

/// JSON array of objects keyed by the field names
pub fn json_text(records: &[RecordBuilder]) -> String {
    let records: Vec<Record> = records.iter().map(RecordBuilder::build).collect();
    serde_json::to_string_pretty(&records).expect("Failed to serialize records")
}

/// Records dated on consecutive January 2024 days, one client per day
pub fn january_records(count: usize) -> Vec<RecordBuilder> {
    assert!(count <= 31);
    (1..=count)
        .map(|day| {
            RecordBuilder::new()
                .date(&format!("2024-01-{:02}", day))
                .client(&format!("Client {}", day))
        })
        .collect()
}

pub fn field_names() -> [&'static str; 9] {
    FIELD_NAMES
}
