#![allow(dead_code)]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// Payload shaped like the budgets endpoint response for March 2025.
pub const MARCH_PAYLOAD: &str = r##"[
    { "id": "b-rent", "category": "Rent", "amount": 1200, "spent": 1150,
      "currency": { "code": "USD", "symbol": "$" } },
    { "id": "b-food", "category": "Groceries", "amount": 500, "spent": 472 },
    { "id": "b-fuel", "category": "Gas Bill", "amount": 200, "spent": 255 },
    { "id": "b-fun", "category": "Netflix", "amount": 15, "spent": 15, "color": "#e50914" }
]"##;

/// Temporary home directory with the March payload written to `budgets.json`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join("budgets.json"), MARCH_PAYLOAD).expect("write payload");
        Self { dir }
    }

    pub fn payload_path(&self) -> PathBuf {
        self.dir.path().join("budgets.json")
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }
}
