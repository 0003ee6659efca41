use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::shared_slot_game::{History, HistoryEntry, SlotConfig};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to read from storage: {0}")]
    Read(String),
    #[error("failed to write to storage: {0}")]
    Write(String),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string key-value slot, such as `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// The only state that survives a page reload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub balance: i64,
    pub history: History,
}

impl Snapshot {
    pub fn defaults(config: &SlotConfig) -> Self {
        Self {
            balance: config.starting_balance,
            history: History::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Nothing stored under the key.
    Empty,
    Stored,
    /// Stored text was not JSON.
    Unparseable,
    /// The store itself failed.
    Unreadable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Restored,
    Missing,
    Invalid,
}

/// What `load_snapshot` found, alongside the snapshot it settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub snapshot: Snapshot,
    pub source: LoadSource,
    pub balance: FieldStatus,
    pub history: FieldStatus,
    /// History elements that could not be decoded and were skipped.
    pub dropped_entries: usize,
}

impl LoadReport {
    fn defaults(config: &SlotConfig, source: LoadSource) -> Self {
        Self {
            snapshot: Snapshot::defaults(config),
            source,
            balance: FieldStatus::Missing,
            history: FieldStatus::Missing,
            dropped_entries: 0,
        }
    }

    /// True when every field came from storage untouched.
    pub fn is_clean(&self) -> bool {
        self.source == LoadSource::Stored
            && self.balance == FieldStatus::Restored
            && self.history == FieldStatus::Restored
            && self.dropped_entries == 0
    }
}

pub fn load_snapshot<S: KeyValueStore + ?Sized>(store: &S, config: &SlotConfig) -> LoadReport {
    match store.get(&config.storage_key) {
        Ok(Some(raw)) => parse_snapshot(&raw, config),
        Ok(None) => {
            debug!("No saved state under {}", config.storage_key);
            LoadReport::defaults(config, LoadSource::Empty)
        }
        Err(e) => {
            warn!("Could not read saved state: {}", e);
            LoadReport::defaults(config, LoadSource::Unreadable)
        }
    }
}

/// Decodes stored text field by field. Any field that is missing or has the wrong
/// shape falls back to its default without affecting the other.
pub fn parse_snapshot(raw: &str, config: &SlotConfig) -> LoadReport {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Discarding unparseable saved state: {}", e);
            return LoadReport::defaults(config, LoadSource::Unparseable);
        }
    };

    let mut report = LoadReport::defaults(config, LoadSource::Stored);

    match value.get("balance") {
        None => {}
        Some(raw_balance) => match balance_from_json(raw_balance) {
            Some(balance) => {
                report.snapshot.balance = balance;
                report.balance = FieldStatus::Restored;
            }
            None => {
                warn!("Saved balance {} is not a whole number, using default", raw_balance);
                report.balance = FieldStatus::Invalid;
            }
        },
    }

    match value.get("history") {
        None => {}
        Some(Value::Array(items)) => {
            let mut entries = Vec::with_capacity(items.len());
            for item in items {
                match HistoryEntry::deserialize(item) {
                    Ok(entry) => entries.push(entry),
                    Err(e) => {
                        debug!("Skipping malformed history entry: {}", e);
                        report.dropped_entries += 1;
                    }
                }
            }
            if report.dropped_entries > 0 {
                warn!("Skipped {} malformed history entries", report.dropped_entries);
            }
            report.snapshot.history = History::from_entries(entries, config.history_limit);
            report.history = FieldStatus::Restored;
        }
        Some(_) => {
            warn!("Saved history is not a list, using default");
            report.history = FieldStatus::Invalid;
        }
    }

    report
}

fn balance_from_json(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let n = value.as_f64()?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

pub fn save_snapshot<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    snapshot: &Snapshot,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(snapshot)?;
    store.set(key, &encoded)
}

pub fn clear_snapshot<S: KeyValueStore + ?Sized>(store: &mut S, key: &str) -> Result<(), StorageError> {
    store.remove(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_slot_game::{Reels, SpinResult, Symbol};
    use chrono::{TimeZone, Utc};

    fn sample_history(n: usize) -> History {
        let entries = (0..n)
            .map(|i| {
                let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, i as u32).unwrap();
                if i % 2 == 0 {
                    HistoryEntry::new(Reels([Symbol::Diamond; 3]), SpinResult::Win, 100, at)
                } else {
                    HistoryEntry::new(Reels::INITIAL, SpinResult::Lose, -10, at)
                }
            })
            .collect();
        History::from_entries(entries, 5)
    }

    #[test]
    fn test_missing_key_yields_defaults() {
        let config = SlotConfig::default();
        let report = load_snapshot(&MemoryStore::new(), &config);
        assert_eq!(report.source, LoadSource::Empty);
        assert_eq!(report.snapshot.balance, 200);
        assert!(report.snapshot.history.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let config = SlotConfig::default();
        let snapshot = Snapshot {
            balance: -70,
            history: sample_history(4),
        };
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, &config.storage_key, &snapshot).unwrap();

        let report = load_snapshot(&store, &config);
        assert!(report.is_clean());
        assert_eq!(report.snapshot, snapshot);

        // saving what was loaded writes the same text back
        let first = store.raw(&config.storage_key).unwrap().to_string();
        save_snapshot(&mut store, &config.storage_key, &report.snapshot).unwrap();
        assert_eq!(store.raw(&config.storage_key), Some(first.as_str()));
    }

    #[test]
    fn test_wire_shape() {
        let snapshot = Snapshot {
            balance: 210,
            history: sample_history(1),
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "balance": 210,
                "history": [{
                    "symbols": ["💎", "💎", "💎"],
                    "result": "win",
                    "delta": 100,
                    "time": "2026-03-01T12:00:00.000Z",
                }],
            })
        );
    }

    #[test]
    fn test_not_json_falls_back() {
        let report = parse_snapshot("not json", &SlotConfig::default());
        assert_eq!(report.source, LoadSource::Unparseable);
        assert_eq!(report.snapshot.balance, 200);
        assert!(report.snapshot.history.is_empty());
    }

    #[test]
    fn test_non_numeric_balance_falls_back_alone() {
        let config = SlotConfig::default();
        let report = parse_snapshot(r#"{"balance":"x"}"#, &config);
        assert_eq!(report.source, LoadSource::Stored);
        assert_eq!(report.balance, FieldStatus::Invalid);
        assert_eq!(report.history, FieldStatus::Missing);
        assert_eq!(report.snapshot.balance, 200);
        assert!(report.snapshot.history.is_empty());

        let raw = serde_json::json!({
            "balance": null,
            "history": serde_json::to_value(sample_history(2)).unwrap(),
        })
        .to_string();
        let report = parse_snapshot(&raw, &config);
        assert_eq!(report.balance, FieldStatus::Invalid);
        assert_eq!(report.history, FieldStatus::Restored);
        assert_eq!(report.snapshot.history.len(), 2);
    }

    #[test]
    fn test_non_list_history_falls_back_alone() {
        let report = parse_snapshot(r#"{"balance":340,"history":{"a":1}}"#, &SlotConfig::default());
        assert_eq!(report.balance, FieldStatus::Restored);
        assert_eq!(report.history, FieldStatus::Invalid);
        assert_eq!(report.snapshot.balance, 340);
        assert!(report.snapshot.history.is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let raw = r#"{
            "balance": 50,
            "history": [
                {"symbols": ["🍒","🍒","🍒"], "result": "win", "delta": 100, "time": "2026-03-01T12:00:00.000Z"},
                {"symbols": ["🍒"], "result": "win", "delta": 100, "time": "x"},
                "junk",
                {"symbols": ["🍋","🔔","💎"], "result": "lose", "delta": -10, "time": "2026-03-01T11:00:00.000Z"}
            ]
        }"#;
        let report = parse_snapshot(raw, &SlotConfig::default());
        assert_eq!(report.dropped_entries, 2);
        assert_eq!(report.snapshot.history.len(), 2);
        assert_eq!(report.snapshot.history.latest().map(|e| e.delta), Some(100));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_long_history_is_trimmed() {
        let entries: Vec<HistoryEntry> = (0..9)
            .map(|_| HistoryEntry::new(Reels::INITIAL, SpinResult::Lose, -10, Utc::now()))
            .collect();
        let raw = serde_json::json!({ "balance": 1, "history": entries }).to_string();
        let report = parse_snapshot(&raw, &SlotConfig::default());
        assert_eq!(report.snapshot.history.len(), 5);
    }

    #[test]
    fn test_balance_number_forms() {
        let config = SlotConfig::default();
        assert_eq!(parse_snapshot(r#"{"balance":-30}"#, &config).snapshot.balance, -30);
        assert_eq!(parse_snapshot(r#"{"balance":120.0}"#, &config).snapshot.balance, 120);
        let report = parse_snapshot(r#"{"balance":12.5}"#, &config);
        assert_eq!(report.balance, FieldStatus::Invalid);
        assert_eq!(report.snapshot.balance, 200);
    }

    #[test]
    fn test_non_object_json_uses_defaults() {
        for raw in ["null", "5", "[1,2]", r#""text""#] {
            let report = parse_snapshot(raw, &SlotConfig::default());
            assert_eq!(report.source, LoadSource::Stored);
            assert_eq!(report.balance, FieldStatus::Missing);
            assert_eq!(report.snapshot, Snapshot::defaults(&SlotConfig::default()));
        }
    }

    #[test]
    fn test_clear_removes_key() {
        let config = SlotConfig::default();
        let mut store = MemoryStore::with_item(&config.storage_key, "{}");
        clear_snapshot(&mut store, &config.storage_key).unwrap();
        assert!(!store.contains(&config.storage_key));
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read("denied".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_unreadable_store_uses_defaults() {
        let report = load_snapshot(&BrokenStore, &SlotConfig::default());
        assert_eq!(report.source, LoadSource::Unreadable);
        assert_eq!(report.snapshot.balance, 200);

        let err = save_snapshot(&mut BrokenStore, "k", &report.snapshot).unwrap_err();
        assert_eq!(err.to_string(), "failed to write to storage: quota exceeded");
    }
}
