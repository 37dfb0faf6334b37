use crate::model::{BestRecords, GameMode};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::serde_as;
use serde_with::TimestampSeconds;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// Durable best values, one slot per mode.
///
/// `save` overwrites unconditionally; deciding whether a value is an
/// improvement is the caller's job.
pub trait RecordStore {
    fn get(&self, mode: GameMode) -> Option<u32>;
    fn save(&mut self, mode: GameMode, value: u32) -> std::io::Result<()>;

    fn reset_streak(&mut self) -> std::io::Result<()> {
        self.save(GameMode::Survival, 0)
    }

    fn best_records(&self, current_streak: u32) -> BestRecords {
        BestRecords {
            classic_best_tries: self.get(GameMode::Classic),
            time_attack_best_seconds: self.get(GameMode::TimeAttack),
            survival_best_streak: self.get(GameMode::Survival).unwrap_or(0),
            current_streak,
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordEntry {
    pub value: u32,
    #[serde_as(as = "TimestampSeconds")]
    pub recorded_at: SystemTime,
}

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: HashMap<GameMode, u32>,
}

impl RecordStore for MemoryRecordStore {
    fn get(&self, mode: GameMode) -> Option<u32> {
        self.records.get(&mode).copied()
    }

    fn save(&mut self, mode: GameMode, value: u32) -> std::io::Result<()> {
        self.records.insert(mode, value);
        Ok(())
    }
}

/// Records kept in `records.json` inside the data directory.
///
/// The in-memory map is updated before every write, so it stays authoritative
/// for the session even when the disk is not writable.
#[derive(Debug)]
pub struct JsonRecordStore {
    data_dir: PathBuf,
    records: HashMap<GameMode, RecordEntry>,
}

impl JsonRecordStore {
    /// Fails only when the data directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        let mut store = Self {
            data_dir,
            records: HashMap::new(),
        };
        store.load();
        Ok(store)
    }

    fn records_path(&self) -> PathBuf {
        self.data_dir.join("records.json")
    }

    /// Each mode's entry is decoded on its own so one bad slot does not
    /// cost the others. A file that is not a JSON object at all is moved to
    /// `records.json.bak` before anything overwrites it.
    fn load(&mut self) {
        let path = self.records_path();
        let Ok(contents) = fs::read_to_string(&path) else {
            return;
        };

        let map = match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(map) => map,
            Err(e) => {
                warn!(target: "records", "Ignoring corrupt {:?}: {}", path, e);
                let backup = path.with_extension("json.bak");
                if let Err(e) = fs::rename(&path, &backup) {
                    warn!(target: "records", "Could not move {:?} aside: {}", path, e);
                }
                return;
            }
        };

        for (key, value) in map {
            let mode = match serde_json::from_value::<GameMode>(Value::String(key.clone())) {
                Ok(mode) => mode,
                Err(_) => {
                    warn!(target: "records", "Skipping unknown mode {:?} in {:?}", key, path);
                    continue;
                }
            };
            match serde_json::from_value::<RecordEntry>(value) {
                Ok(entry) => {
                    self.records.insert(mode, entry);
                }
                Err(e) => warn!(target: "records", "Skipping bad {:?} record: {}", mode, e),
            }
        }
    }

    fn write(&self) -> std::io::Result<()> {
        let contents = serde_json::to_string_pretty(&self.records)?;
        fs::write(self.records_path(), contents)
    }

    fn entry(&self, mode: GameMode) -> Option<&RecordEntry> {
        self.records.get(&mode)
    }
}

impl RecordStore for JsonRecordStore {
    fn get(&self, mode: GameMode) -> Option<u32> {
        self.records.get(&mode).map(|entry| entry.value)
    }

    fn save(&mut self, mode: GameMode, value: u32) -> std::io::Result<()> {
        self.records.insert(
            mode,
            RecordEntry {
                value,
                recorded_at: SystemTime::now(),
            },
        );
        info!(target: "records", "Saving {:?} record: {}", mode, value);
        self.write()
    }
}
