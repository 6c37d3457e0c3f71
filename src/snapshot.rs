//! Tick history and periodic JSON export.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::creature::Creature;
use crate::params::ParamKind;

/// One tick's record: the creature's age and every parameter value after
/// the tick committed. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub age: u32,
    pub values: BTreeMap<ParamKind, f64>,
}

/// Append-only sequence of [`Snapshot`]s, one per tick.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    /// The recorded values of one parameter across all ticks, skipping
    /// ticks where the phase did not define it.
    pub fn series(&self, kind: ParamKind) -> Vec<f64> {
        self.entries
            .iter()
            .filter_map(|snapshot| snapshot.values.get(&kind).copied())
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct HistoryDump<'a> {
    written_at: String,
    creature: &'a str,
    kind: &'a str,
    tick: u64,
    age: u32,
    history: &'a [Snapshot],
}

/// Interval-gated dump of the full creature history to pretty JSON,
/// one file per snapshot tick. Interval 0 disables writing.
pub struct HistoryWriter {
    output_dir: PathBuf,
    interval_ticks: u64,
}

impl HistoryWriter {
    pub fn new(output_dir: impl AsRef<Path>, interval_ticks: u64) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            interval_ticks,
        }
    }

    pub fn maybe_write(
        &self,
        tick: u64,
        creature: &Creature,
    ) -> Result<Option<PathBuf>, HistoryError> {
        if self.interval_ticks == 0 || tick % self.interval_ticks != 0 {
            return Ok(None);
        }

        let dir = self.output_dir.join(creature.name());
        fs::create_dir_all(&dir)?;
        let file_path = dir.join(format!("tick_{tick:06}.json"));
        let dump = HistoryDump {
            written_at: chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string(),
            creature: creature.name(),
            kind: creature.kind().name(),
            tick,
            age: creature.age(),
            history: creature.history().entries(),
        };
        fs::write(&file_path, serde_json::to_string_pretty(&dump)?)?;
        Ok(Some(file_path))
    }
}
