//! The external tick driver. The creature core has no clock of its own;
//! the engine supplies the cadence: one `update()` per tick, an
//! autonomous-action roll and a day of aging at configurable intervals,
//! and interval-gated history dumps.

use std::path::PathBuf;

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::creature::Creature;
use crate::snapshot::{HistoryError, HistoryWriter};

pub struct EngineSettings {
    pub seed: u64,
    /// Ticks per day of creature age. Values below 1 are treated as 1.
    pub ticks_per_day: u64,
    /// Autonomous-roll cadence in ticks; 0 disables the roll.
    pub roll_interval_ticks: u64,
    /// History-dump cadence in ticks; 0 disables writing.
    pub snapshot_interval_ticks: u64,
    pub snapshot_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct TickSummary {
    pub tick: u64,
    pub age: u32,
    pub event: Option<String>,
    pub snapshot_path: Option<PathBuf>,
}

pub struct Engine {
    rng: ChaCha8Rng,
    writer: HistoryWriter,
    ticks_per_day: u64,
    roll_interval_ticks: u64,
    tick: u64,
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(settings.seed),
            writer: HistoryWriter::new(
                &settings.snapshot_dir,
                settings.snapshot_interval_ticks,
            ),
            ticks_per_day: settings.ticks_per_day.max(1),
            roll_interval_ticks: settings.roll_interval_ticks,
            tick: 0,
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn step(&mut self, creature: &mut Creature) -> Result<TickSummary, HistoryError> {
        self.tick += 1;
        creature.update();
        let event = if self.roll_interval_ticks > 0 && self.tick % self.roll_interval_ticks == 0
        {
            Some(creature.random_action(&mut self.rng))
        } else {
            None
        };
        if self.tick % self.ticks_per_day == 0 {
            creature.advance_age();
        }
        let snapshot_path = self.writer.maybe_write(self.tick, creature)?;
        Ok(TickSummary {
            tick: self.tick,
            age: creature.age(),
            event,
            snapshot_path,
        })
    }

    pub fn run(&mut self, creature: &mut Creature, ticks: u64) -> Result<()> {
        self.run_with_hook(creature, ticks, |_| {})
    }

    pub fn run_with_hook(
        &mut self,
        creature: &mut Creature,
        ticks: u64,
        mut hook: impl FnMut(&TickSummary),
    ) -> Result<()> {
        for _ in 0..ticks {
            let summary = self.step(creature)?;
            hook(&summary);
        }
        Ok(())
    }
}
