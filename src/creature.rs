//! The creature itself: a state machine over age whose states are
//! maturity phases.

use std::collections::BTreeMap;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::actions::{Action, CreatureAction, PlayerAction};
use crate::kind::{Kind, MaturePhase};
use crate::params::{BoundedParam, ParamKind, Readings};
use crate::snapshot::{History, Snapshot};

/// A virtual pet. Owns its parameters, its phase-bound action sets and
/// its tick history exclusively.
///
/// The model is single-threaded: every operation takes `&mut self` and
/// runs to completion. Drivers calling in from multiple threads must
/// serialize access externally.
#[derive(Debug, Clone)]
pub struct Creature {
    kind: Kind,
    name: String,
    age: u32,
    params: BTreeMap<ParamKind, BoundedParam>,
    player_actions: Vec<PlayerAction>,
    creature_actions: Vec<CreatureAction>,
    history: History,
}

impl Creature {
    /// A newborn creature: age 0, parameters and action sets taken from
    /// the kind's first phase, empty history.
    pub fn new(kind: Kind, name: impl Into<String>) -> Self {
        let mut creature = Self {
            kind,
            name: name.into(),
            age: 0,
            params: BTreeMap::new(),
            player_actions: Vec::new(),
            creature_actions: Vec::new(),
            history: History::default(),
        };
        creature.instantiate_params();
        creature.bind_actions();
        creature
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn param(&self, kind: ParamKind) -> Option<&BoundedParam> {
        self.params.get(&kind)
    }

    pub fn player_actions(&self) -> &[PlayerAction] {
        &self.player_actions
    }

    pub fn creature_actions(&self) -> &[CreatureAction] {
        &self.creature_actions
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Set the age, clamped to the kind's `max_age` (the creature stays
    /// in its final phase indefinitely). Crossing a phase boundary
    /// re-instantiates the parameters from the new phase's specs and
    /// rebuilds both action sets; moving within a phase changes nothing
    /// but the age itself.
    pub fn set_age(&mut self, new_age: u32) {
        let new_age = new_age.min(self.kind.max_age());
        let old_range = self
            .kind
            .range_containing(self.age)
            .expect("a valid kind covers every clamped age");
        let new_range = self
            .kind
            .range_containing(new_age)
            .expect("a valid kind covers every clamped age");
        self.age = new_age;
        if old_range != new_range {
            self.grow_up();
        }
    }

    pub fn advance_age(&mut self) {
        self.set_age(self.age.saturating_add(1));
    }

    /// One simulation tick. Every new value is computed from a pre-tick
    /// capture of the current values, then all writes commit at once, so
    /// the health rule sees its siblings as they were before the tick
    /// regardless of parameter order. Appends exactly one history entry.
    pub fn update(&mut self) {
        let mut readings = Readings::default();
        for (kind, param) in &self.params {
            readings.set(*kind, param.reading());
        }

        let staged: Vec<(ParamKind, f64)> = self
            .params
            .iter()
            .map(|(kind, param)| (*kind, param.value() + kind.tick_delta(&readings)))
            .collect();
        for (kind, new_value) in staged {
            if let Some(param) = self.params.get_mut(&kind) {
                param.set_value(new_value);
            }
        }

        let snapshot = self.snapshot();
        self.history.push(snapshot);
    }

    /// Apply a player action and return its effect summary.
    pub fn perform_player_action(&mut self, action: PlayerAction) -> String {
        self.apply(Action::Player(action))
    }

    /// The autonomous-action roll: pick one available creature action
    /// uniformly, then draw against its weight; on a miss the creature
    /// idles. An empty action set is a no-op.
    pub fn random_action(&mut self, rng: &mut impl Rng) -> String {
        let Some(chosen) = self.creature_actions.choose(rng).copied() else {
            return Action::Idle.message(&self.name);
        };
        let percent = (chosen.weight * 100.0).round() as u32;
        let action = if rng.gen_range(0..100) < percent {
            Action::Creature(chosen.behavior)
        } else {
            Action::Idle
        };
        self.apply(action)
    }

    /// The always-available boredom fallback, not tied to any phase.
    pub fn miss(&mut self) -> String {
        self.apply(Action::Miss)
    }

    fn apply(&mut self, action: Action) -> String {
        for (kind, delta) in action.deltas() {
            if let Some(param) = self.params.get_mut(&kind) {
                param.add(delta);
            }
        }
        action.message(&self.name)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            age: self.age,
            values: self
                .params
                .iter()
                .map(|(kind, param)| (*kind, param.value()))
                .collect(),
        }
    }

    fn current_phase(&self) -> &MaturePhase {
        self.kind
            .phase_for(self.age)
            .expect("a valid kind covers every clamped age")
    }

    fn instantiate_params(&mut self) {
        for spec in self.current_phase().params.clone() {
            self.params
                .insert(spec.kind, BoundedParam::from_spec(&spec, None));
        }
    }

    fn bind_actions(&mut self) {
        let (player_actions, creature_actions) = {
            let phase = self.current_phase();
            (phase.player_actions.clone(), phase.creature_actions.clone())
        };
        self.player_actions = player_actions;
        self.creature_actions = creature_actions;
    }

    /// Phase transition: re-instantiate every parameter the new phase
    /// names (specs without a declared initial carry the current value
    /// over; parameters the new phase does not name are left untouched)
    /// and rebind the action sets.
    fn grow_up(&mut self) {
        for spec in self.current_phase().params.clone() {
            let carry_over = self.params.get(&spec.kind).map(|p| p.value());
            self.params
                .insert(spec.kind, BoundedParam::from_spec(&spec, carry_over));
        }
        self.bind_actions();
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "({}) {}: {} days old",
            self.kind.name(),
            self.name,
            self.age
        )?;
        for (kind, param) in &self.params {
            writeln!(f, "{}: {:.1}", kind.label(), param.value())?;
        }
        Ok(())
    }
}
