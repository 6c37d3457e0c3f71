pub mod actions;
pub mod creature;
pub mod engine;
pub mod kind;
pub mod params;
pub mod scenario;
pub mod snapshot;

pub use actions::{Action, CreatureAction, CreatureBehavior, PlayerAction};
pub use creature::Creature;
pub use engine::{Engine, EngineSettings, TickSummary};
pub use kind::{Kind, KindError, MaturePhase};
pub use params::{BoundedParam, ParamKind, ParamSpec};
pub use snapshot::{History, HistoryWriter, Snapshot};
