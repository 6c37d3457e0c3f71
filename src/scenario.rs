use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::actions::{CreatureAction, PlayerAction};
use crate::kind::{Kind, KindError, MaturePhase};
use crate::params::{ParamKind, ParamSpec};

fn default_image() -> String {
    "images/pet.png".to_string()
}

/// A kind definition as it appears on disk (YAML).
#[derive(Debug, Clone, Deserialize)]
pub struct KindFile {
    pub name: String,
    #[serde(default = "default_image")]
    pub image: String,
    pub phases: Vec<PhaseConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhaseConfig {
    pub days: u32,
    pub parameters: Vec<ParamSpec>,
    #[serde(default)]
    pub player_actions: Vec<PlayerAction>,
    #[serde(default)]
    pub creature_actions: Vec<CreatureAction>,
}

#[derive(Debug, Error)]
pub enum KindConfigError {
    #[error("phase {index}: parameter '{kind}' listed more than once")]
    DuplicateParam { index: usize, kind: ParamKind },
    #[error("phase {index}: parameter '{kind}' has min {min} >= max {max}")]
    EmptyRange {
        index: usize,
        kind: ParamKind,
        min: f64,
        max: f64,
    },
    #[error("phase {index}: parameter '{kind}' initial {initial} outside [{min}, {max}]")]
    InitialOutOfRange {
        index: usize,
        kind: ParamKind,
        initial: f64,
        min: f64,
        max: f64,
    },
    #[error("phase {index}: creature action weight {weight} outside [0, 1]")]
    WeightOutOfRange { index: usize, weight: f64 },
    #[error(transparent)]
    Kind(#[from] KindError),
}

impl KindFile {
    /// Validate the document and build the core [`Kind`].
    pub fn build(&self) -> Result<Kind, KindConfigError> {
        for (index, phase) in self.phases.iter().enumerate() {
            let mut seen: Vec<ParamKind> = Vec::new();
            for spec in &phase.parameters {
                if seen.contains(&spec.kind) {
                    return Err(KindConfigError::DuplicateParam {
                        index,
                        kind: spec.kind,
                    });
                }
                seen.push(spec.kind);
                if spec.min >= spec.max {
                    return Err(KindConfigError::EmptyRange {
                        index,
                        kind: spec.kind,
                        min: spec.min,
                        max: spec.max,
                    });
                }
                if let Some(initial) = spec.initial {
                    if initial < spec.min || initial > spec.max {
                        return Err(KindConfigError::InitialOutOfRange {
                            index,
                            kind: spec.kind,
                            initial,
                            min: spec.min,
                            max: spec.max,
                        });
                    }
                }
            }
            for action in &phase.creature_actions {
                if !(0.0..=1.0).contains(&action.weight) {
                    return Err(KindConfigError::WeightOutOfRange {
                        index,
                        weight: action.weight,
                    });
                }
            }
        }

        let phases = self
            .phases
            .iter()
            .map(|phase| MaturePhase {
                days: phase.days,
                params: phase.parameters.clone(),
                player_actions: phase.player_actions.clone(),
                creature_actions: phase.creature_actions.clone(),
            })
            .collect();
        Ok(Kind::new(&self.name, &self.image, phases)?)
    }
}

pub struct KindLoader {
    base_dir: PathBuf,
}

impl KindLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<KindFile> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read kind file {}", path.display()))?;
        let kind_file: KindFile = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(kind_file)
    }
}
