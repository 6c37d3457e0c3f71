//! Maturity phase table: maps an age in days to the phase definition
//! governing the creature at that age.

use thiserror::Error;

use crate::actions::{CreatureAction, PlayerAction};
use crate::params::ParamSpec;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KindError {
    #[error("kind '{0}' defines no maturity phases")]
    NoPhases(String),
    #[error("phase {index} has non-positive duration")]
    InvalidPhase { index: usize },
    #[error("no maturity phase covers age {age} (max age {max_age})")]
    RangeLookup { age: u32, max_age: u32 },
}

/// One contiguous age-range state: how long it lasts and which parameter
/// specs and action templates apply while the creature is in it.
#[derive(Debug, Clone, PartialEq)]
pub struct MaturePhase {
    pub days: u32,
    pub params: Vec<ParamSpec>,
    pub player_actions: Vec<PlayerAction>,
    pub creature_actions: Vec<CreatureAction>,
}

/// An ordered sequence of maturity phases laid out as disjoint inclusive
/// age ranges starting at 0. `max_age` is the last covered day.
#[derive(Debug, Clone, PartialEq)]
pub struct Kind {
    name: String,
    image: String,
    ranges: Vec<(u32, u32)>,
    phases: Vec<MaturePhase>,
    max_age: u32,
}

impl Kind {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        phases: Vec<MaturePhase>,
    ) -> Result<Self, KindError> {
        let name = name.into();
        if phases.is_empty() {
            return Err(KindError::NoPhases(name));
        }
        let mut ranges = Vec::with_capacity(phases.len());
        let mut left = 0u32;
        for (index, phase) in phases.iter().enumerate() {
            if phase.days == 0 {
                return Err(KindError::InvalidPhase { index });
            }
            ranges.push((left, left + phase.days - 1));
            left += phase.days;
        }
        Ok(Self {
            name,
            image: image.into(),
            ranges,
            phases,
            max_age: left - 1,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque display-asset reference; the core only passes it through.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    /// The phase governing `age`, by linear scan over the stored ranges.
    pub fn phase_for(&self, age: u32) -> Result<&MaturePhase, KindError> {
        self.index_for(age).map(|i| &self.phases[i])
    }

    /// Inclusive bounds of the range containing `age`, for
    /// phase-boundary comparison.
    pub fn range_containing(&self, age: u32) -> Result<(u32, u32), KindError> {
        self.index_for(age).map(|i| self.ranges[i])
    }

    fn index_for(&self, age: u32) -> Result<usize, KindError> {
        self.ranges
            .iter()
            .position(|&(low, high)| low <= age && age <= high)
            .ok_or(KindError::RangeLookup {
                age,
                max_age: self.max_age,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(days: u32) -> MaturePhase {
        MaturePhase {
            days,
            params: Vec::new(),
            player_actions: Vec::new(),
            creature_actions: Vec::new(),
        }
    }

    fn three_phase_kind() -> Kind {
        Kind::new("test", "images/test.png", vec![phase(3), phase(4), phase(2)]).unwrap()
    }

    #[test]
    fn ranges_partition_lifetime() {
        let kind = three_phase_kind();
        assert_eq!(kind.max_age(), 8);
        assert_eq!(kind.range_containing(0).unwrap(), (0, 2));
        assert_eq!(kind.range_containing(2).unwrap(), (0, 2));
        assert_eq!(kind.range_containing(3).unwrap(), (3, 6));
        assert_eq!(kind.range_containing(7).unwrap(), (7, 8));

        // every age in [0, max_age] is covered by exactly one range
        for age in 0..=kind.max_age() {
            let (low, high) = kind.range_containing(age).unwrap();
            assert!(low <= age && age <= high);
        }
    }

    #[test]
    fn lookup_is_idempotent() {
        let kind = three_phase_kind();
        assert_eq!(kind.phase_for(4).unwrap(), kind.phase_for(4).unwrap());
    }

    #[test]
    fn lookup_past_max_age_fails() {
        let kind = three_phase_kind();
        assert_eq!(
            kind.phase_for(9).unwrap_err(),
            KindError::RangeLookup { age: 9, max_age: 8 }
        );
    }

    #[test]
    fn zero_duration_phase_is_rejected() {
        let err = Kind::new("bad", "", vec![phase(3), phase(0)]).unwrap_err();
        assert_eq!(err, KindError::InvalidPhase { index: 1 });
    }

    #[test]
    fn empty_phase_list_is_rejected() {
        let err = Kind::new("bad", "", Vec::new()).unwrap_err();
        assert_eq!(err, KindError::NoPhases("bad".into()));
    }
}
