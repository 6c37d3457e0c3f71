//! Bounded creature parameters and their per-tick update rules.

use serde::{Deserialize, Serialize};

/// The closed set of creature parameters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Satiety,
    Thirst,
    Tiredness,
    Mood,
    Health,
}

impl ParamKind {
    pub fn label(self) -> &'static str {
        match self {
            ParamKind::Satiety => "satiety",
            ParamKind::Thirst => "thirst",
            ParamKind::Tiredness => "tiredness",
            ParamKind::Mood => "mood",
            ParamKind::Health => "health",
        }
    }

    /// The fixed per-tick delta for this parameter. Health is the only
    /// kind that looks at its siblings; it reads the pre-tick capture.
    pub fn tick_delta(self, siblings: &Readings) -> f64 {
        match self {
            ParamKind::Satiety => -1.0,
            ParamKind::Thirst => 1.0,
            ParamKind::Tiredness => 0.5,
            ParamKind::Mood => -0.5,
            ParamKind::Health => health_delta(siblings),
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable template a phase uses to instantiate a [`BoundedParam`].
///
/// `initial: None` means "carry the current value over" when a phase
/// change re-instantiates the parameter; at birth it falls back to 0.0
/// and clamps into range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub kind: ParamKind,
    #[serde(default)]
    pub initial: Option<f64>,
    pub min: f64,
    pub max: f64,
}

/// A clamped scalar attribute. `min <= value <= max` holds at all times;
/// out-of-range writes clamp, they never error.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedParam {
    kind: ParamKind,
    value: f64,
    min: f64,
    max: f64,
}

impl BoundedParam {
    pub fn new(kind: ParamKind, initial: f64, min: f64, max: f64) -> Self {
        let mut param = Self {
            kind,
            value: min,
            min,
            max,
        };
        param.set_value(initial);
        param
    }

    pub fn from_spec(spec: &ParamSpec, carry_over: Option<f64>) -> Self {
        let initial = spec.initial.or(carry_over).unwrap_or(0.0);
        Self::new(spec.kind, initial, spec.min, spec.max)
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn set_value(&mut self, new_value: f64) {
        if new_value <= self.min {
            self.value = self.min;
        } else if new_value >= self.max {
            self.value = self.max;
        } else {
            self.value = new_value;
        }
    }

    pub fn add(&mut self, delta: f64) {
        self.set_value(self.value + delta);
    }

    pub fn reading(&self) -> Reading {
        Reading {
            value: self.value,
            min: self.min,
            max: self.max,
        }
    }
}

/// One parameter's value and range, captured before a tick commits.
#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl Reading {
    fn quarter(&self) -> f64 {
        (self.min + self.max) / 4.0
    }

    fn three_quarters(&self) -> f64 {
        3.0 * (self.min + self.max) / 4.0
    }
}

/// Pre-tick capture of the siblings the health rule depends on.
/// A parameter the current phase does not define reads as healthy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Readings {
    pub satiety: Option<Reading>,
    pub thirst: Option<Reading>,
    pub tiredness: Option<Reading>,
    pub mood: Option<Reading>,
}

impl Readings {
    pub fn set(&mut self, kind: ParamKind, reading: Reading) {
        match kind {
            ParamKind::Satiety => self.satiety = Some(reading),
            ParamKind::Thirst => self.thirst = Some(reading),
            ParamKind::Tiredness => self.tiredness = Some(reading),
            ParamKind::Mood => self.mood = Some(reading),
            ParamKind::Health => {}
        }
    }
}

/// Banded health rule. The warning band (strict inequalities) is checked
/// before the exact critical boundaries; a parameter sitting exactly on
/// its boundary costs a full point, inside the band half a point, and a
/// fully comfortable creature heals by half a point.
fn health_delta(s: &Readings) -> f64 {
    let low_satiety = s
        .satiety
        .map(|r| 0.0 < r.value && r.value < r.quarter())
        .unwrap_or(false);
    let low_mood = s
        .mood
        .map(|r| 0.0 < r.value && r.value < r.quarter())
        .unwrap_or(false);
    let high_thirst = s
        .thirst
        .map(|r| r.value > r.three_quarters())
        .unwrap_or(false);
    let high_tiredness = s
        .tiredness
        .map(|r| r.value > r.three_quarters())
        .unwrap_or(false);

    if low_satiety || low_mood || high_thirst || high_tiredness {
        return -0.5;
    }

    let starved = s.satiety.map(|r| r.value == 0.0).unwrap_or(false);
    let joyless = s.mood.map(|r| r.value == 0.0).unwrap_or(false);
    let parched = s
        .thirst
        .map(|r| r.value == r.three_quarters())
        .unwrap_or(false);
    let exhausted = s
        .tiredness
        .map(|r| r.value == r.three_quarters())
        .unwrap_or(false);

    if starved || joyless || parched || exhausted {
        -1.0
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(value: f64, min: f64, max: f64) -> Reading {
        Reading { value, min, max }
    }

    fn comfortable() -> Readings {
        let mut readings = Readings::default();
        readings.set(ParamKind::Satiety, reading(10.0, 0.0, 20.0));
        readings.set(ParamKind::Thirst, reading(5.0, 0.0, 20.0));
        readings.set(ParamKind::Tiredness, reading(5.0, 0.0, 20.0));
        readings.set(ParamKind::Mood, reading(10.0, 0.0, 20.0));
        readings
    }

    #[test]
    fn set_value_clamps_at_both_ends() {
        let mut param = BoundedParam::new(ParamKind::Satiety, 10.0, 0.0, 20.0);
        param.set_value(-3.0);
        assert_eq!(param.value(), 0.0);
        param.set_value(25.0);
        assert_eq!(param.value(), 20.0);
        param.set_value(7.5);
        assert_eq!(param.value(), 7.5);
    }

    #[test]
    fn construction_clamps_initial() {
        let param = BoundedParam::new(ParamKind::Health, 99.0, 0.0, 20.0);
        assert_eq!(param.value(), 20.0);
        let param = BoundedParam::new(ParamKind::Health, -1.0, 0.0, 20.0);
        assert_eq!(param.value(), 0.0);
    }

    #[test]
    fn fixed_deltas_match_kind() {
        let readings = comfortable();
        assert_eq!(ParamKind::Satiety.tick_delta(&readings), -1.0);
        assert_eq!(ParamKind::Thirst.tick_delta(&readings), 1.0);
        assert_eq!(ParamKind::Tiredness.tick_delta(&readings), 0.5);
        assert_eq!(ParamKind::Mood.tick_delta(&readings), -0.5);
    }

    #[test]
    fn health_heals_when_comfortable() {
        assert_eq!(ParamKind::Health.tick_delta(&comfortable()), 0.5);
    }

    #[test]
    fn health_decays_inside_warning_band() {
        let mut readings = comfortable();
        // quarter of (0, 20) is 5; satiety 3 sits inside the band
        readings.set(ParamKind::Satiety, reading(3.0, 0.0, 20.0));
        assert_eq!(ParamKind::Health.tick_delta(&readings), -0.5);
    }

    #[test]
    fn health_drops_a_full_point_on_the_boundary() {
        let mut readings = comfortable();
        readings.set(ParamKind::Satiety, reading(0.0, 0.0, 20.0));
        assert_eq!(ParamKind::Health.tick_delta(&readings), -1.0);

        let mut readings = comfortable();
        readings.set(ParamKind::Thirst, reading(15.0, 0.0, 20.0));
        assert_eq!(ParamKind::Health.tick_delta(&readings), -1.0);
    }

    #[test]
    fn warning_band_wins_over_boundary() {
        // starved satiety and over-threshold thirst at once: the band
        // branch is checked first, so the penalty stays at half a point
        let mut readings = comfortable();
        readings.set(ParamKind::Satiety, reading(0.0, 0.0, 20.0));
        readings.set(ParamKind::Thirst, reading(16.0, 0.0, 20.0));
        assert_eq!(ParamKind::Health.tick_delta(&readings), -0.5);
    }

    #[test]
    fn missing_siblings_read_as_healthy() {
        assert_eq!(ParamKind::Health.tick_delta(&Readings::default()), 0.5);
    }

    #[test]
    fn from_spec_prefers_declared_initial() {
        let spec = ParamSpec {
            kind: ParamKind::Mood,
            initial: Some(12.0),
            min: 0.0,
            max: 20.0,
        };
        assert_eq!(BoundedParam::from_spec(&spec, Some(4.0)).value(), 12.0);

        let carry = ParamSpec {
            initial: None,
            ..spec
        };
        assert_eq!(BoundedParam::from_spec(&carry, Some(4.0)).value(), 4.0);
        assert_eq!(BoundedParam::from_spec(&carry, None).value(), 0.0);
    }
}
