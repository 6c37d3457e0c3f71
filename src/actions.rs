//! The action catalog: player-triggered and autonomous creature actions.
//!
//! Actions are plain templates. A maturity phase lists the templates it
//! allows, the creature copies them into its available sets, and applying
//! one writes a fixed set of deltas through the clamped parameter setters.

use serde::{Deserialize, Serialize};

use crate::params::ParamKind;

pub const DEFAULT_FEED_AMOUNT: f64 = 5.0;
pub const DEFAULT_DRINK_AMOUNT: f64 = 3.0;

fn default_feed_amount() -> f64 {
    DEFAULT_FEED_AMOUNT
}

fn default_drink_amount() -> f64 {
    DEFAULT_DRINK_AMOUNT
}

/// An action the player may invoke while the creature's current phase
/// allows it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum PlayerAction {
    Feed {
        #[serde(default = "default_feed_amount")]
        amount: f64,
    },
    GiveDrink {
        #[serde(default = "default_drink_amount")]
        amount: f64,
    },
    Play,
    Train,
    ScratchHead,
}

/// Something the creature does on its own when the autonomous roll lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureBehavior {
    ChaseTail,
    Sleep,
}

/// A [`CreatureBehavior`] together with its roll probability in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreatureAction {
    pub behavior: CreatureBehavior,
    pub weight: f64,
}

/// Any executable action. `Miss` is the always-available boredom
/// fallback; `Idle` is the do-nothing outcome of a failed autonomous
/// roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Player(PlayerAction),
    Creature(CreatureBehavior),
    Miss,
    Idle,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Player(PlayerAction::Feed { .. }) => "feed the pet",
            Action::Player(PlayerAction::GiveDrink { .. }) => "give the pet a drink",
            Action::Player(PlayerAction::Play) => "play with the pet",
            Action::Player(PlayerAction::Train) => "train the pet",
            Action::Player(PlayerAction::ScratchHead) => "scratch the pet's head",
            Action::Creature(CreatureBehavior::ChaseTail) => "chase its own tail",
            Action::Creature(CreatureBehavior::Sleep) => "sleep",
            Action::Miss => "mope around",
            Action::Idle => "idle",
        }
    }

    /// Display-asset reference for the presentation layer. Opaque to the
    /// core; passed through untouched.
    pub fn asset(&self) -> &'static str {
        match self {
            Action::Player(PlayerAction::Feed { .. }) => "images/btn1.png",
            Action::Player(PlayerAction::GiveDrink { .. }) => "images/btn2.png",
            Action::Player(PlayerAction::ScratchHead) => "images/btn3.png",
            Action::Player(PlayerAction::Play) => "images/btn5.png",
            Action::Player(PlayerAction::Train) => "images/btn6.png",
            Action::Creature(CreatureBehavior::ChaseTail) => "images/btn4.png",
            Action::Creature(CreatureBehavior::Sleep) => "images/pet_sleep.png",
            Action::Miss => "images/pet_miss.png",
            Action::Idle => "images/no_action.png",
        }
    }

    /// The fixed additive deltas this action applies.
    pub fn deltas(&self) -> Vec<(ParamKind, f64)> {
        match self {
            Action::Player(PlayerAction::Feed { amount }) => vec![
                (ParamKind::Satiety, *amount),
                (ParamKind::Tiredness, -2.0),
            ],
            Action::Player(PlayerAction::GiveDrink { amount }) => vec![
                (ParamKind::Thirst, -amount),
                (ParamKind::Tiredness, -1.0),
            ],
            Action::Player(PlayerAction::Play) => vec![
                (ParamKind::Mood, 1.5),
                (ParamKind::Satiety, -0.5),
                (ParamKind::Tiredness, 1.0),
                (ParamKind::Thirst, 0.5),
            ],
            Action::Player(PlayerAction::Train) => vec![
                (ParamKind::Mood, -0.5),
                (ParamKind::Satiety, -0.5),
                (ParamKind::Tiredness, 0.5),
                (ParamKind::Thirst, 0.5),
            ],
            Action::Player(PlayerAction::ScratchHead) => vec![(ParamKind::Mood, 1.0)],
            Action::Creature(CreatureBehavior::ChaseTail) => {
                vec![(ParamKind::Mood, 1.0), (ParamKind::Tiredness, 1.0)]
            }
            Action::Creature(CreatureBehavior::Sleep) => vec![(ParamKind::Tiredness, -3.0)],
            Action::Miss => vec![(ParamKind::Mood, -2.0)],
            Action::Idle => Vec::new(),
        }
    }

    /// Human-readable effect summary.
    pub fn message(&self, pet_name: &str) -> String {
        match self {
            Action::Player(PlayerAction::Feed { amount }) => {
                format!("you fed {pet_name} {amount:.1} units")
            }
            Action::Player(PlayerAction::GiveDrink { amount }) => {
                format!("you gave {pet_name} {amount:.1} units to drink")
            }
            Action::Player(PlayerAction::Play) => format!("you played with {pet_name}"),
            Action::Player(PlayerAction::Train) => format!("you trained {pet_name}"),
            Action::Player(PlayerAction::ScratchHead) => {
                format!("you scratched {pet_name}'s head")
            }
            Action::Creature(CreatureBehavior::ChaseTail) => {
                format!("{pet_name} chases its own tail")
            }
            Action::Creature(CreatureBehavior::Sleep) => format!("{pet_name} is sleeping"),
            Action::Miss => format!("{pet_name} is bored"),
            Action::Idle => format!("{pet_name} is idling"),
        }
    }
}
