//! Game events consumed by the escort overlay.
//!
//! Events arrive as named records with typed fields ([`GameEvent`]). The
//! overlay only cares about five of them, which [`HudEvent::from_game_event`]
//! splits into two categories: team-scoped escort events that must match the
//! tracked team, and global control-point events that always apply.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ESCORT_PROGRESS: &str = "escort_progress";
pub const ESCORT_SPEED: &str = "escort_speed";
pub const ESCORT_RECEDE: &str = "escort_recede";
pub const CONTROLPOINT_INITIALIZED: &str = "controlpoint_initialized";
pub const CONTROLPOINT_UPDATEIMAGES: &str = "controlpoint_updateimages";

/// A typed event field value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Bool(bool),
    Int(i32),
    Float(f32),
}

/// A named game event with typed fields. Missing fields read as zero / false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl GameEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), FieldValue::Bool(value));
        self
    }

    pub fn with_int(mut self, key: &str, value: i32) -> Self {
        self.fields.insert(key.to_string(), FieldValue::Int(value));
        self
    }

    pub fn with_float(mut self, key: &str, value: f32) -> Self {
        self.fields.insert(key.to_string(), FieldValue::Float(value));
        self
    }

    pub fn get_bool(&self, key: &str) -> bool {
        match self.fields.get(key) {
            Some(FieldValue::Bool(b)) => *b,
            Some(FieldValue::Int(i)) => *i != 0,
            Some(FieldValue::Float(f)) => *f != 0.0,
            None => false,
        }
    }

    pub fn get_int(&self, key: &str) -> i32 {
        match self.fields.get(key) {
            Some(FieldValue::Bool(b)) => i32::from(*b),
            Some(FieldValue::Int(i)) => *i,
            Some(FieldValue::Float(f)) => *f as i32,
            None => 0,
        }
    }

    pub fn get_float(&self, key: &str) -> f32 {
        match self.fields.get(key) {
            Some(FieldValue::Bool(b)) => f32::from(u8::from(*b)),
            Some(FieldValue::Int(i)) => *i as f32,
            Some(FieldValue::Float(f)) => *f,
            None => 0.0,
        }
    }

    // Constructors for the events the overlay listens to.

    pub fn escort_progress(team: i32, progress: f32, reset: bool) -> Self {
        Self::new(ESCORT_PROGRESS)
            .with_int("team", team)
            .with_float("progress", progress)
            .with_bool("reset", reset)
    }

    pub fn escort_speed(team: i32, players: i32, speed: i32) -> Self {
        Self::new(ESCORT_SPEED)
            .with_int("team", team)
            .with_int("players", players)
            .with_int("speed", speed)
    }

    pub fn escort_recede(team: i32, recede_time: f32) -> Self {
        Self::new(ESCORT_RECEDE)
            .with_int("team", team)
            .with_float("recedetime", recede_time)
    }

    pub fn controlpoint_initialized() -> Self {
        Self::new(CONTROLPOINT_INITIALIZED)
    }

    pub fn controlpoint_updateimages(index: i32) -> Self {
        Self::new(CONTROLPOINT_UPDATEIMAGES).with_int("index", index)
    }
}

/// Escort events that only apply to the team they are stamped with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscortEvent {
    Progress { reset: bool, progress: f32 },
    Speed { players: i32, speed: i32 },
    Recede { recede_time: f32 },
}

/// Control-point events that apply regardless of team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPointEvent {
    /// Track layout known or changed: recompute every slot.
    Initialized,
    /// Ownership changed for one slot. Negative index means every slot.
    UpdateImages { index: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HudEvent {
    Global(ControlPointEvent),
    TeamScoped { team: i32, event: EscortEvent },
}

impl HudEvent {
    /// Classify a raw game event. Returns `None` for events the overlay ignores.
    pub fn from_game_event(event: &GameEvent) -> Option<HudEvent> {
        let parsed = match event.name.as_str() {
            CONTROLPOINT_INITIALIZED => HudEvent::Global(ControlPointEvent::Initialized),
            CONTROLPOINT_UPDATEIMAGES => HudEvent::Global(ControlPointEvent::UpdateImages {
                index: event.get_int("index"),
            }),
            ESCORT_PROGRESS => HudEvent::TeamScoped {
                team: event.get_int("team"),
                event: EscortEvent::Progress {
                    reset: event.get_bool("reset"),
                    progress: event.get_float("progress"),
                },
            },
            ESCORT_SPEED => HudEvent::TeamScoped {
                team: event.get_int("team"),
                event: EscortEvent::Speed {
                    players: event.get_int("players"),
                    speed: event.get_int("speed"),
                },
            },
            ESCORT_RECEDE => HudEvent::TeamScoped {
                team: event.get_int("team"),
                event: EscortEvent::Recede {
                    recede_time: event.get_float("recedetime"),
                },
            },
            _ => return None,
        };
        Some(parsed)
    }
}
