//! Timed event scripts and the sources that feed events to the overlay.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::events::GameEvent;
use crate::objective::{ObjectiveResource, TrackObjectives};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("could not read event script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid event script: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Anything that produces game events as the clock advances.
pub trait EventSource {
    /// Events due at or before `now`, in delivery order.
    fn poll(&mut self, now: f32, dt: f32) -> Vec<GameEvent>;
    /// Objective resource backing control-point events, if ready.
    fn objectives(&self) -> Option<&dyn ObjectiveResource>;
    fn finished(&self) -> bool;
}

/// One event and the game time it fires at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub at: f32,
    pub event: GameEvent,
}

/// A recorded or hand-written round: the objective table plus timed events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub control_points: TrackObjectives,
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

impl EventScript {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_ron(&data)
    }

    pub fn from_ron(data: &str) -> Result<Self, ScriptError> {
        let mut script: EventScript = ron::from_str(data)?;
        // Stable: events sharing a timestamp keep their written order.
        script.events.sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(script)
    }
}

/// Replays an [`EventScript`] against the game clock.
pub struct ScriptPlayback {
    script: EventScript,
    cursor: usize,
}

impl ScriptPlayback {
    pub fn new(script: EventScript) -> Self {
        log::info!(
            "Loaded event script: {} events, {} control points",
            script.events.len(),
            script.control_points.control_point_count()
        );
        Self { script, cursor: 0 }
    }

    /// Time of the last scripted event.
    pub fn duration(&self) -> f32 {
        self.script.events.last().map_or(0.0, |e| e.at)
    }
}

impl EventSource for ScriptPlayback {
    fn poll(&mut self, now: f32, _dt: f32) -> Vec<GameEvent> {
        let due = self.script.events[self.cursor..]
            .iter()
            .take_while(|e| e.at <= now)
            .count();
        let events = self.script.events[self.cursor..self.cursor + due]
            .iter()
            .map(|e| e.event.clone())
            .collect();
        self.cursor += due;
        events
    }

    fn objectives(&self) -> Option<&dyn ObjectiveResource> {
        Some(&self.script.control_points)
    }

    fn finished(&self) -> bool {
        self.cursor >= self.script.events.len()
    }
}
