//! Simulated payload round.
//!
//! Stands in for the game server: attackers push the cart along the track,
//! defenders block it, an idle cart recedes back to the last captured point,
//! and passing a control point captures it. Emits the same events a server
//! would broadcast.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::events::GameEvent;
use crate::objective::{ObjectiveResource, TrackObjectives};
use crate::script::EventSource;
use crate::team::Team;

/// Track fraction per second per speed level.
const PUSH_RATE: f32 = 0.006;
/// Track fraction per second while receding.
const RECEDE_RATE: f32 = 0.01;
/// Seconds an idle cart waits before rolling back.
const RECEDE_DELAY: f32 = 30.0;
const MAX_SPEED_LEVEL: i32 = 3;
/// Minimum progress change worth broadcasting.
const PROGRESS_EPSILON: f32 = 0.002;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pushers {
    Idle,
    Pushing(i32),
    Blocked,
}

pub struct RoundSimulation {
    rng: StdRng,
    objectives: TrackObjectives,
    attackers: Team,
    progress: f32,
    last_sent_progress: f32,
    pushers: Pushers,
    recede_deadline: Option<f32>,
    receding: bool,
    next_change: f32,
    started: bool,
    finished: bool,
}

impl RoundSimulation {
    /// A round on `objectives`, pushed by `attackers`, with a seeded RNG.
    pub fn new(objectives: TrackObjectives, attackers: Team, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            objectives,
            attackers,
            progress: 0.0,
            last_sent_progress: 0.0,
            pushers: Pushers::Idle,
            recede_deadline: None,
            receding: false,
            next_change: 0.0,
            started: false,
            finished: false,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress the cart cannot recede past: the furthest captured point.
    fn recede_floor(&self) -> f32 {
        (0..self.objectives.control_point_count())
            .filter(|&i| self.objectives.owning_team(i) == self.attackers)
            .map(|i| self.objectives.path_distance(i))
            .fold(0.0, f32::max)
    }

    fn team_id(&self) -> i32 {
        self.attackers.id()
    }

    fn speed_event(&self) -> GameEvent {
        let (players, speed) = match self.pushers {
            Pushers::Idle if self.receding => (0, -1),
            Pushers::Idle => (0, 0),
            Pushers::Pushing(n) => (n, n.min(MAX_SPEED_LEVEL)),
            Pushers::Blocked => (-1, 0),
        };
        GameEvent::escort_speed(self.team_id(), players, speed)
    }

    fn reroll_pushers(&mut self, now: f32, events: &mut Vec<GameEvent>) {
        self.pushers = if self.rng.gen_bool(0.15) {
            Pushers::Blocked
        } else {
            match self.rng.gen_range(0..=4) {
                0 => Pushers::Idle,
                n => Pushers::Pushing(n),
            }
        };
        self.next_change = now + self.rng.gen_range(3.0..10.0);

        match self.pushers {
            Pushers::Pushing(_) => {
                self.receding = false;
                if self.recede_deadline.take().is_some() {
                    events.push(GameEvent::escort_recede(self.team_id(), 0.0));
                }
            }
            Pushers::Idle if self.recede_deadline.is_none() => {
                let deadline = now + RECEDE_DELAY;
                self.recede_deadline = Some(deadline);
                events.push(GameEvent::escort_recede(self.team_id(), deadline));
            }
            _ => {}
        }
        log::debug!("t={:.1} pushers now {:?}", now, self.pushers);
        events.push(self.speed_event());
    }

    fn capture_passed_points(&mut self, events: &mut Vec<GameEvent>) {
        for i in 0..self.objectives.control_point_count() {
            if self.objectives.owning_team(i) != self.attackers
                && self.objectives.path_distance(i) <= self.progress
            {
                self.objectives.set_owner(i, self.attackers);
                log::info!("{} captured control point {}", self.attackers.name(), i);
                events.push(GameEvent::controlpoint_updateimages(i as i32));
            }
        }
    }
}

impl EventSource for RoundSimulation {
    fn poll(&mut self, now: f32, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }

        if !self.started {
            self.started = true;
            events.push(GameEvent::controlpoint_initialized());
            events.push(GameEvent::escort_progress(self.team_id(), 0.0, true));
            events.push(self.speed_event());
            self.next_change = now + self.rng.gen_range(1.0..4.0);
            return events;
        }

        if now >= self.next_change {
            self.reroll_pushers(now, &mut events);
        }

        match self.pushers {
            Pushers::Pushing(n) => {
                self.progress += PUSH_RATE * n.min(MAX_SPEED_LEVEL) as f32 * dt;
            }
            Pushers::Idle => {
                let deadline_passed = self.recede_deadline.is_some_and(|d| now >= d);
                let floor = self.recede_floor();
                if deadline_passed && self.progress > floor {
                    if !self.receding {
                        self.receding = true;
                        events.push(self.speed_event());
                    }
                    self.progress = (self.progress - RECEDE_RATE * dt).max(floor);
                } else if self.receding && self.progress <= floor {
                    self.receding = false;
                    events.push(self.speed_event());
                }
            }
            Pushers::Blocked => {}
        }
        self.progress = self.progress.min(1.0);

        if (self.progress - self.last_sent_progress).abs() >= PROGRESS_EPSILON
            || (self.progress >= 1.0 && self.last_sent_progress < 1.0)
        {
            self.last_sent_progress = self.progress;
            events.push(GameEvent::escort_progress(self.team_id(), self.progress, false));
        }

        self.capture_passed_points(&mut events);

        if self.progress >= 1.0 {
            log::info!("{} delivered the payload at t={:.1}", self.attackers.name(), now);
            self.finished = true;
        }
        events
    }

    fn objectives(&self) -> Option<&dyn ObjectiveResource> {
        Some(&self.objectives)
    }

    fn finished(&self) -> bool {
        self.finished
    }
}
