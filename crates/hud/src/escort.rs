//! Escort state tracker: the last known state of the cart.
//!
//! Wire values use -1 sentinels ("blocked", "receding") and 0 for "no
//! deadline". They are decoded into explicit states here, so the sampler's
//! visibility checks never test a magic number. The raw player count is kept
//! only for the capper label.

use crate::events::EscortEvent;

/// Fraction used to place the cart before the first progress event.
pub const UNINITIALIZED_FRACTION: f32 = -1.0;

/// How far along the track the cart is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Progress {
    /// No progress event received yet.
    #[default]
    Uninitialized,
    /// Fraction of the track covered. Not clamped.
    At(f32),
}

impl Progress {
    /// Fraction to interpolate the marker with. Uninitialized parks the marker
    /// a full track width left of the bar.
    pub fn fraction(self) -> f32 {
        match self {
            Progress::Uninitialized => UNINITIALIZED_FRACTION,
            Progress::At(f) => f,
        }
    }
}

/// Who is at the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapperStatus {
    /// Nobody pushing.
    #[default]
    None,
    /// `n` players pushing.
    Active(u32),
    /// Defenders are contesting the cart.
    Blocked,
}

impl CapperStatus {
    /// Decode the `players` field. -1 is blocked; zero or other negatives mean nobody.
    pub fn from_players(players: i32) -> Self {
        match players {
            -1 => CapperStatus::Blocked,
            n if n > 0 => CapperStatus::Active(n as u32),
            _ => CapperStatus::None,
        }
    }

    pub fn has_cappers(self) -> bool {
        matches!(self, CapperStatus::Active(_))
    }

    pub fn is_blocked(self) -> bool {
        self == CapperStatus::Blocked
    }
}

/// Cart speed as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartSpeed {
    Level(i32),
    Receding,
}

impl Default for CartSpeed {
    fn default() -> Self {
        CartSpeed::Level(0)
    }
}

impl CartSpeed {
    pub fn from_level(speed: i32) -> Self {
        if speed == -1 {
            CartSpeed::Receding
        } else {
            CartSpeed::Level(speed)
        }
    }

    pub fn is_receding(self) -> bool {
        self == CartSpeed::Receding
    }
}

/// Last known escort state for the tracked team.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EscortState {
    pub progress: Progress,
    pub cappers: CapperStatus,
    /// `players` exactly as last received, bound into the capper label.
    pub capper_count: i32,
    pub speed: CartSpeed,
    /// Absolute game time at which the cart starts receding.
    pub recede_deadline: Option<f32>,
}

impl EscortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one team-scoped event. Last write wins for every field.
    pub fn apply(&mut self, event: &EscortEvent) {
        match *event {
            EscortEvent::Progress { reset, progress } => {
                self.progress = Progress::At(if reset { 0.0 } else { progress });
            }
            EscortEvent::Speed { players, speed } => {
                self.cappers = CapperStatus::from_players(players);
                self.capper_count = players;
                self.speed = CartSpeed::from_level(speed);
            }
            EscortEvent::Recede { recede_time } => {
                self.recede_deadline = (recede_time != 0.0).then_some(recede_time);
            }
        }
    }

    /// Seconds left before the cart recedes, never negative. Zero when no deadline is set.
    pub fn recede_time_left(&self, now: f32) -> f32 {
        self.recede_deadline
            .map(|deadline| (deadline - now).max(0.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized() {
        let state = EscortState::new();
        assert_eq!(state.progress, Progress::Uninitialized);
        assert_eq!(state.progress.fraction(), -1.0);
        assert_eq!(state.cappers, CapperStatus::None);
        assert_eq!(state.capper_count, 0);
        assert_eq!(state.speed, CartSpeed::Level(0));
        assert_eq!(state.recede_deadline, None);
    }

    #[test]
    fn reset_overrides_supplied_progress() {
        let mut state = EscortState::new();
        state.apply(&EscortEvent::Progress { reset: false, progress: 0.6 });
        state.apply(&EscortEvent::Progress { reset: true, progress: 0.9 });
        assert_eq!(state.progress, Progress::At(0.0));
    }

    #[test]
    fn progress_is_stored_unvalidated() {
        let mut state = EscortState::new();
        state.apply(&EscortEvent::Progress { reset: false, progress: 1.4 });
        assert_eq!(state.progress.fraction(), 1.4);
        state.apply(&EscortEvent::Progress { reset: false, progress: -0.2 });
        assert_eq!(state.progress.fraction(), -0.2);
    }

    #[test]
    fn speed_decodes_sentinels() {
        let mut state = EscortState::new();
        state.apply(&EscortEvent::Speed { players: -1, speed: -1 });
        assert!(state.cappers.is_blocked());
        assert!(state.speed.is_receding());

        state.apply(&EscortEvent::Speed { players: 3, speed: 2 });
        assert_eq!(state.cappers, CapperStatus::Active(3));
        assert_eq!(state.speed, CartSpeed::Level(2));
        assert!(state.cappers.has_cappers());
    }

    #[test]
    fn other_negative_player_counts_mean_nobody() {
        assert_eq!(CapperStatus::from_players(-4), CapperStatus::None);
        assert_eq!(CapperStatus::from_players(0), CapperStatus::None);
    }

    #[test]
    fn raw_player_count_is_kept_as_is() {
        let mut state = EscortState::new();
        state.apply(&EscortEvent::Speed { players: -4, speed: 0 });
        assert_eq!(state.cappers, CapperStatus::None);
        assert_eq!(state.capper_count, -4);
        state.apply(&EscortEvent::Speed { players: -1, speed: 0 });
        assert_eq!(state.capper_count, -1);
    }

    #[test]
    fn recede_time_left_clamps_at_zero() {
        let mut state = EscortState::new();
        assert_eq!(state.recede_time_left(50.0), 0.0);
        state.apply(&EscortEvent::Recede { recede_time: 145.0 });
        assert!((state.recede_time_left(120.0) - 25.0).abs() < 1e-4);
        assert_eq!(state.recede_time_left(146.0), 0.0);
    }

    #[test]
    fn zero_recede_time_clears_deadline() {
        let mut state = EscortState::new();
        state.apply(&EscortEvent::Recede { recede_time: 80.0 });
        state.apply(&EscortEvent::Recede { recede_time: 0.0 });
        assert_eq!(state.recede_deadline, None);
    }
}
