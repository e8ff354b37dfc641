//! Objective resource: the authoritative control-point table.

use serde::{Deserialize, Serialize};

use crate::team::Team;

/// Maximum number of control points a map can have.
pub const MAX_CONTROL_POINTS: usize = 8;

/// Read-only view of the round's control points, indexed by stable slot id.
pub trait ObjectiveResource {
    fn control_point_count(&self) -> usize;
    fn is_mini_round_mode(&self) -> bool;
    fn is_control_point_visible(&self, index: usize) -> bool;
    /// Normalised distance of the point along the cart path.
    fn path_distance(&self, index: usize) -> f32;
    fn owning_team(&self, index: usize) -> Team;
}

/// One control point on the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPointInfo {
    pub path_distance: f32,
    #[serde(default)]
    pub owner: Team,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl ControlPointInfo {
    pub fn new(path_distance: f32, owner: Team) -> Self {
        Self {
            path_distance,
            owner,
            visible: true,
        }
    }
}

/// In-memory objective table for a single payload track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackObjectives {
    pub points: Vec<ControlPointInfo>,
    #[serde(default)]
    pub mini_rounds: bool,
}

impl TrackObjectives {
    pub fn new(points: Vec<ControlPointInfo>) -> Self {
        if points.len() > MAX_CONTROL_POINTS {
            log::warn!(
                "Track has {} control points, only the first {} are shown",
                points.len(),
                MAX_CONTROL_POINTS
            );
        }
        Self {
            points,
            mini_rounds: false,
        }
    }

    /// Evenly spaced points between the start and the end of the track, owned by `owner`.
    pub fn evenly_spaced(count: usize, owner: Team) -> Self {
        let points = (1..=count)
            .map(|i| ControlPointInfo::new(i as f32 / count as f32, owner))
            .collect();
        Self::new(points)
    }

    /// Change ownership. Returns false for an unknown index.
    pub fn set_owner(&mut self, index: usize, owner: Team) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.owner = owner;
                true
            }
            None => false,
        }
    }
}

impl ObjectiveResource for TrackObjectives {
    fn control_point_count(&self) -> usize {
        self.points.len()
    }

    fn is_mini_round_mode(&self) -> bool {
        self.mini_rounds
    }

    fn is_control_point_visible(&self, index: usize) -> bool {
        self.points.get(index).is_some_and(|p| p.visible)
    }

    fn path_distance(&self, index: usize) -> f32 {
        self.points.get(index).map_or(0.0, |p| p.path_distance)
    }

    fn owning_team(&self, index: usize) -> Team {
        self.points.get(index).map_or(Team::Unassigned, |p| p.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_ends_at_track_end() {
        let track = TrackObjectives::evenly_spaced(4, Team::Red);
        assert_eq!(track.control_point_count(), 4);
        assert!((track.path_distance(0) - 0.25).abs() < 1e-6);
        assert!((track.path_distance(3) - 1.0).abs() < 1e-6);
        assert_eq!(track.owning_team(2), Team::Red);
    }

    #[test]
    fn unknown_index_reads_as_neutral_and_hidden() {
        let track = TrackObjectives::evenly_spaced(2, Team::Red);
        assert_eq!(track.owning_team(5), Team::Unassigned);
        assert!(!track.is_control_point_visible(5));
        assert_eq!(track.path_distance(5), 0.0);
    }

    #[test]
    fn set_owner_rejects_unknown_index() {
        let mut track = TrackObjectives::evenly_spaced(2, Team::Red);
        assert!(track.set_owner(1, Team::Blue));
        assert!(!track.set_owner(2, Team::Blue));
        assert_eq!(track.owning_team(1), Team::Blue);
    }
}
