//! Control-point markers along the track.
//!
//! Two refresh speeds: a full refresh recomputes which slots exist and where
//! they sit on the bar (rare, track layout changes), an icon refresh only
//! re-reads ownership (frequent, captures).

use engine_core::ScreenRect;

use crate::objective::{ObjectiveResource, MAX_CONTROL_POINTS};
use crate::team::Team;

/// Icon variant for a control point, chosen by owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartPointIcon {
    Red,
    Blue,
    #[default]
    Neutral,
}

impl CartPointIcon {
    pub fn for_owner(owner: Team) -> Self {
        match owner {
            Team::Red => CartPointIcon::Red,
            Team::Blue => CartPointIcon::Blue,
            _ => CartPointIcon::Neutral,
        }
    }
}

/// Retained state of one control-point slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlPointView {
    pub visible: bool,
    /// Left edge on screen; `None` until the first positioned refresh.
    pub screen_x: Option<f32>,
    pub owner: Team,
    /// `None` until ownership has been read once.
    pub icon: Option<CartPointIcon>,
}

/// Fixed set of control-point slots, all sharing one icon template.
#[derive(Debug, Clone)]
pub struct ControlPointViews {
    slots: [ControlPointView; MAX_CONTROL_POINTS],
    icon_wide: f32,
}

impl ControlPointViews {
    pub fn new(icon_wide: f32) -> Self {
        Self {
            slots: [ControlPointView::default(); MAX_CONTROL_POINTS],
            icon_wide,
        }
    }

    /// Apply the shared icon template to every slot.
    pub fn apply_template(&mut self, icon_wide: f32) {
        self.icon_wide = icon_wide;
    }

    pub fn get(&self, index: usize) -> Option<&ControlPointView> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ControlPointView)> {
        self.slots.iter().enumerate()
    }

    /// Refresh slots from the objective resource.
    ///
    /// `full_refresh` recomputes visibility and position; otherwise only the
    /// icon is updated. `only_index` restricts the refresh to one slot. No
    /// resource yet means nothing to update.
    pub fn refresh(
        &mut self,
        resource: Option<&dyn ObjectiveResource>,
        track: Option<ScreenRect>,
        full_refresh: bool,
        only_index: Option<usize>,
    ) {
        let Some(resource) = resource else {
            log::debug!("Objective resource not ready, skipping control point refresh");
            return;
        };

        if let Some(index) = only_index {
            if index >= MAX_CONTROL_POINTS {
                log::debug!("Ignoring refresh for out of range control point {}", index);
                return;
            }
        }

        let count = resource.control_point_count();
        let mini_rounds = resource.is_mini_round_mode();
        let icon_wide = self.icon_wide;

        for (i, slot) in self.slots.iter_mut().enumerate() {
            if only_index.is_some_and(|index| index != i) {
                continue;
            }

            if full_refresh {
                let hidden = i >= count || (mini_rounds && !resource.is_control_point_visible(i));
                slot.visible = !hidden;
                if !hidden {
                    if let Some(bar) = track {
                        slot.screen_x =
                            Some(bar.centered_marker_x(resource.path_distance(i), icon_wide));
                    }
                }
            }

            // Ownership is tracked for hidden slots too.
            slot.owner = resource.owning_team(i);
            slot.icon = Some(CartPointIcon::for_owner(slot.owner));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{ControlPointInfo, TrackObjectives};

    fn bar() -> Option<ScreenRect> {
        Some(ScreenRect::new(100.0, 0.0, 200.0, 10.0))
    }

    fn three_points() -> TrackObjectives {
        TrackObjectives::new(vec![
            ControlPointInfo::new(0.25, Team::Red),
            ControlPointInfo::new(0.5, Team::Red),
            ControlPointInfo::new(1.0, Team::Red),
        ])
    }

    #[test]
    fn no_resource_is_a_no_op() {
        let mut views = ControlPointViews::new(16.0);
        views.refresh(None, bar(), true, None);
        assert!(views.iter().all(|(_, v)| *v == ControlPointView::default()));
    }

    #[test]
    fn full_refresh_positions_existing_points_and_hides_the_rest() {
        let track = three_points();
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), bar(), true, None);

        let first = views.get(0).unwrap();
        assert!(first.visible);
        assert_eq!(first.screen_x, Some(100.0 + 50.0 - 8.0));
        assert_eq!(views.get(2).unwrap().screen_x, Some(292.0));

        for i in 3..MAX_CONTROL_POINTS {
            assert!(!views.get(i).unwrap().visible, "slot {} should be hidden", i);
        }
    }

    #[test]
    fn reinitialize_hides_slots_dropped_from_the_table() {
        let mut track = three_points();
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), bar(), true, None);
        assert!((0..3).all(|i| views.get(i).unwrap().visible));
        let old_x = [views.get(1).unwrap().screen_x, views.get(2).unwrap().screen_x];

        track.points.truncate(1);
        views.refresh(Some(&track), bar(), true, None);

        assert!(views.get(0).unwrap().visible);
        assert!(!views.get(1).unwrap().visible);
        assert!(!views.get(2).unwrap().visible);
        assert_eq!(views.get(1).unwrap().screen_x, old_x[0]);
        assert_eq!(views.get(2).unwrap().screen_x, old_x[1]);
    }

    #[test]
    fn reinitialize_hides_shown_slots_leaving_the_mini_round() {
        let mut track = three_points();
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), bar(), true, None);
        assert!(views.get(1).unwrap().visible);
        let old_x = views.get(1).unwrap().screen_x;

        track.mini_rounds = true;
        track.points[1].visible = false;
        track.points[1].path_distance = 0.9;
        views.refresh(Some(&track), bar(), true, None);

        assert!(!views.get(1).unwrap().visible);
        assert_eq!(views.get(1).unwrap().screen_x, old_x);
        assert!(views.get(0).unwrap().visible);
        assert!(views.get(2).unwrap().visible);
    }

    #[test]
    fn mini_rounds_hide_points_outside_the_current_round() {
        let mut track = three_points();
        track.mini_rounds = true;
        track.points[1].visible = false;
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), bar(), true, None);
        assert!(views.get(0).unwrap().visible);
        assert!(!views.get(1).unwrap().visible);
        assert!(views.get(2).unwrap().visible);
    }

    #[test]
    fn invisible_points_still_show_outside_mini_rounds() {
        let mut track = three_points();
        track.points[1].visible = false;
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), bar(), true, None);
        assert!(views.get(1).unwrap().visible);
    }

    #[test]
    fn icon_refresh_updates_one_slot_without_moving_anything() {
        let mut track = three_points();
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), bar(), true, None);
        let before = views.clone();

        track.set_owner(0, Team::Blue);
        track.set_owner(1, Team::Blue);
        track.points[1].path_distance = 0.9;
        let moved_bar = Some(ScreenRect::new(0.0, 0.0, 500.0, 10.0));
        views.refresh(Some(&track), moved_bar, false, Some(1));

        assert_eq!(views.get(1).unwrap().icon, Some(CartPointIcon::Blue));
        assert_eq!(views.get(0).unwrap().icon, Some(CartPointIcon::Red));
        for i in 0..MAX_CONTROL_POINTS {
            assert_eq!(views.get(i).unwrap().screen_x, before.get(i).unwrap().screen_x);
            assert_eq!(views.get(i).unwrap().visible, before.get(i).unwrap().visible);
        }
    }

    #[test]
    fn hidden_slots_still_get_owner_icons() {
        let track = three_points();
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), bar(), true, None);
        let hidden = views.get(5).unwrap();
        assert!(!hidden.visible);
        assert_eq!(hidden.icon, Some(CartPointIcon::Neutral));
    }

    #[test]
    fn full_refresh_without_track_keeps_positions_unset() {
        let track = three_points();
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), None, true, None);
        assert!(views.get(0).unwrap().visible);
        assert_eq!(views.get(0).unwrap().screen_x, None);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let track = three_points();
        let mut views = ControlPointViews::new(16.0);
        views.refresh(Some(&track), bar(), false, Some(MAX_CONTROL_POINTS + 3));
        assert!(views.iter().all(|(_, v)| v.icon.is_none()));
    }

    #[test]
    fn template_width_applies_to_next_positioning() {
        let track = three_points();
        let mut views = ControlPointViews::new(16.0);
        views.apply_template(30.0);
        views.refresh(Some(&track), bar(), true, None);
        assert_eq!(views.get(1).unwrap().screen_x, Some(200.0 - 15.0));
    }
}
