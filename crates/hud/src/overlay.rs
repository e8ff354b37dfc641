//! The payload escort overlay.
//!
//! Events mutate stored state as they arrive; nothing is drawn until the next
//! [`EscortOverlay::sample`], which turns that state plus the current time and
//! track geometry into a [`LayoutFrame`].

use crate::config::HudConfig;
use crate::control_points::ControlPointViews;
use crate::escort::EscortState;
use crate::events::{ControlPointEvent, EscortEvent, GameEvent, HudEvent};
use crate::layout::{DisplayContext, Element, LayoutCondition, LayoutFrame, TextBinding};
use crate::objective::ObjectiveResource;
use crate::team::Team;

pub struct EscortOverlay {
    config: HudConfig,
    team: Team,
    layout_condition: Option<LayoutCondition>,
    /// Overlay's own visibility, independent of the display context.
    visible: bool,
    state: EscortState,
    control_points: ControlPointViews,
}

impl EscortOverlay {
    pub fn new(config: HudConfig) -> Self {
        let team = config.tracked_team;
        let control_points = ControlPointViews::new(config.cp_icon_wide);
        Self {
            team,
            layout_condition: LayoutCondition::for_team(team),
            visible: true,
            state: EscortState::new(),
            control_points,
            config,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// Follow another team's cart. Stored escort state is kept until that team's next events.
    pub fn set_team(&mut self, team: Team) {
        if team == self.team {
            return;
        }
        self.team = team;
        self.layout_condition = LayoutCondition::for_team(team);
        log::info!(
            "Escort HUD now tracking {} (layout condition: {})",
            team.name(),
            self.layout_condition.map_or("none", LayoutCondition::key)
        );
    }

    /// Layout variant to request from the layout toolkit for the tracked team.
    pub fn layout_condition(&self) -> Option<LayoutCondition> {
        self.layout_condition
    }

    /// Apply the control-point icon template width to every slot.
    pub fn apply_control_point_template(&mut self, icon_wide: f32) {
        self.config.cp_icon_wide = icon_wide;
        self.control_points.apply_template(icon_wide);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Eligible for display: own flag on and not in a freeze/spectator cutaway.
    pub fn is_visible(&self, ctx: &dyn DisplayContext) -> bool {
        self.visible && !ctx.is_in_suppressed_display_mode()
    }

    pub fn state(&self) -> &EscortState {
        &self.state
    }

    pub fn control_points(&self) -> &ControlPointViews {
        &self.control_points
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Feed one game event. Unknown events and other teams' escort events are ignored.
    pub fn handle_event(
        &mut self,
        event: &GameEvent,
        objectives: Option<&dyn ObjectiveResource>,
        ctx: &dyn DisplayContext,
    ) {
        match HudEvent::from_game_event(event) {
            Some(HudEvent::Global(cp_event)) => {
                self.handle_control_point_event(cp_event, objectives, ctx)
            }
            Some(HudEvent::TeamScoped { team, event }) => self.handle_escort_event(team, &event),
            None => log::trace!("Escort HUD ignoring event {}", event.name),
        }
    }

    fn handle_control_point_event(
        &mut self,
        event: ControlPointEvent,
        objectives: Option<&dyn ObjectiveResource>,
        ctx: &dyn DisplayContext,
    ) {
        match event {
            ControlPointEvent::Initialized => {
                log::debug!("Control points initialized, recomputing all slots");
                self.control_points
                    .refresh(objectives, ctx.track_bounds(), true, None);
            }
            ControlPointEvent::UpdateImages { index } => {
                let only_index = usize::try_from(index).ok();
                self.control_points.refresh(objectives, None, false, only_index);
            }
        }
    }

    fn handle_escort_event(&mut self, team: i32, event: &EscortEvent) {
        if team != self.team.id() {
            return;
        }
        self.state.apply(event);
    }

    /// Produce this tick's layout. `None` when the overlay is not eligible for display.
    pub fn sample(&self, now: f32, ctx: &dyn DisplayContext) -> Option<LayoutFrame> {
        if !self.is_visible(ctx) {
            return None;
        }

        let mut frame = LayoutFrame::new();

        // Centre the cart panel so its arrow points at the cart's spot on the track.
        if let Some(bar) = ctx.track_bounds() {
            let x = bar.centered_marker_x(self.state.progress.fraction(), self.config.escort_item_wide);
            frame.set_pos_x(Element::EscortItem, x);
        }

        let recede_left = self.state.recede_time_left(now);
        frame.set_text(TextBinding::Recede, recede_left.ceil() as i32);
        let show_countdown = recede_left > 0.0 && recede_left < self.config.recede_warning_seconds;
        frame.set_visible(Element::RecedeTime, show_countdown);

        let cappers = self.state.cappers;
        frame.set_text(TextBinding::NumCappers, self.state.capper_count);
        frame.set_visible(Element::CapNumPlayers, cappers.has_cappers());
        frame.set_visible(Element::CapPlayerImage, cappers.has_cappers());
        frame.set_visible(Element::Blocked, cappers.is_blocked());
        frame.set_visible(Element::SpeedBackwards, self.state.speed.is_receding());

        for (i, view) in self.control_points.iter() {
            let element = Element::ControlPoint(i);
            frame.set_visible(element, view.visible);
            if let Some(x) = view.screen_x {
                frame.set_pos_x(element, x);
            }
            if let Some(icon) = view.icon {
                frame.set_image(element, self.config.icons.asset(icon));
            }
        }

        Some(frame)
    }
}
