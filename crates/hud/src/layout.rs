//! Layout commands handed to the presentation layer, and the display context
//! the overlay queries each tick.

use engine_core::ScreenRect;

use crate::team::Team;

/// A widget owned by the escort overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Panel holding the cart icon and its indicators; slides along the track.
    EscortItem,
    CapNumPlayers,
    CapPlayerImage,
    /// Cart moving backwards.
    SpeedBackwards,
    Blocked,
    RecedeTime,
    ControlPoint(usize),
}

/// Text variables bound into labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextBinding {
    NumCappers,
    Recede,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutCommand {
    SetPosX { element: Element, x: f32 },
    SetVisible { element: Element, visible: bool },
    SetImage { element: Element, image: String },
    SetText { binding: TextBinding, value: i32 },
}

/// Ordered layout commands produced by one sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutFrame {
    commands: Vec<LayoutCommand>,
}

impl LayoutFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pos_x(&mut self, element: Element, x: f32) {
        self.commands.push(LayoutCommand::SetPosX { element, x });
    }

    pub fn set_visible(&mut self, element: Element, visible: bool) {
        self.commands.push(LayoutCommand::SetVisible { element, visible });
    }

    pub fn set_image(&mut self, element: Element, image: impl Into<String>) {
        self.commands.push(LayoutCommand::SetImage {
            element,
            image: image.into(),
        });
    }

    pub fn set_text(&mut self, binding: TextBinding, value: i32) {
        self.commands.push(LayoutCommand::SetText { binding, value });
    }

    pub fn commands(&self) -> &[LayoutCommand] {
        &self.commands
    }

    // Queries return the last value written for an element, as a toolkit would apply them.

    pub fn position_of(&self, element: Element) -> Option<f32> {
        self.commands.iter().rev().find_map(|c| match c {
            LayoutCommand::SetPosX { element: e, x } if *e == element => Some(*x),
            _ => None,
        })
    }

    pub fn is_visible(&self, element: Element) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            LayoutCommand::SetVisible { element: e, visible } if *e == element => Some(*visible),
            _ => None,
        })
    }

    pub fn image_of(&self, element: Element) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            LayoutCommand::SetImage { element: e, image } if *e == element => Some(image.as_str()),
            _ => None,
        })
    }

    pub fn text(&self, binding: TextBinding) -> Option<i32> {
        self.commands.iter().rev().find_map(|c| match c {
            LayoutCommand::SetText { binding: b, value } if *b == binding => Some(*value),
            _ => None,
        })
    }
}

/// What the overlay needs to know about the screen it is drawn on.
pub trait DisplayContext {
    /// Freeze-cam / spectator cutaway: the overlay must not update at all.
    fn is_in_suppressed_display_mode(&self) -> bool;
    /// Current bounds of the reference track bar, if the layout has one.
    fn track_bounds(&self) -> Option<ScreenRect>;
}

/// Team-specific layout variant requested from the layout toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutCondition {
    TeamRed,
    TeamBlue,
}

impl LayoutCondition {
    /// Only the playing teams have a dedicated layout.
    pub fn for_team(team: Team) -> Option<Self> {
        match team {
            Team::Red => Some(LayoutCondition::TeamRed),
            Team::Blue => Some(LayoutCondition::TeamBlue),
            Team::Unassigned | Team::Spectator => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            LayoutCondition::TeamRed => "if_team_red",
            LayoutCondition::TeamBlue => "if_team_blue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_queries_return_last_write() {
        let mut frame = LayoutFrame::new();
        frame.set_visible(Element::Blocked, true);
        frame.set_pos_x(Element::EscortItem, 12.0);
        frame.set_visible(Element::Blocked, false);
        frame.set_text(TextBinding::Recede, 4);
        assert_eq!(frame.is_visible(Element::Blocked), Some(false));
        assert_eq!(frame.position_of(Element::EscortItem), Some(12.0));
        assert_eq!(frame.text(TextBinding::Recede), Some(4));
        assert_eq!(frame.text(TextBinding::NumCappers), None);
        assert_eq!(frame.image_of(Element::ControlPoint(0)), None);
    }

    #[test]
    fn layout_condition_only_for_playing_teams() {
        assert_eq!(LayoutCondition::for_team(Team::Red).map(|c| c.key()), Some("if_team_red"));
        assert_eq!(LayoutCondition::for_team(Team::Blue).map(|c| c.key()), Some("if_team_blue"));
        assert_eq!(LayoutCondition::for_team(Team::Spectator), None);
    }
}
