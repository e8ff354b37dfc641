//! Console rendering of escort layout frames, for the demo binary and logs.

use engine_core::ScreenRect;

use crate::config::HudConfig;
use crate::layout::{Element, LayoutFrame, TextBinding};
use crate::objective::MAX_CONTROL_POINTS;

/// Draws a [`LayoutFrame`] as a one-line track plus a status line.
pub struct ConsoleHud {
    columns: usize,
    config: HudConfig,
}

impl ConsoleHud {
    pub fn new(config: HudConfig, columns: usize) -> Self {
        Self {
            columns: columns.max(2),
            config,
        }
    }

    /// Column a marker of `marker_wide` pixels at left edge `x` points at, if on the bar.
    fn column_for(&self, bar: &ScreenRect, x: f32, marker_wide: f32) -> Option<usize> {
        let fraction = (x + marker_wide / 2.0 - bar.x()) / bar.wide();
        if !(0.0..=1.0).contains(&fraction) {
            return None;
        }
        let col = (fraction * (self.columns - 1) as f32).round() as usize;
        Some(col.min(self.columns - 1))
    }

    fn cart_point_glyph(&self, image: Option<&str>) -> char {
        match image {
            Some(img) if img == self.config.icons.red => 'R',
            Some(img) if img == self.config.icons.blue => 'B',
            _ => 'o',
        }
    }

    pub fn render(&self, frame: &LayoutFrame, bar: &ScreenRect, now: f32) -> String {
        let mut track = vec!['='; self.columns];

        for i in 0..MAX_CONTROL_POINTS {
            let element = Element::ControlPoint(i);
            if frame.is_visible(element) != Some(true) {
                continue;
            }
            if let Some(col) = frame
                .position_of(element)
                .and_then(|x| self.column_for(bar, x, self.config.cp_icon_wide))
            {
                track[col] = self.cart_point_glyph(frame.image_of(element));
            }
        }

        let cart_fraction = frame
            .position_of(Element::EscortItem)
            .map(|x| (x + self.config.escort_item_wide / 2.0 - bar.x()) / bar.wide());
        if let Some(col) = frame
            .position_of(Element::EscortItem)
            .and_then(|x| self.column_for(bar, x, self.config.escort_item_wide))
        {
            track[col] = '@';
        }

        let mut output = String::new();
        output.push_str(&format!("[{}]\n", track.iter().collect::<String>()));

        let mut status = vec![format!("t={:6.1}s", now)];
        match cart_fraction {
            Some(f) if (0.0..=1.0).contains(&f) => status.push(format!("cart {:3.0}%", f * 100.0)),
            _ => status.push("cart --".to_string()),
        }
        if frame.is_visible(Element::CapNumPlayers) == Some(true) {
            status.push(format!("pushers x{}", frame.text(TextBinding::NumCappers).unwrap_or(0)));
        }
        if frame.is_visible(Element::Blocked) == Some(true) {
            status.push("BLOCKED".to_string());
        }
        if frame.is_visible(Element::SpeedBackwards) == Some(true) {
            status.push("<<< RECEDING".to_string());
        }
        if frame.is_visible(Element::RecedeTime) == Some(true) {
            status.push(format!("recede in {}s", frame.text(TextBinding::Recede).unwrap_or(0)));
        }
        output.push_str(&status.join("  |  "));
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HudConfig {
        HudConfig {
            escort_item_wide: 20.0,
            cp_icon_wide: 10.0,
            ..HudConfig::default()
        }
    }

    #[test]
    fn renders_cart_points_and_indicators() {
        let bar = ScreenRect::new(0.0, 0.0, 100.0, 8.0);
        let hud = ConsoleHud::new(config(), 11);
        let mut frame = LayoutFrame::new();
        frame.set_pos_x(Element::EscortItem, 20.0);
        frame.set_visible(Element::ControlPoint(0), true);
        frame.set_pos_x(Element::ControlPoint(0), 45.0);
        frame.set_image(Element::ControlPoint(0), "../hud/cart_point_red");
        frame.set_visible(Element::ControlPoint(1), false);
        frame.set_pos_x(Element::ControlPoint(1), 95.0);
        frame.set_visible(Element::CapNumPlayers, true);
        frame.set_text(TextBinding::NumCappers, 2);
        frame.set_visible(Element::RecedeTime, true);
        frame.set_text(TextBinding::Recede, 12);

        let out = hud.render(&frame, &bar, 3.0);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("[===@=R=====]"));
        let status = lines.next().unwrap();
        assert!(status.contains("cart  30%"));
        assert!(status.contains("pushers x2"));
        assert!(status.contains("recede in 12s"));
        assert!(!status.contains("BLOCKED"));
    }

    #[test]
    fn off_track_cart_is_not_drawn() {
        let bar = ScreenRect::new(0.0, 0.0, 100.0, 8.0);
        let hud = ConsoleHud::new(config(), 5);
        let mut frame = LayoutFrame::new();
        frame.set_pos_x(Element::EscortItem, -110.0);
        let out = hud.render(&frame, &bar, 0.0);
        assert!(out.starts_with("[=====]"));
        assert!(out.contains("cart --"));
    }
}
