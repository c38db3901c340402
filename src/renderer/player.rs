//! Player drawing

use glam::Vec2;

use super::{Style, Surface};
use crate::sim::Player;

/// Translucent disc, opaque outline, then a line to the pointer.
///
/// Touches only the surface, never the player.
pub fn draw_player<S: Surface + ?Sized>(surface: &mut S, player: &Player, pointer: Vec2, style: &Style) {
    surface.fill_circle(player.pos, player.radius, &style.color, style.fill_alpha);
    surface.stroke_circle(player.pos, player.radius, &style.color, style.line_width);
    surface.line(player.pos, pointer, &style.color, style.line_width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DisplayList, DrawCmd};

    #[test]
    fn test_draw_order_and_style() {
        let player = Player::new(Vec2::new(100.0, 100.0));
        let pointer = Vec2::new(300.0, 50.0);
        let mut list = DisplayList::new();

        draw_player(&mut list, &player, pointer, &Style::default());

        assert_eq!(
            list.cmds,
            vec![
                DrawCmd::FillCircle {
                    center: player.pos,
                    radius: 50.0,
                    color: "white".into(),
                    alpha: 0.5,
                },
                DrawCmd::StrokeCircle {
                    center: player.pos,
                    radius: 50.0,
                    color: "white".into(),
                    line_width: 3.0,
                },
                DrawCmd::Line {
                    from: player.pos,
                    to: pointer,
                    color: "white".into(),
                    line_width: 3.0,
                },
            ]
        );
    }
}
