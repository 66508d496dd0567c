use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Full-screen vertical gradient, indigo at the top through purple to pink
pub struct BackgroundWidget;

impl Widget for BackgroundWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span = area.height.saturating_sub(1).max(1) as f64;

        for y in area.top()..area.bottom() {
            let t = (y - area.top()) as f64 / span;
            let color = if t < 0.5 {
                lerp(Theme::BG_TOP, Theme::BG_MID, t * 2.0)
            } else {
                lerp(Theme::BG_MID, Theme::BG_BOTTOM, (t - 0.5) * 2.0)
            };
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(color);
                }
            }
        }
    }
}

fn lerp(from: Color, to: Color, t: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let area = Rect::new(0, 0, 4, 11);
        let mut buf = Buffer::empty(area);
        BackgroundWidget.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].bg, Theme::BG_TOP);
        assert_eq!(buf[(3, 5)].bg, Theme::BG_MID);
        assert_eq!(buf[(2, 10)].bg, Theme::BG_BOTTOM);
    }
}
