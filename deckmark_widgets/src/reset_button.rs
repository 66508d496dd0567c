use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::deck_view::point_in_rect;
use crate::theme::Theme;

pub const RESET_LABEL: &str = "\u{21bb} Reset All Cards"; // ↻

const BUTTON_WIDTH: u16 = 23;
const BUTTON_HEIGHT: u16 = 3;

/// The global "Reset All Cards" control, right-aligned in its row
pub struct ResetButtonWidget {
    pub hovered: bool,
}

impl ResetButtonWidget {
    pub fn new() -> Self {
        Self { hovered: false }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Where the button lands inside `area`
    pub fn button_rect(area: Rect) -> Rect {
        let width = BUTTON_WIDTH.min(area.width);
        let height = BUTTON_HEIGHT.min(area.height);
        Rect::new(area.right() - width, area.y, width, height)
    }

    pub fn hit_test(area: Rect, col: u16, row: u16) -> bool {
        let rect = Self::button_rect(area);
        rect.height == BUTTON_HEIGHT && point_in_rect(col, row, rect)
    }
}

impl Default for ResetButtonWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ResetButtonWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = Self::button_rect(area);
        if rect.width < 3 || rect.height < BUTTON_HEIGHT {
            return;
        }

        let color = if self.hovered {
            Theme::BUTTON_HOVER
        } else {
            Theme::BUTTON
        };
        let border_style = Style::default().fg(color);
        let text_style = Style::default()
            .fg(Theme::BRIGHT_TEXT)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        let inner_w = rect.width.saturating_sub(2);

        // Top border
        let mut top = String::from("\u{256d}"); // ╭
        top.push_str(&"\u{2500}".repeat(inner_w as usize)); // ─
        top.push('\u{256e}'); // ╮
        buf.set_string(rect.x, rect.y, &top, border_style);

        // Label row, filled with the button colour
        let y = rect.y + 1;
        buf.set_string(rect.x, y, "\u{2502}", border_style);
        buf.set_string(rect.x + 1, y, " ".repeat(inner_w as usize), text_style);
        let label: String = RESET_LABEL.chars().take(inner_w as usize).collect();
        let label_x = rect.x + 1 + inner_w.saturating_sub(label.chars().count() as u16) / 2;
        buf.set_string(label_x, y, &label, text_style);
        buf.set_string(rect.right() - 1, y, "\u{2502}", border_style);

        // Bottom border
        let mut bottom = String::from("\u{2570}"); // ╰
        bottom.push_str(&"\u{2500}".repeat(inner_w as usize));
        bottom.push('\u{256f}'); // ╯
        buf.set_string(rect.x, rect.y + 2, &bottom, border_style);
    }
}
