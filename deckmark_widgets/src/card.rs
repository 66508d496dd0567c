use deckmark_core::card::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Width and height of a tile in terminal cells
pub const TILE_WIDTH: u16 = 9;
pub const TILE_HEIGHT: u16 = 7;

pub const USED_LABEL: &str = "Used";
pub const USED_ICON: &str = "\u{2715}"; // ✕

/// One clickable card tile.
///
/// Unused cards render bright and pick up a double border while hovered.
/// Used cards render dimmed with a "Used" overlay and ignore hover.
pub struct CardTileWidget<'a> {
    pub card: &'a Card,
    pub hovered: bool,
}

impl<'a> CardTileWidget<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            hovered: false,
        }
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    fn show_hover(&self) -> bool {
        self.hovered && !self.card.is_used
    }

    fn suit_color(&self) -> Color {
        let red = self.card.suit().is_some_and(|s| s.is_red());
        match (self.card.is_used, red) {
            (true, _) => Theme::DIM_TEXT,
            (false, true) => Theme::RED_SUIT,
            (false, false) => Theme::BLACK_SUIT,
        }
    }

    fn border_style(&self) -> Style {
        if self.card.is_used {
            Style::default()
                .fg(Theme::CARD_USED_BORDER)
                .add_modifier(Modifier::DIM)
        } else if self.show_hover() {
            Style::default()
                .fg(Theme::CARD_HOVER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::CARD_BORDER)
        }
    }
}

impl Widget for CardTileWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < TILE_WIDTH || area.height < TILE_HEIGHT {
            return;
        }

        draw_frame(area, buf, self.border_style(), self.show_hover());

        let mut face = Style::default().fg(self.suit_color());
        if self.card.is_used {
            face = face.add_modifier(Modifier::DIM);
        } else if self.show_hover() {
            face = face.add_modifier(Modifier::BOLD);
        }
        let rank_style = face.add_modifier(Modifier::BOLD);

        let Some((rank, suit)) = self.card.id.rank_suit() else {
            // Not a standard card: show the name instead of pips
            let name: String = self.card.name.chars().take(TILE_WIDTH as usize - 2).collect();
            buf.set_string(area.x + 1, area.y + TILE_HEIGHT / 2, &name, face);
            return;
        };
        let rank = rank.short_name();
        let suit = suit.symbol().to_string();
        let rank_len = rank.len() as u16;

        // Top-left corner
        buf.set_string(area.x + 1, area.y + 1, rank, rank_style);
        buf.set_string(area.x + 1 + rank_len, area.y + 1, &suit, face);

        // Bottom-right corner
        let br_y = area.y + TILE_HEIGHT - 2;
        let br_x = area.x + TILE_WIDTH - 1 - rank_len;
        buf.set_string(br_x, br_y, rank, rank_style);
        buf.set_string(br_x - 1, br_y, &suit, face);

        if self.card.is_used {
            render_used_overlay(area, buf);
        } else {
            buf.set_string(
                area.x + TILE_WIDTH / 2,
                area.y + TILE_HEIGHT / 2,
                &suit,
                face,
            );
        }
    }
}

fn render_used_overlay(area: Rect, buf: &mut Buffer) {
    let label_style = Style::default()
        .fg(Theme::CARD_USED_TEXT)
        .bg(Theme::CARD_USED_OVERLAY)
        .add_modifier(Modifier::BOLD);
    let icon_style = Style::default()
        .fg(Theme::BRIGHT_TEXT)
        .bg(Theme::CARD_USED_BORDER)
        .add_modifier(Modifier::BOLD);

    let label_x = area.x + (TILE_WIDTH - USED_LABEL.len() as u16) / 2;
    buf.set_string(label_x, area.y + 2, USED_LABEL, label_style);

    // Icon sits in a small badge below the label
    let badge_x = area.x + TILE_WIDTH / 2 - 1;
    buf.set_string(badge_x, area.y + 4, " ", icon_style);
    buf.set_string(badge_x + 1, area.y + 4, USED_ICON, icon_style);
    buf.set_string(badge_x + 2, area.y + 4, " ", icon_style);
}

fn draw_frame(area: Rect, buf: &mut Buffer, style: Style, double: bool) {
    let (tl, tr, bl, br, h, v) = if double {
        ("\u{2554}", "\u{2557}", "\u{255a}", "\u{255d}", "\u{2550}", "\u{2551}") // ╔╗╚╝═║
    } else {
        ("\u{256d}", "\u{256e}", "\u{2570}", "\u{256f}", "\u{2500}", "\u{2502}") // ╭╮╰╯─│
    };
    let right = area.x + TILE_WIDTH - 1;
    let bottom = area.y + TILE_HEIGHT - 1;

    buf.set_string(area.x, area.y, tl, style);
    buf.set_string(right, area.y, tr, style);
    buf.set_string(area.x, bottom, bl, style);
    buf.set_string(right, bottom, br, style);
    for x in area.x + 1..right {
        buf.set_string(x, area.y, h, style);
        buf.set_string(x, bottom, h, style);
    }
    for y in area.y + 1..bottom {
        buf.set_string(area.x, y, v, style);
        buf.set_string(right, y, v, style);
        for x in area.x + 1..right {
            buf.set_string(x, y, " ", Style::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckmark_core::card::{Rank, Suit};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(card: &Card, hovered: bool) -> Buffer {
        let area = Rect::new(0, 0, TILE_WIDTH, TILE_HEIGHT);
        let mut buf = Buffer::empty(area);
        CardTileWidget::new(card).hovered(hovered).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_unused_tile_shows_pips() {
        let card = Card::new(Rank::Ten, Suit::Love);
        let buf = render(&card, false);
        assert!(row_text(&buf, 1).starts_with("\u{2502}10\u{2665}"));
        assert_eq!(buf[(TILE_WIDTH / 2, TILE_HEIGHT / 2)].symbol(), "\u{2665}");
        assert!(!row_text(&buf, 2).contains(USED_LABEL));
        assert_eq!(buf[(0, 0)].symbol(), "\u{256d}");
    }

    #[test]
    fn test_used_tile_shows_overlay() {
        let mut card = Card::new(Rank::Two, Suit::Diamond);
        card.is_used = true;
        let buf = render(&card, false);
        assert!(row_text(&buf, 2).contains(USED_LABEL));
        assert!(row_text(&buf, 4).contains(USED_ICON));
        assert!(buf[(0, 1)].modifier.contains(Modifier::DIM));
        assert_eq!(buf[(0, 0)].fg, Theme::CARD_USED_BORDER);
    }

    #[test]
    fn test_hover_uses_double_border() {
        let card = Card::new(Rank::Ace, Suit::Spade);
        let buf = render(&card, true);
        assert_eq!(buf[(0, 0)].symbol(), "\u{2554}");
        assert_eq!(buf[(0, 0)].fg, Theme::CARD_HOVER);
    }

    #[test]
    fn test_used_tile_ignores_hover() {
        let mut card = Card::new(Rank::Ace, Suit::Spade);
        card.is_used = true;
        let buf = render(&card, true);
        assert_eq!(buf[(0, 0)].symbol(), "\u{256d}");
    }

    #[test]
    fn test_too_small_area_draws_nothing() {
        let card = Card::new(Rank::Ace, Suit::Spade);
        let area = Rect::new(0, 0, TILE_WIDTH - 1, TILE_HEIGHT);
        let mut buf = Buffer::empty(area);
        CardTileWidget::new(&card).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
