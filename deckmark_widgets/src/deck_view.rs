use deckmark_core::card::{Card, CardId};
use deckmark_core::deck::Deck;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget};

use crate::card::{CardTileWidget, TILE_HEIGHT, TILE_WIDTH};
use crate::theme::Theme;

/// Horizontal gap between tiles
pub const TILE_GAP: u16 = 1;

/// Column counts tried from widest to narrowest
const COLUMN_STEPS: [u16; 3] = [8, 4, 2];

const PANEL_PADDING: u16 = 1;

/// A deck panel: title, optional description and a grid of tiles in deck order.
///
/// Geometry helpers (`height_for`, `tile_rect`, `hit_test`) use the same math
/// as `render`, so callers can map pointer positions back to cards.
pub struct DeckViewWidget<'a> {
    pub deck: &'a Deck,
    pub hovered: Option<&'a CardId>,
}

impl<'a> DeckViewWidget<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        Self {
            deck,
            hovered: None,
        }
    }

    pub fn hovered(mut self, hovered: Option<&'a CardId>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Widest grid that fits in `width` cells
    pub fn columns_for(width: u16) -> u16 {
        COLUMN_STEPS
            .into_iter()
            .find(|&cols| grid_width(cols) <= width)
            .unwrap_or(1)
    }

    fn block(&self) -> Block<'a> {
        let title = Line::from(Span::styled(
            format!(" {} ", self.deck.name),
            Style::default()
                .fg(Theme::TITLE)
                .add_modifier(Modifier::BOLD),
        ));
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::CARD_BORDER))
            .style(Style::default().bg(Theme::PANEL_BG))
            .title(title)
            .padding(Padding::horizontal(PANEL_PADDING))
    }

    fn header_height(&self) -> u16 {
        // Description plus a spacer line
        if self.deck.description.is_some() {
            2
        } else {
            0
        }
    }

    fn rows(&self, columns: u16) -> u16 {
        let n = self.deck.len() as u16;
        n.div_ceil(columns)
    }

    /// Total height needed to show every tile at the given panel width
    pub fn height_for(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2 + 2 * PANEL_PADDING);
        let columns = Self::columns_for(inner_width);
        2 + self.header_height() + self.rows(columns) * TILE_HEIGHT
    }

    fn grid_area(&self, area: Rect) -> Rect {
        let inner = self.block().inner(area);
        let header = self.header_height().min(inner.height);
        Rect::new(
            inner.x,
            inner.y + header,
            inner.width,
            inner.height - header,
        )
    }

    /// Screen rect of the tile at `index`, or `None` if it does not fit
    pub fn tile_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        if index >= self.deck.len() {
            return None;
        }
        let grid = self.grid_area(area);
        let columns = Self::columns_for(grid.width);
        let start_x = grid.x + grid.width.saturating_sub(grid_width(columns)) / 2;

        let col = index as u16 % columns;
        let row = index as u16 / columns;
        let x = start_x + col * (TILE_WIDTH + TILE_GAP);
        let y = grid.y + row * TILE_HEIGHT;
        let rect = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT);

        if rect.right() > grid.right() || rect.bottom() > grid.bottom() {
            return None;
        }
        Some(rect)
    }

    /// Card whose tile covers the cell at (col, row)
    pub fn hit_test(&self, area: Rect, col: u16, row: u16) -> Option<&'a Card> {
        let deck = self.deck;
        deck.cards().iter().enumerate().find_map(|(i, card)| {
            let rect = self.tile_rect(area, i)?;
            point_in_rect(col, row, rect).then_some(card)
        })
    }
}

impl Widget for DeckViewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(description) = &self.deck.description {
            if inner.height > 0 {
                let line = Line::from(Span::styled(
                    description.as_str(),
                    Style::default().fg(Theme::DESCRIPTION),
                ));
                Paragraph::new(line).render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
            }
        }

        for (i, card) in self.deck.cards().iter().enumerate() {
            let Some(tile) = self.tile_rect(area, i) else {
                continue;
            };
            let hovered = self.hovered == Some(&card.id);
            CardTileWidget::new(card).hovered(hovered).render(tile, buf);
        }
    }
}

fn grid_width(columns: u16) -> u16 {
    columns * TILE_WIDTH + columns.saturating_sub(1) * TILE_GAP
}

pub fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckmark_core::store::Snapshot;

    fn deck() -> Deck {
        Deck::standard("main", "Full Deck", Some("All playing cards".to_string()))
    }

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in buf.area.y..buf.area.bottom() {
            for x in buf.area.x..buf.area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_columns_follow_width() {
        assert_eq!(DeckViewWidget::columns_for(200), 8);
        assert_eq!(DeckViewWidget::columns_for(grid_width(8)), 8);
        assert_eq!(DeckViewWidget::columns_for(grid_width(8) - 1), 4);
        assert_eq!(DeckViewWidget::columns_for(grid_width(4)), 4);
        assert_eq!(DeckViewWidget::columns_for(grid_width(2)), 2);
        assert_eq!(DeckViewWidget::columns_for(5), 1);
    }

    #[test]
    fn test_height_fits_every_tile() {
        let deck = deck();
        let view = DeckViewWidget::new(&deck);
        let width = 100;
        let area = Rect::new(0, 0, width, view.height_for(width));
        for i in 0..deck.len() {
            assert!(view.tile_rect(area, i).is_some(), "tile {i} clipped");
        }
        assert!(view.tile_rect(area, deck.len()).is_none());
        // 52 cards over 8 columns = 7 rows
        assert_eq!(area.height, 2 + 2 + 7 * TILE_HEIGHT);
    }

    #[test]
    fn test_tiles_follow_deck_order() {
        let deck = deck();
        let view = DeckViewWidget::new(&deck);
        let area = Rect::new(0, 0, 100, view.height_for(100));
        let first = view.tile_rect(area, 0).unwrap();
        let second = view.tile_rect(area, 1).unwrap();
        let ninth = view.tile_rect(area, 8).unwrap();
        assert_eq!(second.x, first.x + TILE_WIDTH + TILE_GAP);
        assert_eq!(second.y, first.y);
        assert_eq!(ninth.x, first.x);
        assert_eq!(ninth.y, first.y + TILE_HEIGHT);
    }

    #[test]
    fn test_hit_test_finds_card() {
        let deck = deck();
        let view = DeckViewWidget::new(&deck);
        let area = Rect::new(0, 0, 100, view.height_for(100));
        let rect = view.tile_rect(area, 0).unwrap();
        let card = view.hit_test(area, rect.x + 2, rect.y + 3).unwrap();
        assert_eq!(card.id, "2-Diamond");

        let rect = view.tile_rect(area, 51).unwrap();
        let card = view.hit_test(area, rect.right() - 1, rect.bottom() - 1).unwrap();
        assert_eq!(card.id, "Ace-Spade");

        // Panel border is not a tile
        assert!(view.hit_test(area, 0, 0).is_none());
    }

    #[test]
    fn test_render_shows_title_description_and_used_overlay() {
        let snap = Snapshot::initial().mark_card("main", "2-Diamond", true);
        let deck = snap.deck("main").unwrap();
        let view = DeckViewWidget::new(deck);
        let area = Rect::new(0, 0, 100, view.height_for(100));
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        let out = text(&buf);
        assert!(out.contains("Full Deck"));
        assert!(out.contains("All playing cards"));
        assert_eq!(out.matches("Used").count(), 1);
    }

    #[test]
    fn test_deck_without_description_starts_grid_higher() {
        let with = deck();
        let without = Deck::standard("main", "Full Deck", None);
        let a = DeckViewWidget::new(&with);
        let b = DeckViewWidget::new(&without);
        assert_eq!(a.height_for(100), b.height_for(100) + 2);
        let area = Rect::new(0, 0, 100, 80);
        assert_eq!(
            a.tile_rect(area, 0).unwrap().y,
            b.tile_rect(area, 0).unwrap().y + 2
        );
    }
}
