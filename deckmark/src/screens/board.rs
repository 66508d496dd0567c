use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use ratatui::Frame;

use deckmark_core::{Card, CardId, CardImages, Deck, Snapshot};
use deckmark_widgets::background::BackgroundWidget;
use deckmark_widgets::deck_view::{point_in_rect, DeckViewWidget};
use deckmark_widgets::reset_button::ResetButtonWidget;
use deckmark_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

/// Blank rows between deck panels
const DECK_GAP: u16 = 1;
/// Rows moved per wheel notch
const SCROLL_STEP: u16 = 3;

/// What the pointer is resting on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hover {
    Reset,
    Card { deck_id: String, card_id: CardId },
}

/// The whole page: title, reset control, every deck panel and a status line.
///
/// Deck panels are laid out on a virtual canvas taller than the terminal and
/// scrolled with the mouse wheel. Rects from the last render are kept for
/// hit-testing the next pointer event.
pub struct BoardScreen {
    pub scroll: u16,
    pub hovered: Option<Hover>,
    reset_area: Rect,
    board_area: Rect,
    /// Deck panel rects in canvas coordinates
    deck_areas: Vec<(String, Rect)>,
    content_height: u16,
}

impl BoardScreen {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            hovered: None,
            reset_area: Rect::default(),
            board_area: Rect::default(),
            deck_areas: Vec::new(),
            content_height: 0,
        }
    }

    pub fn reset_area(&self) -> Rect {
        self.reset_area
    }

    pub fn board_area(&self) -> Rect {
        self.board_area
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.board_area.height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn layout_decks(&mut self, snapshot: &Snapshot, width: u16) {
        self.deck_areas.clear();
        let mut y = 0u16;
        for deck in snapshot.decks() {
            let height = DeckViewWidget::new(deck).height_for(width);
            self.deck_areas
                .push((deck.id.clone(), Rect::new(0, y, width, height)));
            y = y.saturating_add(height).saturating_add(DECK_GAP);
        }
        self.content_height = y.saturating_sub(DECK_GAP);
    }

    /// Screen position to canvas position, if it falls on the board
    fn to_canvas(&self, col: u16, row: u16) -> Option<(u16, u16)> {
        if !point_in_rect(col, row, self.board_area) {
            return None;
        }
        Some((
            col - self.board_area.x,
            row - self.board_area.y + self.scroll,
        ))
    }

    /// Deck and card under a screen position
    pub fn card_at<'s>(
        &self,
        snapshot: &'s Snapshot,
        col: u16,
        row: u16,
    ) -> Option<(&'s Deck, &'s Card)> {
        let (cx, cy) = self.to_canvas(col, row)?;
        self.deck_areas.iter().find_map(|(deck_id, area)| {
            if !point_in_rect(cx, cy, *area) {
                return None;
            }
            let deck = snapshot.deck(deck_id)?;
            let card = DeckViewWidget::new(deck).hit_test(*area, cx, cy)?;
            Some((deck, card))
        })
    }

    /// Visible on-screen part of a card's tile
    pub fn tile_screen_rect(
        &self,
        snapshot: &Snapshot,
        deck_id: &str,
        card_id: &str,
    ) -> Option<Rect> {
        let (_, area) = self.deck_areas.iter().find(|(id, _)| id == deck_id)?;
        let deck = snapshot.deck(deck_id)?;
        let index = deck.cards().iter().position(|c| c.id == card_id)?;
        let tile = DeckViewWidget::new(deck).tile_rect(*area, index)?;

        let view_top = self.scroll;
        let view_bottom = self.scroll + self.board_area.height;
        let top = tile.y.max(view_top);
        let bottom = tile.bottom().min(view_bottom);
        if top >= bottom {
            return None;
        }
        Some(Rect::new(
            self.board_area.x + tile.x,
            self.board_area.y + top - self.scroll,
            tile.width,
            bottom - top,
        ))
    }

    fn hover_at(&self, snapshot: &Snapshot, col: u16, row: u16) -> Option<Hover> {
        if ResetButtonWidget::hit_test(self.reset_area, col, row) {
            return Some(Hover::Reset);
        }
        self.card_at(snapshot, col, row)
            .map(|(deck, card)| Hover::Card {
                deck_id: deck.id.clone(),
                card_id: card.id.clone(),
            })
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Deck Mark",
                Style::default()
                    .fg(Theme::TITLE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "\u{2501}".repeat(12), // ━
                Style::default().fg(Theme::TITLE_ACCENT),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_board(&mut self, frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
        self.board_area = area;
        self.layout_decks(snapshot, area.width);
        self.clamp_scroll();
        if area.is_empty() || self.content_height == 0 {
            return;
        }

        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, self.content_height));
        let hovered = match &self.hovered {
            Some(Hover::Card { deck_id, card_id }) => Some((deck_id.as_str(), card_id)),
            _ => None,
        };
        for (deck_id, deck_area) in &self.deck_areas {
            let Some(deck) = snapshot.deck(deck_id) else {
                continue;
            };
            let hover = hovered
                .filter(|(d, _)| *d == deck_id.as_str())
                .map(|(_, c)| c);
            DeckViewWidget::new(deck)
                .hovered(hover)
                .render(*deck_area, &mut canvas);
        }

        // Copy the visible window; untouched canvas cells let the background through
        let blank = Cell::default();
        let buf = frame.buffer_mut();
        for dy in 0..area.height {
            let cy = self.scroll + dy;
            if cy >= self.content_height {
                break;
            }
            for dx in 0..area.width {
                let Some(src) = canvas.cell((dx, cy)) else {
                    continue;
                };
                if *src == blank {
                    continue;
                }
                if let Some(dst) = buf.cell_mut((area.x + dx, area.y + dy)) {
                    *dst = src.clone();
                }
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
        let mut spans = vec![
            Span::styled("  Used ", Style::default().fg(Theme::MUTED_TEXT)),
            Span::styled(
                format!("{}/{}", snapshot.used_count(), snapshot.total_cards()),
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(Hover::Card { deck_id, card_id }) = &self.hovered {
            if let Some(card) = snapshot.card(deck_id, card_id.as_str()) {
                let path = CardImages::global().get(card_id).unwrap_or("-");
                spans.push(Span::styled(
                    "  \u{2502}  ",
                    Style::default().fg(Theme::DIM_TEXT),
                ));
                spans.push(Span::styled(
                    card.name.clone(),
                    Style::default()
                        .fg(Theme::DESCRIPTION)
                        .add_modifier(Modifier::BOLD),
                ));
                if card.is_used {
                    spans.push(Span::styled(
                        " (used)",
                        Style::default().fg(Theme::CARD_USED_BORDER),
                    ));
                }
                spans.push(Span::styled(
                    format!("  {path}"),
                    Style::default().fg(Theme::MUTED_TEXT),
                ));
            }
        }

        spans.push(Span::styled(
            "  \u{2502}  [",
            Style::default().fg(Theme::DIM_TEXT),
        ));
        spans.push(Span::styled("Wheel", Style::default().fg(Theme::TITLE)));
        spans.push(Span::styled("] Scroll  [", Style::default().fg(Theme::DIM_TEXT)));
        spans.push(Span::styled("q", Style::default().fg(Theme::TITLE)));
        spans.push(Span::styled("] Quit", Style::default().fg(Theme::DIM_TEXT)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Default for BoardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for BoardScreen {
    fn render(&mut self, frame: &mut Frame, snapshot: &Snapshot) {
        let area = frame.area();
        BackgroundWidget.render(area, frame.buffer_mut());

        let chunks = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Reset control
            Constraint::Min(0),    // Deck panels
            Constraint::Length(1), // Status
        ])
        .split(area);

        self.render_title(frame, chunks[0]);

        self.reset_area = chunks[1];
        let reset = ResetButtonWidget::new().hovered(self.hovered == Some(Hover::Reset));
        frame.render_widget(reset, chunks[1]);

        self.render_board(frame, snapshot, chunks[2]);
        self.render_status(frame, snapshot, chunks[3]);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, snapshot: &Snapshot) -> Option<ScreenAction> {
        let (col, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if ResetButtonWidget::hit_test(self.reset_area, col, row) {
                    return Some(ScreenAction::ResetAll);
                }
                let (deck, card) = self.card_at(snapshot, col, row)?;
                // Used tiles take no input
                if card.is_used {
                    return None;
                }
                let tile = self.tile_screen_rect(snapshot, &deck.id, card.id.as_str());
                Some(ScreenAction::MarkUsed {
                    deck_id: deck.id.clone(),
                    card_id: card.id.clone(),
                    tile,
                })
            }
            MouseEventKind::ScrollDown => {
                self.scroll = self.scroll.saturating_add(SCROLL_STEP);
                self.clamp_scroll();
                // A different tile may now sit under the pointer
                self.hovered = self.hover_at(snapshot, col, row);
                None
            }
            MouseEventKind::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
                self.hovered = self.hover_at(snapshot, col, row);
                None
            }
            MouseEventKind::Moved => {
                self.hovered = self.hover_at(snapshot, col, row);
                None
            }
            _ => None,
        }
    }
}
