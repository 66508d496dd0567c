use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;
use tachyonfx::Duration;

use deckmark_core::{CardId, DeckStore, Intent};

use crate::effects::{self, FxManager};
use crate::screens::board::BoardScreen;
use crate::screens::Screen;

/// Main application state. Owns the store; screens only ever see snapshots.
pub struct App {
    pub store: DeckStore,
    pub board: BoardScreen,
    pub fx: FxManager,
}

impl App {
    pub fn new(store: DeckStore) -> Self {
        Self {
            store,
            board: BoardScreen::new(),
            fx: FxManager::default(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.board.render(frame, self.store.snapshot());

        // Transitions run on top of the rendered content
        let tick_duration = Duration::from_millis(33); // ~30fps
        self.fx
            .process_effects(tick_duration, frame.buffer_mut(), area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(ScreenAction::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(ScreenAction::Quit)
            }
            _ => None,
        };
        self.process_action(action)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let action = self.board.handle_mouse(mouse, self.store.snapshot());
        self.process_action(action);
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => return true,
            Some(ScreenAction::MarkUsed {
                deck_id,
                card_id,
                tile,
            }) => {
                let intent = Intent::MarkUsed {
                    deck_id: deck_id.clone(),
                    card_id: card_id.to_string(),
                };
                if self.store.apply(&intent) {
                    let snapshot = self.store.snapshot();
                    log::info!(
                        "marked {card_id} used in {deck_id} ({}/{} used)",
                        snapshot.used_count(),
                        snapshot.total_cards()
                    );
                    if let Some(tile) = tile {
                        self.fx
                            .add_unique_effect(effects::CARD_MARKED, effects::card_marked(tile));
                    }
                }
            }
            Some(ScreenAction::ResetAll) => {
                let used = self.store.snapshot().used_count();
                if self.store.apply(&Intent::ResetAll) {
                    log::info!("reset {used} used cards");
                    self.fx.add_unique_effect(
                        effects::BOARD_RESET,
                        effects::board_reset(self.board.board_area()),
                    );
                } else {
                    log::debug!("reset requested with nothing used");
                }
            }
            None => {}
        }

        false
    }
}

/// Actions that screens can return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    Quit,
    /// An unused tile was clicked; `tile` is its visible screen rect
    MarkUsed {
        deck_id: String,
        card_id: CardId,
        tile: Option<Rect>,
    },
    ResetAll,
}
