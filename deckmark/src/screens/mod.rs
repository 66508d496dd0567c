pub mod board;

use crossterm::event::MouseEvent;
use ratatui::Frame;

use crate::app::ScreenAction;
use deckmark_core::Snapshot;

/// A screen renders from a snapshot and turns pointer input into actions
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, snapshot: &Snapshot);
    fn handle_mouse(&mut self, mouse: MouseEvent, snapshot: &Snapshot) -> Option<ScreenAction>;
}
