use ratatui::layout::Rect;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

use deckmark_widgets::theme::Theme;

/// Keyed effect manager; a new effect under a key replaces the running one
pub type FxManager = EffectManager<&'static str>;

pub const CARD_MARKED: &str = "card_marked";
pub const BOARD_RESET: &str = "board_reset";

/// Brief flash on a tile that just became used
pub fn card_marked(tile: Rect) -> Effect {
    fx::fade_from_fg(Theme::CARD_HOVER, (300, Interpolation::QuadOut)).with_area(tile)
}

/// Board sweeps back in from the top after a reset
pub fn board_reset(board: Rect) -> Effect {
    fx::sweep_in(
        Motion::UpToDown,
        6,
        0,
        Theme::BG_MID,
        (400, Interpolation::CubicOut),
    )
    .with_area(board)
}
