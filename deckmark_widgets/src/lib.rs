pub mod background;
pub mod card;
pub mod deck_view;
pub mod reset_button;
pub mod theme;

pub use theme::Theme;
