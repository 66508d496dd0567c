use ratatui::style::Color;

/// Purple night palette for the deck board
pub struct Theme;

impl Theme {
    // Backgrounds, top to bottom of the gradient
    pub const BG_TOP: Color = Color::Rgb(49, 46, 129);
    pub const BG_MID: Color = Color::Rgb(88, 28, 135);
    pub const BG_BOTTOM: Color = Color::Rgb(131, 24, 67);
    pub const PANEL_BG: Color = Color::Rgb(30, 27, 58);

    // Card colors
    pub const CARD_BORDER: Color = Color::Rgb(192, 132, 252);
    pub const CARD_HOVER: Color = Color::Rgb(233, 213, 255);
    pub const CARD_USED_BORDER: Color = Color::Rgb(239, 68, 68);
    pub const CARD_USED_OVERLAY: Color = Color::Rgb(127, 29, 29);
    pub const CARD_USED_TEXT: Color = Color::Rgb(254, 202, 202);

    // Suit colors
    pub const RED_SUIT: Color = Color::Rgb(244, 63, 94);
    pub const BLACK_SUIT: Color = Color::Rgb(226, 232, 240);

    // Text
    pub const TITLE: Color = Color::Rgb(192, 132, 252);
    pub const TITLE_ACCENT: Color = Color::Rgb(244, 114, 182);
    pub const DESCRIPTION: Color = Color::Rgb(233, 213, 255);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);

    // Buttons
    pub const BUTTON: Color = Color::Rgb(147, 51, 234);
    pub const BUTTON_HOVER: Color = Color::Rgb(219, 39, 119);
}
