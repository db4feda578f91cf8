use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SECONDARY: Color = Color::Green;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PORT: Color = Color::Cyan;
pub const KEYWORD: Color = Color::Magenta;
