use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0x09, 0x09, 0x0b);
pub const SURFACE: Color = Color::Rgb(0x18, 0x18, 0x1b);
pub const BORDER: Color = Color::Rgb(0x27, 0x27, 0x2a);
pub const TEXT: Color = Color::Rgb(0xfa, 0xfa, 0xfa);
pub const TEXT_BODY: Color = Color::Rgb(0xd4, 0xd4, 0xd8);
pub const TEXT_MUTED: Color = Color::Rgb(0xa1, 0xa1, 0xaa);
pub const TEXT_FAINT: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const VIOLET: Color = Color::Rgb(0x7c, 0x3a, 0xed);
pub const VIOLET_LIGHT: Color = Color::Rgb(0xa7, 0x8b, 0xfa);
pub const VIOLET_PALE: Color = Color::Rgb(0xc4, 0xb5, 0xfd);
pub const INDIGO: Color = Color::Rgb(0x81, 0x8c, 0xf8);
pub const STATUS_OK: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const STATUS_INFO: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const PLAYHEAD: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const FOCUS_RING: Color = Color::Rgb(0xa7, 0x8b, 0xfa);
