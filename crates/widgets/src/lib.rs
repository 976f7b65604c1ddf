pub mod action_button;
pub mod app_usage;
pub mod battery_card;
pub mod contact_list;
pub mod header;
pub mod screen_header;
pub mod status_line;

pub use action_button::{ActionButton, Variant};
pub use app_usage::AppUsageCard;
pub use battery_card::BatteryCard;
pub use contact_list::ContactList;
pub use header::HeaderWidget;
pub use screen_header::ScreenHeader;
pub use status_line::StatusLine;

use iced::{
    font::Weight,
    widget::{text, text::Shaping, Text},
    Font,
};

/// Semi-bold variant of the default font, used for titles and figures.
pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Emoji / symbol glyph.  Needs advanced shaping to pick up colour fonts.
pub fn glyph<'a>(symbol: &'a str, size: f32) -> Text<'a> {
    text(symbol).size(size).shaping(Shaping::Advanced)
}
