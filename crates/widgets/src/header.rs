use crate::{glyph, BOLD};
use powerai_core::event::Message;
use powerai_theme::{style, Theme};
use iced::{
    widget::{column, container, row, text},
    Alignment, Element, Length,
};

/// "PowerAI" wordmark with the tagline and two decorative icon tiles.
#[derive(Debug, Default)]
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&self, theme: &'a Theme) -> Element<'a, Message> {
        let wordmark = row![
            text("Power")
                .size(theme.headline_size() + 6.0)
                .font(BOLD)
                .color(theme.foreground.to_iced()),
            text("AI")
                .size(theme.headline_size() + 6.0)
                .font(BOLD)
                .color(theme.primary.to_iced()),
        ];

        let title = column![
            wordmark,
            text("Your intelligent battery guardian")
                .size(theme.font_size)
                .color(theme.muted.to_iced()),
        ]
        .spacing(4);

        let tile = |symbol: &'a str| {
            container(glyph(symbol, theme.font_size + 4.0))
                .padding(8)
                .style(style::tile(theme))
        };

        row![
            container(title).width(Length::Fill),
            row![tile("⚙"), tile("👤")].spacing(12),
        ]
        .align_y(Alignment::Center)
        .padding([8, theme.padding])
        .into()
    }
}
