use powerai_core::event::Message;
use powerai_theme::{style, Theme};
use powerai_widgets::{glyph, ActionButton, ScreenHeader, BOLD};
use iced::{
    widget::{column, container, row, text},
    Alignment, Element, Length,
};

/// Travel settings shown as always-on toggles.
const SETTINGS: [&str; 2] = ["Battery Saver Mode", "Offline Maps"];

pub fn view<'a>(theme: &'a Theme) -> Element<'a, Message> {
    let map = container(
        column![
            glyph("📍", theme.headline_size() * 2.0),
            text("Offline Map Ready")
                .size(theme.title_size())
                .font(BOLD)
                .color(theme.foreground.to_iced()),
            text("Battery-optimized routing available for 50km radius")
                .size(theme.caption_size())
                .color(theme.muted.to_iced()),
            ActionButton::new("🧭", "Start Navigation")
                .primary()
                .on_press(Message::StartNavigation)
                .view(theme),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(theme.padding + 8)
    .width(Length::Fill)
    .style(style::card(theme));

    let heading = text("Travel Settings")
        .size(theme.title_size())
        .font(BOLD)
        .color(theme.foreground.to_iced());
    let rows = SETTINGS
        .iter()
        .fold(column![heading], |col, label| col.push(toggle_row(label, theme)));

    let settings = container(rows.spacing(12))
        .padding(theme.padding)
        .width(Length::Fill)
        .style(style::card(theme));

    column![
        ScreenHeader::new("Travel Guardian", "Offline navigation & battery optimization").view(theme),
        map,
        settings,
    ]
    .spacing(theme.gap as f32 * 1.5)
    .padding(theme.padding)
    .into()
}

/// Label plus a switch drawn in the "on" position.
fn toggle_row<'a>(label: &'a str, theme: &'a Theme) -> Element<'a, Message> {
    let knob = container(text(""))
        .width(Length::Fixed(20.0))
        .height(Length::Fixed(20.0))
        .style(style::fill(powerai_theme::Color::WHITE, 10.0));

    let switch = container(knob)
        .width(Length::Fixed(48.0))
        .height(Length::Fixed(24.0))
        .padding(2)
        .align_right(Length::Fixed(48.0))
        .style(style::fill(theme.primary, 12.0));

    container(
        row![
            text(label)
                .size(theme.font_size)
                .color(theme.foreground.to_iced())
                .width(Length::Fill),
            switch,
        ]
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(style::tile(theme))
    .into()
}
