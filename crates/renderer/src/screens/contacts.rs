use powerai_core::{event::Message, screen::EMERGENCY_THRESHOLD, state::AppState};
use powerai_theme::{style, Theme};
use powerai_widgets::{glyph, ActionButton, ContactList, ScreenHeader, BOLD};
use iced::{
    widget::{column, container, row, text},
    Alignment, Element, Length,
};

pub fn view<'a>(state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
    let badge = container(glyph("⚠", theme.title_size() + 4.0))
        .padding(10)
        .style(style::fill(theme.destructive, theme.border_radius));

    let alert_heading = row![
        badge,
        column![
            text("Emergency Alert Settings")
                .size(theme.title_size())
                .font(BOLD)
                .color(theme.foreground.to_iced()),
            text(format!("Auto-alert at {EMERGENCY_THRESHOLD}% battery"))
                .size(theme.caption_size())
                .color(theme.muted.to_iced()),
        ]
        .spacing(2),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let warning = container(
        text(format!(
            "Critical battery alerts will be sent when battery drops below {EMERGENCY_THRESHOLD}%"
        ))
        .size(theme.font_size)
        .font(BOLD)
        .color(theme.destructive.to_iced()),
    )
    .padding(16)
    .width(Length::Fill)
    .style(style::banner(theme.destructive, theme));

    let alert = container(column![alert_heading, warning].spacing(16))
        .padding(theme.padding)
        .width(Length::Fill)
        .style(style::card(theme));

    let contacts = container(
        column![
            text("Emergency Contacts")
                .size(theme.title_size())
                .font(BOLD)
                .color(theme.foreground.to_iced()),
            ContactList::new().view(&state.contacts, theme),
            ActionButton::new("👥", "Add Emergency Contact")
                .primary()
                .on_press(Message::AddEmergencyContact)
                .view(theme),
        ]
        .spacing(16),
    )
    .padding(theme.padding)
    .width(Length::Fill)
    .style(style::card(theme));

    column![
        ScreenHeader::new("Emergency Contacts", "Critical battery alert contacts").view(theme),
        alert,
        contacts,
    ]
    .spacing(theme.gap as f32 * 1.5)
    .padding(theme.padding)
    .into()
}
