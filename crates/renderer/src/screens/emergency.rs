use powerai_core::{event::Message, state::AppState};
use powerai_theme::{style, Color, Theme};
use powerai_widgets::{glyph, BOLD};
use iced::{
    widget::{button, column, container, row, text, Column, Row},
    Alignment, Element, Length,
};

/// Power-saving measures, shown as a 2×2 grid of (subsystem, setting).
const MEASURES: [[(&str, &str); 2]; 2] = [
    [("Screen", "Minimum Brightness"), ("Network", "Emergency Only")],
    [("Apps", "Essential Only"), ("Location", "GPS Disabled")],
];

pub fn view<'a>(state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
    let white = Color::WHITE;
    let radius = theme.border_radius;

    let banner = column![
        glyph("⚠", theme.headline_size() * 3.0),
        text("EMERGENCY MODE")
            .size(theme.headline_size() + 12.0)
            .font(BOLD)
            .color(white.to_iced()),
        text(format!("Critical Battery: {}", state.battery))
            .size(theme.title_size() + 2.0)
            .color(white.to_iced()),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let grid = Column::with_children(MEASURES.iter().map(|pair| {
        let tiles: Element<'a, Message> =
            Row::with_children(pair.iter().map(|&(what, how)| measure_tile(what, how, theme)))
                .spacing(12)
                .into();
        tiles
    }))
    .spacing(12);

    let saving = container(
        column![
            row![
                glyph("🔋", theme.title_size() + 4.0),
                text("POWER SAVING ACTIVE")
                    .size(theme.title_size() + 4.0)
                    .font(BOLD)
                    .color(white.to_iced()),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
            grid,
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(theme.padding + 8)
    .width(Length::Fill)
    .style(style::fill(Color::BLACK.with_alpha(0.3), radius));

    let call = container(
        row![
            glyph("📞", theme.title_size()),
            text("CALL EMERGENCY CONTACT")
                .size(theme.title_size())
                .font(BOLD)
                .color(theme.destructive.to_iced()),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .center_x(Length::Fill)
    .style(style::fill(white, radius));

    let exit = button(
        container(
            text("EXIT EMERGENCY MODE")
                .size(theme.font_size + 2.0)
                .color(white.to_iced()),
        )
        .center_x(Length::Fill),
    )
    .on_press(Message::ExitEmergency)
    .padding(16)
    .width(Length::Fill)
    .style(style::ghost_button(white, radius));

    let actions = column![
        call,
        action_tile("📍", "SEND LOCATION TO CONTACTS", theme),
        action_tile("🔦", "FLASHLIGHT", theme),
        exit,
    ]
    .spacing(16);

    let note = container(
        text(
            "Emergency contacts have been automatically notified of your critical \
             battery status and current location.",
        )
        .size(theme.font_size)
        .color(white.to_iced()),
    )
    .padding(16)
    .width(Length::Fill)
    .style(style::fill(Color::BLACK.with_alpha(0.3), radius));

    column![banner, saving, actions, note]
        .spacing(theme.gap as f32 * 2.0)
        .padding(theme.padding)
        .align_x(Alignment::Center)
        .into()
}

fn measure_tile<'a>(what: &'a str, how: &'a str, theme: &'a Theme) -> Element<'a, Message> {
    container(
        column![
            text(what)
                .size(theme.font_size)
                .font(BOLD)
                .color(Color::WHITE.to_iced()),
            text(how)
                .size(theme.caption_size())
                .color(Color::WHITE.to_iced()),
        ]
        .spacing(2),
    )
    .padding(12)
    .width(Length::Fill)
    .style(style::fill(Color::WHITE.with_alpha(0.2), theme.border_radius / 2.0))
    .into()
}

/// Display-only emergency action.
fn action_tile<'a>(icon: &'a str, label: &'a str, theme: &'a Theme) -> Element<'a, Message> {
    container(
        row![
            glyph(icon, theme.font_size + 2.0),
            text(label)
                .size(theme.font_size + 2.0)
                .color(Color::WHITE.to_iced()),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(16)
    .center_x(Length::Fill)
    .style(style::fill(Color::WHITE.with_alpha(0.2), theme.border_radius))
    .into()
}
