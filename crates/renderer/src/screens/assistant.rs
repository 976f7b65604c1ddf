use powerai_core::event::Message;
use powerai_theme::{style, Theme};
use powerai_widgets::{glyph, ScreenHeader, BOLD};
use iced::{
    widget::{column, container, row, text, Column, Row},
    Alignment, Element, Length,
};

const RECOMMENDATION: &str = "\"Based on your current usage pattern, I recommend closing Instagram \
and enabling battery saver mode to extend your battery life by approximately 2 hours.\"";

const TOPICS: [[&str; 2]; 2] = [
    ["Battery Tips", "Usage Analysis"],
    ["Power Settings", "Emergency Help"],
];

const VOICE_COMMANDS: [&str; 4] = [
    "\"Hey PowerAI, optimize my battery\"",
    "\"Show me battery-heavy apps\"",
    "\"Enable travel mode\"",
    "\"How long until empty?\"",
];

pub fn view<'a>(theme: &'a Theme) -> Element<'a, Message> {
    let avatar = container(glyph("🤖", theme.title_size() + 4.0))
        .padding(10)
        .style(style::fill(theme.primary, theme.border_radius));

    let status = row![
        container(text(""))
            .width(Length::Fixed(8.0))
            .height(Length::Fixed(8.0))
            .style(style::fill(theme.green, 4.0)),
        text("Online & Ready")
            .size(theme.caption_size())
            .color(theme.muted.to_iced()),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let identity = row![
        avatar,
        column![
            text("PowerAI Assistant")
                .size(theme.title_size())
                .font(BOLD)
                .color(theme.foreground.to_iced()),
            status,
        ]
        .spacing(4),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let quote = container(
        text(RECOMMENDATION)
            .size(theme.font_size)
            .color(theme.foreground.to_iced()),
    )
    .padding(16)
    .width(Length::Fill)
    .style(style::banner(theme.primary, theme));

    let topics = Column::with_children(TOPICS.iter().map(|pair| {
        let tiles: Element<'a, Message> =
            Row::with_children(pair.iter().map(|label| topic_tile(label, theme)))
                .spacing(12)
                .into();
        tiles
    }))
    .spacing(12);

    let assistant = container(column![identity, quote, topics].spacing(16))
        .padding(theme.padding)
        .width(Length::Fill)
        .style(style::card(theme));

    let commands = VOICE_COMMANDS.iter().fold(
        column![text("Voice Commands")
            .size(theme.title_size())
            .font(BOLD)
            .color(theme.foreground.to_iced())]
        .spacing(8),
        |col, cmd| {
            col.push(
                text(format!("• {cmd}"))
                    .size(theme.font_size)
                    .color(theme.muted.to_iced()),
            )
        },
    );

    let voice = container(commands)
        .padding(theme.padding)
        .width(Length::Fill)
        .style(style::card(theme));

    column![
        ScreenHeader::new("Virtual Assistant", "AI-powered battery guidance").view(theme),
        assistant,
        voice,
    ]
    .spacing(theme.gap as f32 * 1.5)
    .padding(theme.padding)
    .into()
}

/// Suggestion tile.  Display-only: the assistant has no behaviour behind it.
fn topic_tile<'a>(label: &'a str, theme: &'a Theme) -> Element<'a, Message> {
    container(
        text(label)
            .size(theme.font_size)
            .color(theme.foreground.to_iced()),
    )
    .padding(12)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(style::tile(theme))
    .into()
}
