use crate::{glyph, BOLD};
use powerai_core::{event::Message, seed::AppUsageEntry};
use powerai_theme::{style, Theme};
use iced::{
    widget::{column, container, row, text, Column},
    Alignment, Element, Length,
};

/// Width of the per-app usage bar in logical pixels.
const BAR_WIDTH: f32 = 64.0;
const BAR_HEIGHT: f32 = 6.0;

/// "High Usage Apps" card.
#[derive(Debug, Default)]
pub struct AppUsageCard;

impl AppUsageCard {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&self, apps: &'a [AppUsageEntry], theme: &'a Theme) -> Element<'a, Message> {
        let heading = row![
            container(glyph("📈", theme.font_size + 4.0))
                .padding(8)
                .style(style::banner(theme.primary, theme)),
            column![
                text("High Usage Apps")
                    .size(theme.title_size())
                    .font(BOLD)
                    .color(theme.foreground.to_iced()),
                text("Last hour analysis")
                    .size(theme.caption_size())
                    .color(theme.muted.to_iced()),
            ],
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let rows = Column::with_children(apps.iter().map(|app| app_row(app, theme))).spacing(12);

        let footer = container(
            row![
                glyph("📱", theme.font_size),
                text("Optimize these apps to extend battery life")
                    .size(theme.font_size)
                    .color(theme.primary.to_iced()),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(style::banner(theme.primary, theme));

        container(column![heading, rows, footer].spacing(16))
            .padding(theme.padding)
            .width(Length::Fill)
            .style(style::card(theme))
            .into()
    }
}

fn app_row<'a>(app: &'a AppUsageEntry, theme: &'a Theme) -> Element<'a, Message> {
    let (used, rest) = bar_portions(app.percentage);

    let bar = container(
        row![
            container(text(""))
                .width(Length::FillPortion(used))
                .height(Length::Fixed(BAR_HEIGHT))
                .style(style::fill(theme.primary, BAR_HEIGHT / 2.0)),
            container(text(""))
                .width(Length::FillPortion(rest))
                .height(Length::Fixed(BAR_HEIGHT)),
        ],
    )
    .width(Length::Fixed(BAR_WIDTH))
    .height(Length::Fixed(BAR_HEIGHT))
    .style(style::fill(theme.foreground.with_alpha(0.1), BAR_HEIGHT / 2.0));

    let left = row![
        glyph(&app.icon, theme.title_size() + 4.0),
        column![
            text(&app.name)
                .size(theme.font_size)
                .font(BOLD)
                .color(theme.foreground.to_iced()),
            text(format!("{}% battery usage", app.battery_usage))
                .size(theme.caption_size())
                .color(theme.muted.to_iced()),
        ],
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let right = column![
        text(format!("{}%", app.percentage))
            .size(theme.font_size)
            .font(BOLD)
            .color(theme.primary.to_iced()),
        bar,
    ]
    .spacing(4)
    .align_x(Alignment::End);

    container(row![container(left).width(Length::Fill), right].align_y(Alignment::Center))
        .padding(12)
        .width(Length::Fill)
        .style(style::tile(theme))
        .into()
}

/// Fill portions for the used / unused parts of a usage bar.
///
/// Iced treats a zero portion as "no space", so both sides keep at least 1.
fn bar_portions(percentage: u8) -> (u16, u16) {
    let used = u16::from(percentage.min(100));
    (used.max(1), (100 - used).max(1))
}
