use crate::{glyph, BOLD};
use powerai_core::{event::Message, state::AppState};
use powerai_theme::{style, Theme};
use iced::{
    widget::{column, container, row, text},
    Alignment, Element, Length,
};

/// Big battery readout with the AI prediction and smart insight.
///
/// Every string and colour is derived from `state.classification()` on each
/// render, so the card follows the simulator without holding any state.
#[derive(Debug, Default)]
pub struct BatteryCard;

impl BatteryCard {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let info  = state.classification();
        let color = theme.severity(info.severity).to_iced();
        let big   = theme.headline_size() * 2.0;

        let icon = if state.charging { "⚡" } else { "🔋" };
        let icons = row![glyph(icon, big), glyph(info.severity.glyph(), big * 0.75)]
            .spacing(12)
            .align_y(Alignment::Center);

        let mut readout = column![
            text(state.battery.to_string()).size(big).font(BOLD).color(color),
        ]
        .align_x(Alignment::End);
        if state.charging {
            readout = readout.push(
                text("Charging")
                    .size(theme.caption_size())
                    .color(theme.muted.to_iced()),
            );
        }

        let top = row![container(icons).width(Length::Fill), readout]
            .align_y(Alignment::Center);

        let prediction = row![
            glyph("🧠", theme.font_size),
            text("AI Prediction:")
                .size(theme.font_size)
                .font(BOLD)
                .color(theme.primary.to_iced()),
            text(info.prediction.to_string())
                .size(theme.font_size)
                .color(theme.foreground.to_iced()),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let insight = container(
            row![
                glyph("💡", theme.font_size),
                column![
                    text("Smart Insight")
                        .size(theme.font_size)
                        .font(BOLD)
                        .color(theme.accent.to_iced()),
                    text(info.insight)
                        .size(theme.font_size)
                        .color(theme.muted.to_iced()),
                ]
                .spacing(4),
            ]
            .spacing(8),
        )
        .padding(12)
        .width(Length::Fill)
        .style(style::tile(theme));

        container(column![top, prediction, insight].spacing(16))
            .padding(theme.padding)
            .width(Length::Fill)
            .style(style::card(theme))
            .into()
    }
}
