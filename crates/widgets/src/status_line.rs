use crate::glyph;
use powerai_core::{event::Message, state::AppState};
use powerai_theme::Theme;
use iced::{
    widget::{container, row, text},
    Alignment, Element, Length,
};

/// Phone-style status line: clock on the left, battery on the right.
///
/// Reads `state.time`, which is refreshed every second via `Message::Tick`.
#[derive(Debug, Default)]
pub struct StatusLine;

impl StatusLine {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let clock = text(state.time.format("%H:%M").to_string())
            .size(theme.caption_size())
            .color(theme.foreground.to_iced());

        let severity = state.classification().severity;
        let battery = row![
            glyph(if state.charging { "⚡" } else { "🔋" }, theme.caption_size()),
            text(battery_label(state.battery.percent()))
                .size(theme.caption_size())
                .color(theme.severity(severity).to_iced()),
        ]
        .spacing(4)
        .align_y(Alignment::Center);

        row![
            container(clock).width(Length::Fill),
            battery,
        ]
        .align_y(Alignment::Center)
        .padding([6, theme.padding])
        .into()
    }
}

fn battery_label(percent: u8) -> String {
    format!("{percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_plain_percentage() {
        assert_eq!(battery_label(73), "73%");
        assert_eq!(battery_label(0), "0%");
    }
}
