use crate::BOLD;
use powerai_core::{event::Message, screen::ScreenId};
use powerai_theme::{style, Theme};
use iced::{
    widget::{button, column, row, text},
    Alignment, Element,
};

/// Back arrow plus headline and caption at the top of a secondary screen.
///
/// The arrow always returns to the dashboard; there is no history.
#[derive(Debug)]
pub struct ScreenHeader<'a> {
    title:   &'a str,
    caption: &'a str,
}

impl<'a> ScreenHeader<'a> {
    pub fn new(title: &'a str, caption: &'a str) -> Self {
        Self { title, caption }
    }

    pub fn view(self, theme: &Theme) -> Element<'a, Message> {
        let back = button(text("←").size(theme.title_size()))
            .on_press(Message::SelectScreen(ScreenId::Dashboard))
            .padding([4, 12])
            .style(style::ghost_button(theme.foreground, theme.border_radius / 2.0));

        row![
            back,
            column![
                text(self.title)
                    .size(theme.headline_size())
                    .font(BOLD)
                    .color(theme.foreground.to_iced()),
                text(self.caption)
                    .size(theme.caption_size())
                    .color(theme.muted.to_iced()),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }
}
