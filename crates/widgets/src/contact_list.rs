use crate::{glyph, BOLD};
use powerai_core::{event::Message, seed::EmergencyContact};
use powerai_theme::{style, Theme};
use iced::{
    widget::{column, container, row, text, Column},
    Alignment, Element, Length,
};

/// Emergency contacts, one tile each, with a (decorative) call glyph.
#[derive(Debug, Default)]
pub struct ContactList;

impl ContactList {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&self, contacts: &'a [EmergencyContact], theme: &'a Theme) -> Element<'a, Message> {
        Column::with_children(contacts.iter().map(|c| contact_row(c, theme)))
            .spacing(12)
            .into()
    }
}

fn contact_row<'a>(contact: &'a EmergencyContact, theme: &'a Theme) -> Element<'a, Message> {
    let avatar = container(glyph("👥", theme.font_size + 2.0))
        .padding(8)
        .style(style::banner(theme.primary, theme));

    let who = column![
        text(&contact.name)
            .size(theme.font_size)
            .font(BOLD)
            .color(theme.foreground.to_iced()),
        text(&contact.relation)
            .size(theme.caption_size())
            .color(theme.muted.to_iced()),
        text(&contact.phone)
            .size(theme.caption_size())
            .color(theme.muted.to_iced()),
    ]
    .spacing(2);

    let call = container(glyph("📞", theme.font_size))
        .padding(8)
        .style(style::banner(theme.primary, theme));

    container(
        row![avatar, container(who).width(Length::Fill), call]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(style::tile(theme))
    .into()
}
