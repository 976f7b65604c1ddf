use crate::{glyph, BOLD};
use powerai_core::event::Message;
use powerai_theme::{style, Color, Theme};
use iced::{
    widget::{button, column, container, row, text},
    Alignment, Element, Length,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    Primary,
    #[default]
    Secondary,
}

/// Full-width button with an icon tile, a title and an optional description.
///
/// ```ignore
/// ActionButton::new("🧭", "Travel Guardian Mode")
///     .description("Offline navigation with battery optimization")
///     .on_press(Message::SelectScreen(ScreenId::Travel))
///     .view(theme)
/// ```
#[derive(Debug, Clone)]
pub struct ActionButton<'a> {
    icon:        &'a str,
    title:       &'a str,
    description: Option<&'a str>,
    variant:     Variant,
    on_press:    Option<Message>,
}

impl<'a> ActionButton<'a> {
    pub fn new(icon: &'a str, title: &'a str) -> Self {
        Self {
            icon,
            title,
            description: None,
            variant: Variant::default(),
            on_press: None,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn primary(mut self) -> Self {
        self.variant = Variant::Primary;
        self
    }

    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn view(self, theme: &Theme) -> Element<'a, Message> {
        let (tile_tint, caption) = match self.variant {
            Variant::Primary   => (Color::WHITE, Color::WHITE.with_alpha(0.75)),
            Variant::Secondary => (theme.primary, theme.muted),
        };

        let icon = container(glyph(self.icon, theme.title_size() + 2.0))
            .padding(8)
            .style(style::banner(tile_tint, theme));

        let mut label = column![text(self.title).size(theme.font_size + 2.0).font(BOLD)].spacing(4);
        if let Some(description) = self.description {
            label = label.push(
                text(description)
                    .size(theme.font_size)
                    .color(caption.to_iced()),
            );
        }

        let content = row![icon, label].spacing(16).align_y(Alignment::Center);

        let btn = button(content)
            .on_press_maybe(self.on_press)
            .width(Length::Fill)
            .padding(16);

        match self.variant {
            Variant::Primary   => btn.style(style::primary_button(theme)).into(),
            Variant::Secondary => btn.style(style::secondary_button(theme)).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerai_core::screen::ScreenId;

    #[test]
    fn builder_defaults_to_secondary_without_handler() {
        let b = ActionButton::new("⚡", "Optimize Apps");
        assert_eq!(b.variant, Variant::Secondary);
        assert!(b.on_press.is_none());
        assert!(b.description.is_none());
    }

    #[test]
    fn builder_collects_options() {
        let b = ActionButton::new("🤖", "Virtual Assistant")
            .description("AI-powered battery guidance")
            .primary()
            .on_press(Message::SelectScreen(ScreenId::Assistant));
        assert_eq!(b.variant, Variant::Primary);
        assert_eq!(b.description, Some("AI-powered battery guidance"));
        assert_eq!(b.on_press, Some(Message::SelectScreen(ScreenId::Assistant)));
    }
}
