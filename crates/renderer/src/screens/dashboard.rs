use powerai_core::{event::Message, screen::ScreenId, state::AppState};
use powerai_theme::Theme;
use powerai_widgets::{ActionButton, AppUsageCard, BatteryCard, HeaderWidget};
use iced::{
    widget::{column, container},
    Element, Length,
};

pub fn view<'a>(state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
    let actions = column![
        ActionButton::new("⚡", "Optimize Apps")
            .description("AI-powered battery optimization")
            .primary()
            .on_press(Message::OptimizeApps)
            .view(theme),
        ActionButton::new("🧭", "Travel Guardian Mode")
            .description("Offline navigation with battery optimization")
            .on_press(Message::SelectScreen(ScreenId::Travel))
            .view(theme),
        ActionButton::new("🤖", "Virtual Assistant")
            .description("AI-powered battery guidance")
            .on_press(Message::SelectScreen(ScreenId::Assistant))
            .view(theme),
        ActionButton::new("👥", "Emergency Contacts")
            .description("Critical battery alert contacts")
            .on_press(Message::SelectScreen(ScreenId::Contacts))
            .view(theme),
    ]
    .spacing(theme.gap as f32);

    let cards = column![
        BatteryCard::new().view(state, theme),
        AppUsageCard::new().view(&state.apps, theme),
        actions,
    ]
    .spacing(theme.gap as f32 * 1.5);

    column![
        HeaderWidget::new().view(theme),
        container(cards)
            .padding([0, theme.padding])
            .width(Length::Fill),
    ]
    .spacing(theme.gap as f32)
    .into()
}
