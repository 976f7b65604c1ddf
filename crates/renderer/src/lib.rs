//! Screen composition for the dashboard window.
//!
//! [`render`] resolves the effective view from `AppState` on every call and
//! builds the matching screen out of `powerai-widgets` pieces.  Nothing here
//! holds state; the emergency override lives in `ScreenSelector::resolve`.

pub mod screens;

use powerai_core::{
    event::Message,
    screen::{EffectiveView, ScreenId},
    state::AppState,
};
use powerai_theme::{style, Color, Theme};
use powerai_widgets::StatusLine;
use iced::{
    widget::{column, container, scrollable},
    Element, Length,
};

/// Human-readable name of a screen, used for the window title.
pub fn screen_title(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Dashboard => "Dashboard",
        ScreenId::Travel    => "Travel Guardian",
        ScreenId::Assistant => "Virtual Assistant",
        ScreenId::Contacts  => "Emergency Contacts",
        ScreenId::Emergency => "Emergency Mode",
    }
}

/// Page fill: the emergency screen paints the whole window red.
fn background(view: EffectiveView, theme: &Theme) -> Color {
    if view.screen == ScreenId::Emergency {
        theme.destructive
    } else {
        theme.background
    }
}

/// Build the whole window content for the current state.
pub fn render<'a>(state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
    let view = state.effective_view();

    let body: Element<'a, Message> = match view.screen {
        ScreenId::Dashboard => screens::dashboard::view(state, theme),
        ScreenId::Travel    => screens::travel::view(theme),
        ScreenId::Assistant => screens::assistant::view(theme),
        ScreenId::Contacts  => screens::contacts::view(state, theme),
        ScreenId::Emergency => screens::emergency::view(state, theme),
    };

    let page = column![
        StatusLine::new().view(state, theme),
        scrollable(body).height(Length::Fill),
    ];

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::fill(background(view, theme), 0.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerai_core::battery::BatteryLevel;

    #[test]
    fn every_screen_has_a_title() {
        for screen in ScreenId::ALL {
            assert!(!screen_title(screen).is_empty());
        }
        assert_eq!(screen_title(ScreenId::Travel), "Travel Guardian");
    }

    #[test]
    fn critical_level_paints_the_window_red() {
        let theme = Theme::default();
        let state = AppState::new(BatteryLevel::new(5), false);
        assert_eq!(background(state.effective_view(), &theme), theme.destructive);
    }

    #[test]
    fn normal_level_uses_the_page_background() {
        let theme = Theme::default();
        let mut state = AppState::new(BatteryLevel::new(50), false);
        state.selector.select(ScreenId::Contacts);
        assert_eq!(background(state.effective_view(), &theme), theme.background);
    }
}
