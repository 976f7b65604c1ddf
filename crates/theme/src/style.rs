//! Style closures for Iced containers and buttons.
//!
//! Each helper copies the colours it needs out of the [`Theme`] so the
//! returned closure is `'static` and can be handed straight to `.style()`.

use crate::{colors::Color, Theme};
use iced::{
    widget::{button, container},
    Background, Border, Shadow, Vector,
};

fn border(color: Color, width: f32, radius: f32) -> Border {
    Border {
        color: color.to_iced(),
        width,
        radius: radius.into(),
    }
}

/// Elevated card surface.
pub fn card(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let bg = theme.card;
    let radius = theme.border_radius;
    move |_| container::Style {
        background: Some(Background::Color(bg.to_iced())),
        border: border(Color::WHITE.with_alpha(0.06), 1.0, radius),
        shadow: Shadow {
            color: Color::BLACK.with_alpha(0.35).to_iced(),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Flat row / tile inside a card.
pub fn tile(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let bg = theme.foreground.with_alpha(0.06);
    let radius = theme.border_radius * 0.66;
    move |_| container::Style {
        background: Some(Background::Color(bg.to_iced())),
        border: border(Color::BLACK.with_alpha(0.0), 0.0, radius),
        ..Default::default()
    }
}

/// Tinted callout with a faint outline in the same colour.
pub fn banner(tint: Color, theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let radius = theme.border_radius * 0.66;
    move |_| container::Style {
        background: Some(Background::Color(tint.with_alpha(0.12).to_iced())),
        border: border(tint.with_alpha(0.25), 1.0, radius),
        ..Default::default()
    }
}

/// Solid fill, used for bars, badges and full-screen backgrounds.
pub fn fill(color: Color, radius: f32) -> impl Fn(&iced::Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(color.to_iced())),
        border: border(color, 0.0, radius),
        ..Default::default()
    }
}

/// Large call-to-action button in the brand colour.
pub fn primary_button(theme: &Theme) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    let base = theme.primary;
    let radius = theme.border_radius;
    move |_, status| {
        let bg = match status {
            button::Status::Hovered  => base.with_alpha(0.9),
            button::Status::Pressed  => base.with_alpha(0.8),
            button::Status::Disabled => base.with_alpha(0.5),
            button::Status::Active   => base,
        };
        button::Style {
            background: Some(Background::Color(bg.to_iced())),
            text_color: Color::WHITE.to_iced(),
            border: border(base, 0.0, radius),
            shadow: Shadow {
                color: base.with_alpha(0.35).to_iced(),
                offset: Vector::new(0.0, 0.0),
                blur_radius: 20.0,
            },
            ..button::Style::default()
        }
    }
}

/// Card-coloured button with an outline.
pub fn secondary_button(theme: &Theme) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    let card = theme.card;
    let fg = theme.foreground;
    let radius = theme.border_radius;
    move |_, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => card.with_alpha(0.8),
            _ => card,
        };
        button::Style {
            background: Some(Background::Color(bg.to_iced())),
            text_color: fg.to_iced(),
            border: border(fg.with_alpha(0.1), 1.0, radius),
            ..button::Style::default()
        }
    }
}

/// Translucent button drawn on top of a coloured surface.
pub fn ghost_button(tint: Color, radius: f32) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_, status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => 0.25,
            _ => 0.12,
        };
        button::Style {
            background: Some(Background::Color(tint.with_alpha(alpha).to_iced())),
            text_color: tint.to_iced(),
            border: border(tint.with_alpha(0.3), 1.0, radius),
            ..button::Style::default()
        }
    }
}
