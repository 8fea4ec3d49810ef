// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! Toasts are small cards with a kind-colored accent border, the kind glyph,
//! the message and a dismiss button. The overlay stacks the manager's
//! visible notifications at the configured screen position. Rendering only
//! reads the manager; the dismiss button emits [`Message::Dismiss`].

use crate::config::{Config, ToastPosition};
use crate::notifications::manager::{Manager, Message};
use crate::notifications::{Clock, Notification};
use crate::ui::design_tokens::{border, opacity, palette, sizing, typography, SHADOW_OFFSET_Y};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme, Vector};

/// Glyph on the dismiss button.
const DISMISS_GLYPH: &str = "\u{2715}";

/// Visual parameters resolved from a [`Config`] once per frame.
///
/// Colors left unset in the config stay `None` and follow the theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub primary: Option<Color>,
    pub background: Option<Color>,
    pub text: Option<Color>,
    pub corner_radius: f32,
    pub shadow_radius: f32,
    pub shadow_opacity: f32,
    pub position: ToastPosition,
    pub spacing: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
}

impl ToastStyle {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            primary: config.primary_color().map(Color::from),
            background: config.background_color().map(Color::from),
            text: config.text_color().map(Color::from),
            corner_radius: config.corner_radius(),
            shadow_radius: config.shadow_radius(),
            shadow_opacity: config.shadow_opacity().clamp(0.0, 1.0),
            position: config.position(),
            spacing: config.spacing(),
            horizontal_padding: config.horizontal_padding(),
            vertical_padding: config.vertical_padding(),
        }
    }

    fn padding(self) -> Padding {
        Padding::from([self.vertical_padding, self.horizontal_padding])
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, style: ToastStyle) -> Element<'a, Message> {
        let kind = notification.kind();
        let accent = kind.color();

        let glyph = Text::new(kind.glyph())
            .size(typography::GLYPH)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(style.text.unwrap_or(theme.palette().text)),
            });

        let dismiss_button = button(Text::new(DISMISS_GLYPH).size(typography::DISMISS))
            .on_press(Message::Dismiss(notification.id()))
            .padding(sizing::DISMISS_PADDING)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, style.primary));

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(sizing::TOAST_GAP)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(style.padding())
            .style(move |theme: &Theme| toast_container_style(theme, accent, style))
            .into()
    }

    /// Renders the overlay with all visible notifications, oldest first.
    ///
    /// Layer it above the application content, e.g. with `iced::widget::stack`.
    pub fn view_overlay<'a, C: Clock>(manager: &'a Manager<C>, config: &Config) -> Element<'a, Message> {
        let style = ToastStyle::from_config(config);
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, style))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(style.spacing)
                .align_x(alignment::Horizontal::Center);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(stack_alignment(style.position))
                .padding(style.padding())
                .into()
        }
    }
}

/// Vertical anchor of the toast stack.
fn stack_alignment(position: ToastPosition) -> alignment::Vertical {
    match position {
        ToastPosition::Top => alignment::Vertical::Top,
        ToastPosition::Bottom => alignment::Vertical::Bottom,
        ToastPosition::Center => alignment::Vertical::Center,
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent: Color, style: ToastStyle) -> container::Style {
    let background = style
        .background
        .unwrap_or(theme.extended_palette().background.base.color);

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: style.corner_radius.into(),
        },
        shadow: Shadow {
            color: Color {
                a: style.shadow_opacity,
                ..palette::BLACK
            },
            offset: Vector::new(0.0, SHADOW_OFFSET_Y),
            blur_radius: style.shadow_radius,
        },
        text_color: Some(style.text.unwrap_or(theme.palette().text)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, tint: Option<Color>) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = tint.unwrap_or(base.text);

    let hover_background = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color,
            border: Border {
                radius: sizing::DISMISS_PADDING.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color,
            border: Border {
                radius: sizing::DISMISS_PADDING.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text_color
            },
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        },
    }
}
