// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_toast::config::Config;
    use iced_toast::notifications::NotificationKind;
    use iced_toast::ui::design_tokens::{opacity, palette, sizing, typography};
    use iced_toast::ui::ToastStyle;

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::SUCCESS_500;
        let _ = opacity::OVERLAY_SUBTLE;
        let _ = sizing::TOAST_WIDTH;
        let _ = typography::BODY;
    }

    #[test]
    fn kind_colors_come_from_palette() {
        assert_eq!(NotificationKind::Success.color(), palette::SUCCESS_500);
        assert_eq!(NotificationKind::Error.color(), palette::ERROR_500);
        assert_eq!(NotificationKind::Warning.color(), palette::WARNING_500);
        assert_eq!(NotificationKind::Info.color(), palette::INFO_500);
    }

    #[test]
    fn default_style_leaves_colors_to_theme() {
        let style = ToastStyle::from_config(&Config::default());
        assert!(style.primary.is_none());
        assert!(style.background.is_none());
        assert!(style.text.is_none());
    }
}
