//! Application view rendering

use iced::widget::{Space, button, column, container, stack, text, toggler};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::theme;

impl App {
    /// Host screen with the update banner pinned to the top edge
    pub fn view(&self) -> Element<'_, Message> {
        let settings = &self.core.settings;

        let status = text(self.ui.status.clone().unwrap_or_default())
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            });

        let show_again = button(text("Show update banner").size(14))
            .padding([8, 16])
            .style(theme::secondary_button)
            .on_press_maybe(
                self.ui
                    .update_banner
                    .is_none()
                    .then_some(Message::ShowBanner),
            );

        let preferences = column![
            toggler(settings.display.dark_mode)
                .label("Dark mode")
                .on_toggle(Message::UpdateDarkMode),
            toggler(settings.feedback.haptics_enabled)
                .label("Haptic feedback")
                .on_toggle(Message::UpdateHapticsEnabled),
            toggler(settings.display.reduce_motion)
                .label("Reduce motion")
                .on_toggle(Message::UpdateReduceMotion),
        ]
        .spacing(12)
        .width(240);

        let screen = container(
            column![
                text("Feather").size(28),
                status,
                Space::new().height(24),
                preferences,
                Space::new().height(24),
                show_again,
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::main_content);

        let banner: Element<'_, Message> = match &self.ui.update_banner {
            Some(banner) => banner.view().map(Message::Banner),
            None => Space::new().width(0).height(0).into(),
        };

        stack![screen, column![banner, Space::new().height(Fill)]].into()
    }
}
