//! Settings update handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(self.save_settings())
            }
            Message::UpdateHapticsEnabled(enabled) => {
                self.core.settings.feedback.haptics_enabled = *enabled;
                self.core.haptics.set_enabled(*enabled);
                Some(self.save_settings())
            }
            Message::UpdateReduceMotion(enabled) => {
                // Applies to banners mounted from now on
                self.core.settings.display.reduce_motion = *enabled;
                Some(self.save_settings())
            }
            Message::SettingsSaved(result) => {
                match result {
                    Ok(()) => tracing::debug!("Settings saved"),
                    Err(e) => tracing::warn!("Failed to save settings: {}", e),
                }
                Some(Task::none())
            }
            _ => None,
        }
    }

    fn save_settings(&self) -> Task<Message> {
        Task::perform(
            helpers::save_settings(self.core.settings.clone()),
            |result| Message::SettingsSaved(result.map_err(|e| format!("{:#}", e))),
        )
    }
}
