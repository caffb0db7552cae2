//! Message update handlers - thin dispatcher delegating to submodules

mod banner;
mod settings;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_banner(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
