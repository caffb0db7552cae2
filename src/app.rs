//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::App;
use state::{CoreState, ReleaseInfo, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so haptics and motion preferences apply to the banner
        let settings = crate::features::Settings::load();

        // 2. Initialize sub-states
        let core = CoreState::new(settings);
        let ui = UiState::new(ReleaseInfo::default());

        let app = Self { core, ui };
        tracing::info!("Announcing release v{}", app.ui.release.version);

        // 3. Mount the banner once the runtime is up
        (app, Task::done(Message::ShowBanner))
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        "Feather".to_string()
    }

    /// Animation frames only while the banner transition runs
    ///
    /// Reduce motion is applied when a banner is mounted, so a banner that
    /// started its transition before the toggle still gets its frames.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if subscription_logic::needs_animation_subscription(self.ui.has_active_animations()) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(has_animations: bool) -> bool {
        has_animations
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn animation_frames_only_while_animating() {
        assert!(needs_animation_subscription(true));
        assert!(!needs_animation_subscription(false));
    }
}
