//! Update banner message handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::{HostEvent, Message};
use crate::app::state::{App, CoreState, UiState};

impl App {
    /// Handle banner interactions, callback follow-ups and transition frames
    pub(super) fn handle_banner(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Banner(event) => Some(banner_event(&mut self.core, &mut self.ui, *event)),
            Message::Host(event) => {
                self.ui.status = Some(status_line(event));
                Some(Task::none())
            }
            Message::ShowBanner => {
                let banner = self.core.mount_banner(&self.ui.release);
                self.ui.update_banner = Some(banner);
                self.ui.status = None;
                Some(Task::none())
            }
            Message::AnimationTick => {
                if let Some(banner) = self.ui.update_banner.as_mut() {
                    banner.tick(Instant::now());
                }
                unmount_if_gone(&mut self.ui);
                Some(Task::none())
            }
            _ => None,
        }
    }
}

fn banner_event(
    core: &mut CoreState,
    ui: &mut UiState,
    event: crate::ui::components::update_banner::Event,
) -> Task<Message> {
    let Some(banner) = ui.update_banner.as_mut() else {
        tracing::debug!("Banner event {:?} with no banner mounted", event);
        return Task::none();
    };
    banner.update(event);
    unmount_if_gone(ui);

    // Callbacks ran synchronously inside the banner; forward what they reported
    Task::batch(
        core.drain_host_events()
            .into_iter()
            .map(|event| Task::done(Message::Host(event))),
    )
}

/// Remove the banner from the tree once its exit transition has settled
fn unmount_if_gone(ui: &mut UiState) {
    if ui
        .update_banner
        .as_ref()
        .is_some_and(|banner| !banner.is_on_screen())
    {
        tracing::debug!("Unmounting update banner");
        ui.update_banner = None;
    }
}

fn status_line(event: &HostEvent) -> String {
    match event {
        HostEvent::UpdateRequested(version) => format!("Downloading v{}…", version),
        HostEvent::BannerDismissed(version) => format!("Update to v{} postponed", version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::app::state::ReleaseInfo;
    use crate::app::subscription_logic::needs_animation_subscription;
    use crate::features::Settings;
    use crate::ui::components::update_banner::Event;

    fn reduced_motion_state() -> (CoreState, UiState) {
        let mut settings = Settings::default();
        settings.display.reduce_motion = true;
        (CoreState::new(settings), UiState::new(ReleaseInfo::default()))
    }

    #[test]
    fn test_update_press_reports_to_host() {
        let (mut core, mut ui) = reduced_motion_state();
        ui.update_banner = Some(core.mount_banner(&ui.release));

        let banner = ui.update_banner.as_mut().unwrap();
        banner.update(Event::UpdatePressed);

        assert_eq!(
            core.drain_host_events(),
            vec![HostEvent::UpdateRequested("1.2.0".to_string())]
        );
        assert!(core.drain_host_events().is_empty());
    }

    #[test]
    fn test_dismiss_press_unmounts_without_motion() {
        let (mut core, mut ui) = reduced_motion_state();
        ui.update_banner = Some(core.mount_banner(&ui.release));

        let _ = banner_event(&mut core, &mut ui, Event::DismissPressed);

        assert!(ui.update_banner.is_none());
    }

    #[test]
    fn test_reduce_motion_toggle_keeps_exit_ticking() {
        let (mut core, mut ui) = (
            CoreState::new(Settings::default()),
            UiState::new(ReleaseInfo::default()),
        );
        ui.update_banner = Some(core.mount_banner(&ui.release));

        let start = Instant::now();
        let banner = ui.update_banner.as_mut().unwrap();
        for step in 0..60u64 {
            banner.tick(start + Duration::from_millis(step * 16));
        }
        let _ = banner_event(&mut core, &mut ui, Event::DismissPressed);
        let banner = ui.update_banner.as_mut().unwrap();
        banner.tick(start + Duration::from_millis(60 * 16 + 40));

        // Toggled mid-exit: the mounted banner keeps animating
        core.settings.display.reduce_motion = true;

        let banner = ui.update_banner.as_ref().unwrap();
        assert!(!banner.is_visible());
        assert!(banner.is_animating());
        assert!(needs_animation_subscription(ui.has_active_animations()));
    }

    #[test]
    fn test_event_without_banner_is_ignored() {
        let (mut core, mut ui) = reduced_motion_state();

        let _ = banner_event(&mut core, &mut ui, Event::UpdatePressed);

        assert!(ui.update_banner.is_none());
        assert!(core.drain_host_events().is_empty());
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(
            status_line(&HostEvent::UpdateRequested("1.2.0".into())),
            "Downloading v1.2.0…"
        );
        assert_eq!(
            status_line(&HostEvent::BannerDismissed("1.2.0".into())),
            "Update to v1.2.0 postponed"
        );
    }
}
