//! Application state definitions

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::message::HostEvent;
use crate::features::{HapticsManager, Settings};
use crate::ui::components::{BannerProps, UpdateBanner};

/// Release announced by the banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub version: String,
    pub message: String,
}

impl Default for ReleaseInfo {
    fn default() -> Self {
        Self {
            version: "1.2.0".to_string(),
            message: "New features and bug fixes".to_string(),
        }
    }
}

/// Main application state
pub struct App {
    /// Core infrastructure (Settings, haptics, callback channel)
    pub core: CoreState,
    /// UI state (banner, status line)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub haptics: Arc<HapticsManager>,
    /// Sender handed to banner callbacks
    pub host_events: mpsc::UnboundedSender<HostEvent>,
    /// Events the banner callbacks produced, drained after each banner message
    pub host_inbox: mpsc::UnboundedReceiver<HostEvent>,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let haptics = HapticsManager::shared();
        haptics.set_enabled(settings.feedback.haptics_enabled);

        let (host_events, host_inbox) = mpsc::unbounded_channel();

        Self {
            settings,
            haptics,
            host_events,
            host_inbox,
        }
    }

    /// Build a banner wired to the host channel
    pub fn mount_banner(&self, release: &ReleaseInfo) -> UpdateBanner {
        let on_update = {
            let tx = self.host_events.clone();
            let version = release.version.clone();
            move || {
                let _ = tx.send(HostEvent::UpdateRequested(version.clone()));
            }
        };
        let on_dismiss = {
            let tx = self.host_events.clone();
            let version = release.version.clone();
            move || {
                let _ = tx.send(HostEvent::BannerDismissed(version.clone()));
            }
        };

        let props = BannerProps::new(&release.version, &release.message)
            .on_update(on_update)
            .on_dismiss(on_dismiss);

        UpdateBanner::new(props)
            .with_haptics(self.haptics.clone())
            .reduce_motion(self.settings.display.reduce_motion)
    }

    /// Take every pending callback notification
    pub fn drain_host_events(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.host_inbox.try_recv() {
            events.push(event);
        }
        events
    }
}

/// UI State
pub struct UiState {
    pub release: ReleaseInfo,
    /// Mounted banner; `None` once the host unmounted it
    pub update_banner: Option<UpdateBanner>,
    /// Outcome of the last banner interaction
    pub status: Option<String>,
}

impl UiState {
    pub fn new(release: ReleaseInfo) -> Self {
        Self {
            release,
            update_banner: None,
            status: None,
        }
    }

    /// Check if any transition is currently running
    pub fn has_active_animations(&self) -> bool {
        self.update_banner
            .as_ref()
            .is_some_and(|banner| banner.is_animating())
    }
}
