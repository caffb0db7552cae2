//! Application messages

use crate::ui::components::update_banner;

/// Notifications the update banner's callbacks forward to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The user asked to install this version
    UpdateRequested(String),
    /// The user postponed this version
    BannerDismissed(String),
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Update banner ============
    /// Button pressed inside the banner
    Banner(update_banner::Event),
    /// Callback from the banner, re-dispatched after the banner handled its event
    Host(HostEvent),
    /// Mount a fresh banner for the current release
    ShowBanner,

    // ============ Animation ============
    /// Frame tick while a transition is running
    AnimationTick,

    // ============ Settings ============
    UpdateDarkMode(bool),
    UpdateHapticsEnabled(bool),
    UpdateReduceMotion(bool),
    /// Background save finished
    SettingsSaved(Result<(), String>),
}
