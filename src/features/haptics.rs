//! Haptic feedback service
//!
//! Desktop hardware has no tactile engine, so the shared manager records
//! each cue and reports it through tracing. Platforms with a real actuator
//! plug in their own [`HapticFeedback`] implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use once_cell::sync::Lazy;

/// Distinct feedback presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticCue {
    /// Confirmation pattern after a completed action
    Success,
    /// Light single tap
    SoftImpact,
}

impl HapticCue {
    pub fn name(&self) -> &'static str {
        match self {
            HapticCue::Success => "success",
            HapticCue::SoftImpact => "soft_impact",
        }
    }
}

/// Outbound haptic feedback seam used by interactive components
pub trait HapticFeedback: Send + Sync {
    /// Play a single cue. Fire-and-forget, never fails.
    fn play(&self, cue: HapticCue);

    fn success(&self) {
        self.play(HapticCue::Success);
    }

    fn soft_impact(&self) {
        self.play(HapticCue::SoftImpact);
    }
}

static SHARED: Lazy<Arc<HapticsManager>> = Lazy::new(|| Arc::new(HapticsManager::new()));

/// Process-wide haptics manager
#[derive(Debug)]
pub struct HapticsManager {
    enabled: AtomicBool,
    success_count: AtomicU64,
    soft_impact_count: AtomicU64,
}

impl Default for HapticsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticsManager {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            success_count: AtomicU64::new(0),
            soft_impact_count: AtomicU64::new(0),
        }
    }

    /// The shared instance components use unless given another one
    pub fn shared() -> Arc<HapticsManager> {
        SHARED.clone()
    }

    /// Enable or disable all cues (driven by user settings)
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        tracing::debug!("Haptic feedback {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Number of cues of the given kind played so far
    #[cfg(test)]
    pub fn played(&self, cue: HapticCue) -> u64 {
        match cue {
            HapticCue::Success => self.success_count.load(Ordering::Relaxed),
            HapticCue::SoftImpact => self.soft_impact_count.load(Ordering::Relaxed),
        }
    }
}

impl HapticFeedback for HapticsManager {
    fn play(&self, cue: HapticCue) {
        if !self.is_enabled() {
            tracing::trace!("Haptic cue {} skipped (disabled)", cue.name());
            return;
        }

        let counter = match cue {
            HapticCue::Success => &self.success_count,
            HapticCue::SoftImpact => &self.soft_impact_count,
        };
        let played = counter.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!("Haptic cue: {} (#{})", cue.name(), played);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_are_counted_separately() {
        let haptics = HapticsManager::new();

        haptics.success();
        haptics.soft_impact();
        haptics.soft_impact();

        assert_eq!(haptics.played(HapticCue::Success), 1);
        assert_eq!(haptics.played(HapticCue::SoftImpact), 2);
    }

    #[test]
    fn test_disabled_manager_plays_nothing() {
        let haptics = HapticsManager::new();
        haptics.set_enabled(false);

        haptics.success();
        haptics.soft_impact();

        assert!(!haptics.is_enabled());
        assert_eq!(haptics.played(HapticCue::Success), 0);
        assert_eq!(haptics.played(HapticCue::SoftImpact), 0);

        haptics.set_enabled(true);
        haptics.success();
        assert_eq!(haptics.played(HapticCue::Success), 1);
    }

    #[test]
    fn test_shared_is_single_instance() {
        assert!(Arc::ptr_eq(&HapticsManager::shared(), &HapticsManager::shared()));
    }
}
