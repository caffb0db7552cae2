//! Presence transition for components entering and leaving the screen
//!
//! Drives a single spring from 0.0 (off-screen, transparent) to 1.0
//! (in place, opaque). Views read the progress and derive both the slide
//! offset and the fade from it.

use std::time::Instant;

use iced_anim::Animated;
use iced_anim::spring::Motion;

/// Progress below this counts as fully gone
const SETTLED_EPSILON: f32 = 0.01;

/// Spring used for both insertion and removal
fn presence_motion() -> Motion {
    Motion::SNAPPY
}

#[derive(Debug)]
pub struct PresenceTransition {
    animation: Animated<f32>,
    reduce_motion: bool,
}

impl PresenceTransition {
    /// Start an insertion transition
    ///
    /// With `reduce_motion` the component is placed immediately.
    pub fn entering(reduce_motion: bool) -> Self {
        if reduce_motion {
            return Self {
                animation: Animated::spring(1.0, presence_motion()),
                reduce_motion,
            };
        }

        let mut animation = Animated::spring(0.0, presence_motion());
        animation.update(1.0.into());
        Self {
            animation,
            reduce_motion,
        }
    }

    /// Start the removal transition
    pub fn exit(&mut self) {
        if self.reduce_motion {
            self.animation = Animated::spring(0.0, presence_motion());
        } else {
            self.animation.update(0.0.into());
        }
    }

    /// Whether removal has been requested
    pub fn is_exiting(&self) -> bool {
        *self.animation.target() == 0.0
    }

    /// Progress clamped to [0, 1] (the spring may overshoot)
    pub fn progress(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Whether anything should still be painted
    pub fn is_on_screen(&self) -> bool {
        self.is_animating() || self.progress() > SETTLED_EPSILON
    }

    /// Vertical offset for a slide from the top edge over `distance`
    pub fn slide_offset(&self, distance: f32) -> f32 {
        -distance * (1.0 - self.progress())
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entering_starts_offscreen() {
        let presence = PresenceTransition::entering(false);

        assert!(presence.is_animating());
        assert!(!presence.is_exiting());
        assert_eq!(presence.progress(), 0.0);
        assert_eq!(presence.slide_offset(80.0), -80.0);
        assert!(presence.is_on_screen());
    }

    #[test]
    fn test_reduce_motion_is_immediate() {
        let mut presence = PresenceTransition::entering(true);
        assert!(!presence.is_animating());
        assert_eq!(presence.progress(), 1.0);
        assert_eq!(presence.slide_offset(80.0), 0.0);

        presence.exit();
        assert!(presence.is_exiting());
        assert!(!presence.is_animating());
        assert_eq!(presence.progress(), 0.0);
        assert!(!presence.is_on_screen());
    }

    #[test]
    fn test_exit_targets_zero() {
        let mut presence = PresenceTransition::entering(true);
        let mut animated = PresenceTransition::entering(false);

        presence.exit();
        animated.exit();

        assert!(presence.is_exiting());
        assert!(animated.is_exiting());
    }

    #[test]
    fn test_progress_range() {
        let mut presence = PresenceTransition::entering(false);
        let now = Instant::now();
        for step in 0..30 {
            presence.tick(now + std::time::Duration::from_millis(step * 16));
            assert!(presence.progress() >= 0.0);
            assert!(presence.progress() <= 1.0);
        }
    }
}
