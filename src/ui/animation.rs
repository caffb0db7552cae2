//! Animation system
//!
//! Spring-driven transitions built on `iced_anim`.
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::PresenceTransition;
//!
//! let mut presence = PresenceTransition::entering(false);
//! presence.exit();
//! ```

mod presence;

pub use presence::PresenceTransition;
