//! Feature modules - services separated from UI
//!
//! Features should not depend on UI components directly.

pub mod haptics;
pub mod settings;

pub use haptics::HapticsManager;
pub use settings::Settings;
