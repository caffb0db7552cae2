//! UI Components module - business-specific composite components
//!
//! Components own their local state and emit their own event type; the
//! application maps those events into `crate::app::Message`.

pub mod update_banner;

pub use update_banner::{BannerProps, UpdateBanner};
