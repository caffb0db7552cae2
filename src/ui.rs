//! UI module
//!
//! # Architecture
//!
//! - **Animation** (`animation`): spring-driven transitions
//! - **Components** (`components`): Business-specific UI with event handling
//! - **Theme** (`theme`): palette and widget styles

pub mod animation;
pub mod components;
pub mod icons;
pub mod theme;
