//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting, status styling, image URLs and browser wrappers (geolocation,
//! sharing) live here so every page renders the same values the same way.

pub mod auth;
pub mod format;
pub mod geolocation;
pub mod image;
pub mod share;
pub mod slug;
pub mod status;
