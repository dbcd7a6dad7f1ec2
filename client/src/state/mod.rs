//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `nearby`, `orders`, etc.) so each page
//! depends on a small focused model. Validation, filtering and action
//! visibility live here as plain functions; pages only wire them to signals.

pub mod auth;
pub mod carousel;
pub mod categories;
pub mod nearby;
pub mod orders;
pub mod products;
pub mod profile;
pub mod shops;
pub mod toast;
