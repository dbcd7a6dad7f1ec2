//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, dialogs, toasts) and the
//! cards and map used across pages, reading shared state from Leptos
//! context providers.

pub mod guard;
pub mod modal;
pub mod nearby_map;
pub mod navbar;
pub mod order_card;
pub mod product_card;
pub mod status_badge;
pub mod toast_host;
