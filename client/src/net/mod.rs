//! Networking modules for the REST API and live order notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `notify` manages the order-notification socket
//! with its polling fallback, and `types` defines the backend DTOs.

pub mod api;
pub mod notify;
pub mod types;
