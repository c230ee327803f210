//! # Contact Book API
//!
//! REST surface of the contact book service. Contacts are managed under
//! `/api/contacts`; every change is recorded automatically and can be read
//! back under `/api/audit-logs`.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod openapi;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
