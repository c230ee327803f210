//! Contact use cases.

mod commands;
mod service;

pub use commands::{CreateContactCommand, UpdateContactCommand};
pub use service::ContactService;
