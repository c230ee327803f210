pub mod cors;
pub mod request_context;

pub use cors::*;
pub use request_context::*;
