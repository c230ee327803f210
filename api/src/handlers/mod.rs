//! Conversion of failures into HTTP error responses

pub mod error;

pub use error::{
    handle_domain_error, json_error_handler, not_found, path_error_handler, validation_response,
};
