//! Domain-specific error types and error handling.
//!
//! `Display` output is bilingual, `English | 繁體中文`, for logs. Clients get
//! a single language through `localized`/`message`.

mod types;

pub use types::{ContactField, ValidationError};

use contact_shared::Language;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {id} | 聯絡人不存在: {id}")]
    ContactNotFound { id: i64 },

    #[error("Audit recording failed: {message} | 稽核紀錄寫入失敗: {message}")]
    Audit { message: String },

    #[error("Internal error: {message} | 內部錯誤: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for storage and mapping failures
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// The request field at fault, for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation(err) => err.field(),
            _ => None,
        }
    }

    /// Message in the requested language
    pub fn localized(&self, lang: Language) -> String {
        match (self, lang) {
            (DomainError::Validation(err), _) => err.message(lang),
            (DomainError::ContactNotFound { id }, Language::English) => {
                format!("Contact not found: {}", id)
            }
            (DomainError::ContactNotFound { id }, Language::TraditionalChinese) => {
                format!("聯絡人不存在: {}", id)
            }
            (DomainError::Audit { message }, Language::English) => {
                format!("Audit recording failed: {}", message)
            }
            (DomainError::Audit { message }, Language::TraditionalChinese) => {
                format!("稽核紀錄寫入失敗: {}", message)
            }
            (DomainError::Internal { message }, Language::English) => {
                format!("Internal error: {}", message)
            }
            (DomainError::Internal { message }, Language::TraditionalChinese) => {
                format!("內部錯誤: {}", message)
            }
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Pick one side of a fixed bilingual `English | 中文` catalogue message.
/// Messages without a separator are returned unchanged. Never use it on
/// text that embeds request input; use `localized` instead.
pub fn localize(message: &str, lang: Language) -> &str {
    match message.split_once(" | ") {
        Some((english, _)) if lang == Language::English => english,
        Some((_, chinese)) => chinese,
        None => message,
    }
}
