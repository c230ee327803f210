//! Validation error definitions

use contact_shared::Language;
use thiserror::Error;

/// Contact fields subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Address,
}

impl ContactField {
    /// Field name as it appears in requests
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Address => "address",
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Phone => "Phone",
            ContactField::Address => "Address",
        }
    }

    fn label_zh(&self) -> &'static str {
        match self {
            ContactField::Name => "姓名",
            ContactField::Phone => "電話",
            ContactField::Address => "地址",
        }
    }
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required | {}為必填欄位", .field.label_en(), .field.label_zh())]
    Required { field: ContactField },

    #[error(
        "{} must not exceed {max} characters | {}長度不可超過 {max} 字元",
        .field.label_en(),
        .field.label_zh()
    )]
    TooLong { field: ContactField, max: usize },

    #[error("Contact ID must be positive | 聯絡人 ID 必須為正數")]
    NonPositiveId { value: i64 },

    #[error("Unknown operation type: {value} | 未知的操作類型: {value}")]
    UnknownOperationType { value: String },
}

impl ValidationError {
    /// The request field at fault, if the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::Required { field } | ValidationError::TooLong { field, .. } => {
                Some(field.as_str())
            }
            ValidationError::NonPositiveId { .. } => Some("id"),
            ValidationError::UnknownOperationType { .. } => Some("operationType"),
        }
    }

    /// Message in the requested language
    ///
    /// Built per language so that values echoed from the request never
    /// interfere with language selection.
    pub fn message(&self, lang: Language) -> String {
        match lang {
            Language::English => self.message_en(),
            Language::TraditionalChinese => self.message_zh(),
        }
    }

    fn message_en(&self) -> String {
        match self {
            ValidationError::Required { field } => format!("{} is required", field.label_en()),
            ValidationError::TooLong { field, max } => {
                format!("{} must not exceed {} characters", field.label_en(), max)
            }
            ValidationError::NonPositiveId { .. } => "Contact ID must be positive".to_string(),
            ValidationError::UnknownOperationType { value } => {
                format!("Unknown operation type: {}", value)
            }
        }
    }

    fn message_zh(&self) -> String {
        match self {
            ValidationError::Required { field } => format!("{}為必填欄位", field.label_zh()),
            ValidationError::TooLong { field, max } => {
                format!("{}長度不可超過 {} 字元", field.label_zh(), max)
            }
            ValidationError::NonPositiveId { .. } => "聯絡人 ID 必須為正數".to_string(),
            ValidationError::UnknownOperationType { value } => {
                format!("未知的操作類型: {}", value)
            }
        }
    }
}
