use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use contact_core::domain::entities::{Contact, NAME_MAX_LENGTH, PHONE_MAX_LENGTH};
use contact_core::errors::{ContactField, ValidationError as DomainValidationError};

/// Body of `POST /api/contacts`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    /// Contact name, at most 50 characters
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    /// Phone number, at most 20 characters
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    /// Optional address, at most 200 characters
    #[validate(length(
        max = 200,
        code = "too_long",
        message = "Address must not exceed 200 characters | 地址長度不可超過 200 字元"
    ))]
    pub address: Option<String>,
}

impl CreateContactRequest {
    /// Fields in the order their errors are reported
    pub const FIELDS: [&'static str; 3] = ["name", "phone", "address"];
}

/// Body of `PUT /api/contacts/{id}`
///
/// Only presence is checked here; lengths are enforced by the domain.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContactRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_name_present"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_phone_present"))]
    pub phone: String,

    pub address: Option<String>,
}

impl UpdateContactRequest {
    pub const FIELDS: [&'static str; 3] = ["name", "phone", "address"];
}

/// A stored contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Contact> for ContactResponse {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id().map(i64::from).unwrap_or_default(),
            name: contact.name().to_string(),
            phone: contact.phone().to_string(),
            address: contact.address().map(str::to_string),
            created_at: contact.created_at(),
            updated_at: contact.updated_at(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Validator error carrying the bilingual domain message
fn field_error(error: DomainValidationError) -> ValidationError {
    let code = match error {
        DomainValidationError::TooLong { .. } => "too_long",
        _ => "required",
    };
    ValidationError::new(code).with_message(Cow::Owned(error.to_string()))
}

fn check(field: ContactField, value: &str, max: Option<usize>) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(field_error(DomainValidationError::Required { field }));
    }
    match max {
        Some(max) if value.chars().count() > max => {
            Err(field_error(DomainValidationError::TooLong { field, max }))
        }
        _ => Ok(()),
    }
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    check(ContactField::Name, value, Some(NAME_MAX_LENGTH))
}

fn validate_phone(value: &str) -> Result<(), ValidationError> {
    check(ContactField::Phone, value, Some(PHONE_MAX_LENGTH))
}

fn validate_name_present(value: &str) -> Result<(), ValidationError> {
    check(ContactField::Name, value, None)
}

fn validate_phone_present(value: &str) -> Result<(), ValidationError> {
    check(ContactField::Phone, value, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, phone: &str, address: Option<&str>) -> CreateContactRequest {
        CreateContactRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(create("張三", "0912345678", Some("台北市")).validate().is_ok());
        assert!(create("張三", "0912345678", None).validate().is_ok());
    }

    #[test]
    fn test_blank_fields_report_required() {
        let errors = create(" ", "", None).validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields["name"][0].code, "required");
        assert_eq!(
            fields["phone"][0].message.as_deref(),
            Some("Phone is required | 電話為必填欄位")
        );
    }

    #[test]
    fn test_too_long_fields() {
        let errors = create(&"名".repeat(51), &"1".repeat(21), Some(&"a".repeat(201)))
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields["name"][0].code, "too_long");
        assert_eq!(fields["phone"][0].code, "too_long");
        assert_eq!(fields["address"][0].code, "too_long");
    }

    #[test]
    fn test_update_request_ignores_length() {
        let request = UpdateContactRequest {
            name: "名".repeat(60),
            phone: "0912345678".to_string(),
            address: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_and_null_fields_deserialize_as_empty() {
        let request: CreateContactRequest =
            serde_json::from_str(r#"{"name": null, "address": "台北市"}"#).unwrap();
        assert_eq!(request.name, "");
        assert_eq!(request.phone, "");
        assert!(request.validate().is_err());
    }
}
