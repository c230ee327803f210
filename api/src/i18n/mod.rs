//! Localized messages for errors raised by the HTTP layer.
//!
//! The catalogue is embedded at compile time from `i18n/messages.toml`.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

use contact_shared::Language;

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub en: String,
    pub zh: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub general: HashMap<String, Message>,
}

pub static MESSAGES: Lazy<Messages> = Lazy::new(|| {
    parse_messages(include_str!("../../i18n/messages.toml")).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to parse message catalogue");
        Messages::default()
    })
});

fn parse_messages(source: &str) -> Result<Messages, toml::de::Error> {
    toml::from_str(source)
}

/// Message keys used by the HTTP layer
pub mod keys {
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const MALFORMED_BODY: &str = "malformed_body";
    pub const INVALID_PATH: &str = "invalid_path";
    pub const NOT_FOUND: &str = "not_found";
}

/// Look up a general message. Unknown keys come back unchanged.
pub fn message(key: &str, lang: Language) -> String {
    match MESSAGES.general.get(key) {
        Some(msg) => match lang {
            Language::English => msg.en.clone(),
            Language::TraditionalChinese => msg.zh.clone(),
        },
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_parses() {
        let messages = parse_messages(include_str!("../../i18n/messages.toml")).unwrap();
        for key in [
            keys::VALIDATION_FAILED,
            keys::INTERNAL_ERROR,
            keys::MALFORMED_BODY,
            keys::INVALID_PATH,
            keys::NOT_FOUND,
        ] {
            assert!(messages.general.contains_key(key), "missing {}", key);
        }
    }

    #[test]
    fn test_message_lookup() {
        assert_eq!(message(keys::VALIDATION_FAILED, Language::TraditionalChinese), "驗證失敗");
        assert_eq!(message(keys::INTERNAL_ERROR, Language::English), "An internal error occurred");
        assert_eq!(message("no_such_key", Language::English), "no_such_key");
    }
}
