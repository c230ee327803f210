//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language used for user-facing messages
///
/// Traditional Chinese is the service's native language; English is
/// served when the client asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "zh-TW")]
    #[default]
    TraditionalChinese,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Pick the highest-weighted supported language from an `Accept-Language` value
    ///
    /// Example: `"en-US,en;q=0.9,zh-TW;q=0.8"` resolves to English.
    pub fn from_accept_language(header: &str) -> Self {
        let mut best: Option<(Language, f32)> = None;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim().to_lowercase();
            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            let language = if tag.starts_with("en") {
                Language::English
            } else if tag.starts_with("zh") {
                Language::TraditionalChinese
            } else {
                continue;
            };

            if best.map_or(true, |(_, q)| quality > q) {
                best = Some((language, quality));
            }
        }

        best.map(|(language, _)| language).unwrap_or_default()
    }

    /// Get language code (BCP 47)
    pub fn code(&self) -> &'static str {
        match self {
            Language::TraditionalChinese => "zh-TW",
            Language::English => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
