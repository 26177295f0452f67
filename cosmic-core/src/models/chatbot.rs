//! Chat widget configuration singleton
//!
//! `services` is an ordered list of strings at the API and a JSON text
//! column at rest.

use serde::{Deserialize, Serialize};

/// Services seeded into a fresh database, in menu order
pub const DEFAULT_SERVICES: [&str; 8] = [
    "Kundali Reading",
    "Tarot Reading",
    "Career Guidance",
    "Love & Relationships",
    "Health Astrology",
    "Financial Forecast",
    "Vastu Consultation",
    "Gemstone Therapy",
];

/// `services` as callers send it: normally a list, occasionally the
/// already-serialized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServicesInput {
    List(Vec<String>),
    Raw(String),
}

/// Replacement values for every mutable chatbot-config column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatbotConfigUpdate {
    pub services: Option<ServicesInput>,
    pub google_maps_url: Option<String>,
    pub google_review_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub youtube_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub hours_weekday: Option<String>,
    pub hours_sunday: Option<String>,
}

impl ChatbotConfigUpdate {
    /// Column value for `services`: lists are serialized, raw text is kept.
    pub fn stored_services(&self) -> Option<String> {
        match &self.services {
            Some(ServicesInput::List(items)) => Some(encode_services(items)),
            Some(ServicesInput::Raw(text)) => Some(text.clone()),
            None => None,
        }
    }
}

/// Serialize a service list for storage.
pub fn encode_services<S: AsRef<str>>(services: &[S]) -> String {
    let items: Vec<&str> = services.iter().map(AsRef::as_ref).collect();
    // A list of strings always serializes; the fallback only keeps this total.
    serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_owned())
}

/// Parse the stored column back into the ordered list.
///
/// NULL or unparseable text yields an empty list instead of an error.
pub fn decode_services(stored: Option<&str>) -> Vec<String> {
    let Some(text) = stored else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(text) {
        Ok(services) => services,
        Err(err) => {
            tracing::warn!(error = %err, "stored chatbot services are not a JSON list, serving empty list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_survive_storage() {
        let cases: [Vec<String>; 3] = [
            vec![],
            vec!["Tarot Reading".into()],
            vec!["Love & Relationships".into(), "Vastu \"Pro\"".into(), "ज्योतिष".into()],
        ];
        for services in cases {
            let stored = encode_services(&services);
            assert_eq!(decode_services(Some(&stored)), services);
        }
    }

    #[test]
    fn defaults_keep_menu_order() {
        let stored = encode_services(&DEFAULT_SERVICES);
        let decoded = decode_services(Some(&stored));
        assert_eq!(decoded.first().map(String::as_str), Some("Kundali Reading"));
        assert_eq!(decoded.last().map(String::as_str), Some("Gemstone Therapy"));
        assert_eq!(decoded.len(), 8);
    }

    #[test]
    fn garbage_degrades_to_empty() {
        assert!(decode_services(Some("Tarot, Kundali")).is_empty());
        assert!(decode_services(Some("{\"a\":1}")).is_empty());
        assert!(decode_services(None).is_empty());
    }

    #[test]
    fn update_accepts_list_or_text() {
        let update: ChatbotConfigUpdate =
            serde_json::from_str(r#"{"services": ["A", "B"], "hours_sunday": "Closed"}"#).unwrap();
        assert_eq!(update.stored_services().as_deref(), Some(r#"["A","B"]"#));
        assert_eq!(update.hours_sunday.as_deref(), Some("Closed"));
        assert_eq!(update.facebook_url, None);

        let update: ChatbotConfigUpdate = serde_json::from_str(r#"{"services": "[\"A\"]"}"#).unwrap();
        assert_eq!(update.stored_services().as_deref(), Some(r#"["A"]"#));

        let update: ChatbotConfigUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update.stored_services(), None);
    }
}
