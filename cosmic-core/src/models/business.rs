//! Business profile singleton

use serde::{Deserialize, Serialize};

/// Replacement values for every mutable business-info column.
///
/// There is no merge: a field left out is stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfoUpdate {
    pub business_name: Option<String>,
    pub email_address: Option<String>,
    pub whatsapp_number: Option<String>,
    pub business_address: Option<String>,
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

/// Nested view of the social-link columns, served as `socialMedia`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
}
