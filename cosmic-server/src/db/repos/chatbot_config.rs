//! Chat widget configuration singleton (`id = 1`)

use cosmic_core::models::{decode_services, ChatbotConfigUpdate};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;

const RESOURCE: &str = "Config";

/// Row as stored; `services` is JSON text
#[derive(Debug, FromRow)]
struct ChatbotConfigRow {
    id: i64,
    services: Option<String>,
    google_maps_url: Option<String>,
    google_review_url: Option<String>,
    facebook_url: Option<String>,
    instagram_url: Option<String>,
    twitter_url: Option<String>,
    youtube_url: Option<String>,
    linkedin_url: Option<String>,
    hours_weekday: Option<String>,
    hours_sunday: Option<String>,
    updated_at: String,
}

/// Config as served, with `services` parsed back into a list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatbotConfig {
    pub id: i64,
    pub services: Vec<String>,
    pub google_maps_url: Option<String>,
    pub google_review_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub youtube_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub hours_weekday: Option<String>,
    pub hours_sunday: Option<String>,
    pub updated_at: String,
}

impl From<ChatbotConfigRow> for ChatbotConfig {
    fn from(row: ChatbotConfigRow) -> Self {
        Self {
            id: row.id,
            services: decode_services(row.services.as_deref()),
            google_maps_url: row.google_maps_url,
            google_review_url: row.google_review_url,
            facebook_url: row.facebook_url,
            instagram_url: row.instagram_url,
            twitter_url: row.twitter_url,
            youtube_url: row.youtube_url,
            linkedin_url: row.linkedin_url,
            hours_weekday: row.hours_weekday,
            hours_sunday: row.hours_sunday,
            updated_at: row.updated_at,
        }
    }
}

pub struct ChatbotConfigRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ChatbotConfigRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<ChatbotConfig, DbError> {
        let row = sqlx::query_as::<_, ChatbotConfigRow>(
            r#"
            SELECT id, services, google_maps_url, google_review_url, facebook_url,
                   instagram_url, twitter_url, youtube_url, linkedin_url,
                   hours_weekday, hours_sunday, updated_at
            FROM chatbot_config
            WHERE id = 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::singleton_missing(RESOURCE))?;

        Ok(ChatbotConfig::from(row))
    }

    /// Overwrite every mutable column; omitted fields become NULL.
    pub async fn replace(&self, update: &ChatbotConfigUpdate) -> Result<(), DbError> {
        let affected = sqlx::query(
            r#"
            UPDATE chatbot_config SET
                services = ?,
                google_maps_url = ?,
                google_review_url = ?,
                facebook_url = ?,
                instagram_url = ?,
                twitter_url = ?,
                youtube_url = ?,
                linkedin_url = ?,
                hours_weekday = ?,
                hours_sunday = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = 1
            "#,
        )
        .bind(update.stored_services())
        .bind(update.google_maps_url.as_deref())
        .bind(update.google_review_url.as_deref())
        .bind(update.facebook_url.as_deref())
        .bind(update.instagram_url.as_deref())
        .bind(update.twitter_url.as_deref())
        .bind(update.youtube_url.as_deref())
        .bind(update.linkedin_url.as_deref())
        .bind(update.hours_weekday.as_deref())
        .bind(update.hours_sunday.as_deref())
        .execute(self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::singleton_missing(RESOURCE));
        }
        Ok(())
    }
}
