//! Business profile singleton (`id = 1`)

use cosmic_core::models::{BusinessInfoUpdate, SocialMedia};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;

const RESOURCE: &str = "Business info";

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct BusinessInfo {
    pub id: i64,
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
    pub updated_at: String,
}

impl BusinessInfo {
    /// Social-link columns as the nested `socialMedia` object.
    pub fn social_media(&self) -> SocialMedia {
        SocialMedia {
            facebook: self.facebook_url.clone(),
            instagram: self.instagram_url.clone(),
            twitter: self.twitter_url.clone(),
            youtube: self.youtube_url.clone(),
            linkedin: self.linkedin_url.clone(),
        }
    }
}

pub struct BusinessInfoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BusinessInfoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<BusinessInfo, DbError> {
        sqlx::query_as::<_, BusinessInfo>(
            r#"
            SELECT id, business_name, email_address, whatsapp_number, business_address,
                   google_maps_url, google_review_url, facebook_url, instagram_url,
                   twitter_url, youtube_url, linkedin_url, hours_weekday, hours_sunday,
                   updated_at
            FROM business_info
            WHERE id = 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::singleton_missing(RESOURCE))
    }

    /// Overwrite every mutable column; omitted fields become NULL.
    pub async fn replace(&self, update: &BusinessInfoUpdate) -> Result<(), DbError> {
        let affected = sqlx::query(
            r#"
            UPDATE business_info SET
                business_name = ?,
                email_address = ?,
                whatsapp_number = ?,
                business_address = ?,
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
        .bind(update.business_name.as_deref())
        .bind(update.email_address.as_deref())
        .bind(update.whatsapp_number.as_deref())
        .bind(update.business_address.as_deref())
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
