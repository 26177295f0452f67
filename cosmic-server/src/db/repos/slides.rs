//! Hero and gallery carousel slides
//!
//! Public reads only ever see active slides, ordered by `display_order`
//! with insertion order breaking ties. Inactive rows stay in storage.

use cosmic_core::models::{NewGallerySlide, NewHeroSlide};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Homepage carousel slide
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct HeroSlide {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image: String,
    pub display_order: i64,
    pub is_active: bool,
    pub created_at: String,
}

/// Gallery carousel slide
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct GallerySlide {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub display_order: i64,
    pub is_active: bool,
    pub created_at: String,
}

pub struct HeroSlideRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> HeroSlideRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Active slides for the public carousel.
    pub async fn list_active(&self) -> Result<Vec<HeroSlide>, DbError> {
        let slides = sqlx::query_as::<_, HeroSlide>(
            r#"
            SELECT id, title, description, image, display_order, is_active, created_at
            FROM hero_slides
            WHERE is_active = 1
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(slides)
    }

    /// Every slide, active or not, for the admin panel.
    pub async fn list_all(&self) -> Result<Vec<HeroSlide>, DbError> {
        let slides = sqlx::query_as::<_, HeroSlide>(
            r#"
            SELECT id, title, description, image, display_order, is_active, created_at
            FROM hero_slides
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(slides)
    }

    pub async fn create(&self, slide: &NewHeroSlide) -> Result<i64, DbError> {
        let id = sqlx::query(
            r#"
            INSERT INTO hero_slides (title, description, image, display_order, is_active)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&slide.title)
        .bind(slide.description.as_deref())
        .bind(&slide.image)
        .bind(slide.display_order)
        .bind(slide.is_active)
        .execute(self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Replace every mutable column of one slide.
    pub async fn update(&self, id: i64, slide: &NewHeroSlide) -> Result<(), DbError> {
        let affected = sqlx::query(
            r#"
            UPDATE hero_slides
            SET title = ?, description = ?, image = ?, display_order = ?, is_active = ?
            WHERE id = ?
            "#,
        )
        .bind(&slide.title)
        .bind(slide.description.as_deref())
        .bind(&slide.image)
        .bind(slide.display_order)
        .bind(slide.is_active)
        .bind(id)
        .execute(self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("hero slide", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let affected = sqlx::query("DELETE FROM hero_slides WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("hero slide", id));
        }
        Ok(())
    }
}

pub struct GallerySlideRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GallerySlideRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_active(&self) -> Result<Vec<GallerySlide>, DbError> {
        let slides = sqlx::query_as::<_, GallerySlide>(
            r#"
            SELECT id, title, image, display_order, is_active, created_at
            FROM gallery_slides
            WHERE is_active = 1
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(slides)
    }

    pub async fn list_all(&self) -> Result<Vec<GallerySlide>, DbError> {
        let slides = sqlx::query_as::<_, GallerySlide>(
            r#"
            SELECT id, title, image, display_order, is_active, created_at
            FROM gallery_slides
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(slides)
    }

    pub async fn create(&self, slide: &NewGallerySlide) -> Result<i64, DbError> {
        let id = sqlx::query(
            r#"
            INSERT INTO gallery_slides (title, image, display_order, is_active)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&slide.title)
        .bind(&slide.image)
        .bind(slide.display_order)
        .bind(slide.is_active)
        .execute(self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn update(&self, id: i64, slide: &NewGallerySlide) -> Result<(), DbError> {
        let affected = sqlx::query(
            r#"
            UPDATE gallery_slides
            SET title = ?, image = ?, display_order = ?, is_active = ?
            WHERE id = ?
            "#,
        )
        .bind(&slide.title)
        .bind(&slide.image)
        .bind(slide.display_order)
        .bind(slide.is_active)
        .bind(id)
        .execute(self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("gallery slide", id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let affected = sqlx::query("DELETE FROM gallery_slides WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("gallery slide", id));
        }
        Ok(())
    }
}
