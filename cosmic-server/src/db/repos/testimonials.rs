//! Customer reviews and their public selection

use cosmic_core::models::NewTestimonial;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub rating: i64,
    pub review_text: String,
    pub google_account_url: Option<String>,
    pub google_place_id: Option<String>,
    pub is_selected: bool,
    pub display_order: i64,
    pub created_at: String,
}

pub struct TestimonialRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TestimonialRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every testimonial, most recent first. Not capped.
    pub async fn list_all(&self) -> Result<Vec<Testimonial>, DbError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT id, name, rating, review_text, google_account_url, google_place_id,
                   is_selected, display_order, created_at
            FROM testimonials
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(testimonials)
    }

    /// Testimonials picked for the public site, in display order.
    pub async fn list_selected(&self) -> Result<Vec<Testimonial>, DbError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT id, name, rating, review_text, google_account_url, google_place_id,
                   is_selected, display_order, created_at
            FROM testimonials
            WHERE is_selected = 1
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(testimonials)
    }

    pub async fn create(&self, testimonial: &NewTestimonial) -> Result<i64, DbError> {
        let id = sqlx::query(
            r#"
            INSERT INTO testimonials
                (name, rating, review_text, google_account_url, google_place_id,
                 is_selected, display_order)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&testimonial.name)
        .bind(testimonial.rating)
        .bind(&testimonial.review_text)
        .bind(testimonial.google_account_url.as_deref())
        .bind(testimonial.google_place_id.as_deref())
        .bind(testimonial.is_selected)
        .bind(testimonial.display_order)
        .execute(self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Show or hide one testimonial on the public site.
    pub async fn set_selection(
        &self,
        id: i64,
        is_selected: bool,
        display_order: i64,
    ) -> Result<(), DbError> {
        let affected = sqlx::query(
            "UPDATE testimonials SET is_selected = ?, display_order = ? WHERE id = ?",
        )
        .bind(is_selected)
        .bind(display_order)
        .bind(id)
        .execute(self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("testimonial", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::seeded_pool;
    use cosmic_core::models::TestimonialDraft;

    fn testimonial(name: &str, selected: bool, order: i64) -> NewTestimonial {
        TestimonialDraft {
            name: Some(name.into()),
            review_text: Some(format!("{name} was very happy")),
            is_selected: Some(selected),
            display_order: Some(order),
            ..Default::default()
        }
        .normalize()
        .unwrap()
    }

    #[tokio::test]
    async fn list_all_is_newest_first() {
        let pool = seeded_pool().await;
        let repo = TestimonialRepo::new(&pool);
        for name in ["Rahul", "Meera", "Kiran"] {
            repo.create(&testimonial(name, false, 0)).await.unwrap();
        }

        let names: Vec<String> = repo.list_all().await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["Kiran", "Meera", "Rahul"]);
    }

    #[tokio::test]
    async fn selected_only_in_display_order() {
        let pool = seeded_pool().await;
        let repo = TestimonialRepo::new(&pool);
        repo.create(&testimonial("Hidden", false, 0)).await.unwrap();
        repo.create(&testimonial("Second", true, 2)).await.unwrap();
        let first = repo.create(&testimonial("First", true, 1)).await.unwrap();

        let names: Vec<String> = repo
            .list_selected()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["First", "Second"]);

        repo.set_selection(first, false, 1).await.unwrap();
        let selected = repo.list_selected().await.unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Second");
        assert!(selected[0].is_selected);
    }

    #[tokio::test]
    async fn selection_of_missing_row() {
        let pool = seeded_pool().await;
        let err = TestimonialRepo::new(&pool)
            .set_selection(42, true, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: Some(42), .. }));
    }
}
