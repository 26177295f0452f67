//! Consultation bookings

use cosmic_core::models::{BookingStatus, NewBooking};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::{DbError, ADMIN_LIST_CAP};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub service: String,
    pub booking_date: String,
    pub booking_time: String,
    pub status: String,
    pub notes: Option<String>,
    pub source: String,
    pub created_at: String,
}

pub struct BookingRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookingRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a normalized booking; status starts at the column default.
    pub async fn create(&self, booking: &NewBooking) -> Result<i64, DbError> {
        let id = sqlx::query(
            r#"
            INSERT INTO bookings
                (name, phone, email, dob, service, booking_date, booking_time, notes, source)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&booking.name)
        .bind(&booking.phone)
        .bind(&booking.email)
        .bind(&booking.dob)
        .bind(&booking.service)
        .bind(&booking.booking_date)
        .bind(&booking.booking_time)
        .bind(&booking.notes)
        .bind(&booking.source)
        .execute(self.pool)
        .await?
        .last_insert_rowid();

        tracing::debug!(id, service = %booking.service, "booking created");
        Ok(id)
    }

    /// Most recent bookings first, at most [`ADMIN_LIST_CAP`] rows.
    pub async fn list_recent(&self) -> Result<Vec<Booking>, DbError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, name, phone, email, dob, service, booking_date, booking_time,
                   status, notes, source, created_at
            FROM bookings
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(ADMIN_LIST_CAP)
        .fetch_all(self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn set_status(&self, id: i64, status: BookingStatus) -> Result<(), DbError> {
        let affected = sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::not_found("booking", id));
        }
        Ok(())
    }
}
