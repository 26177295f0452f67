//! Consultation bookings
//!
//! Two surfaces submit bookings: the chat widget (`service`, `notes`) and
//! the plain contact flow (`topic`, `message`). Both land in one draft and
//! normalize to the same `NewBooking`.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::validation::{non_blank, required, ValidationError};

/// Time slot used when the caller does not pick one
pub const DEFAULT_BOOKING_TIME: &str = "10:00:00";

/// Service label used when neither `service` nor `topic` is given
pub const FALLBACK_SERVICE: &str = "General Consultation";

/// Source channel used when the caller does not name one
pub const DEFAULT_SOURCE: &str = "Website";

/// Booking as submitted by a public caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub service: Option<String>,
    pub topic: Option<String>,
    pub booking_date: Option<String>,
    pub booking_time: Option<String>,
    pub notes: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
}

/// Canonical booking ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub dob: String,
    pub service: String,
    pub booking_date: String,
    pub booking_time: String,
    pub notes: String,
    pub source: String,
}

impl BookingDraft {
    /// Normalize against today's local date.
    pub fn normalize(self) -> Result<NewBooking, ValidationError> {
        self.normalize_on(Local::now().date_naive())
    }

    /// Normalize with an explicit "today" for the missing-date default.
    ///
    /// # Rules
    /// - `name` and `phone` are required
    /// - service: `service`, else `topic`, else [`FALLBACK_SERVICE`]
    /// - notes: `notes`, else `message`, else empty
    /// - date defaults to `today`, time to [`DEFAULT_BOOKING_TIME`]
    pub fn normalize_on(self, today: NaiveDate) -> Result<NewBooking, ValidationError> {
        let name = required(self.name, "name")?;
        let phone = required(self.phone, "phone")?;

        let service = non_blank(self.service)
            .or_else(|| non_blank(self.topic))
            .unwrap_or_else(|| FALLBACK_SERVICE.to_owned());

        let notes = non_blank(self.notes)
            .or_else(|| non_blank(self.message))
            .unwrap_or_default();

        let booking_date = non_blank(self.booking_date)
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
        let booking_time =
            non_blank(self.booking_time).unwrap_or_else(|| DEFAULT_BOOKING_TIME.to_owned());

        Ok(NewBooking {
            name,
            phone,
            email: non_blank(self.email).unwrap_or_default(),
            dob: non_blank(self.dob).unwrap_or_default(),
            service,
            booking_date,
            booking_time,
            notes,
            source: non_blank(self.source).unwrap_or_else(|| DEFAULT_SOURCE.to_owned()),
        })
    }
}

/// Booking lifecycle, changed only by the admin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(ValidationError::InvalidVariant {
                field: "status",
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 21).unwrap()
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            name: Some("Priya".into()),
            phone: Some("+91 90000 00000".into()),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_draft_gets_defaults() {
        let booking = draft().normalize_on(today()).unwrap();
        assert_eq!(booking.booking_date, "2024-03-21");
        assert_eq!(booking.booking_time, DEFAULT_BOOKING_TIME);
        assert_eq!(booking.service, FALLBACK_SERVICE);
        assert_eq!(booking.notes, "");
        assert_eq!(booking.email, "");
        assert_eq!(booking.dob, "");
        assert_eq!(booking.source, DEFAULT_SOURCE);
    }

    #[test]
    fn chat_widget_fields() {
        let booking = BookingDraft {
            service: Some("Tarot Reading".into()),
            notes: Some("evening preferred".into()),
            booking_date: Some("2024-04-01".into()),
            booking_time: Some("18:30:00".into()),
            source: Some("Chatbot".into()),
            ..draft()
        }
        .normalize_on(today())
        .unwrap();

        assert_eq!(booking.service, "Tarot Reading");
        assert_eq!(booking.notes, "evening preferred");
        assert_eq!(booking.booking_date, "2024-04-01");
        assert_eq!(booking.booking_time, "18:30:00");
        assert_eq!(booking.source, "Chatbot");
    }

    #[test]
    fn contact_flow_alternate_names() {
        let booking = BookingDraft {
            topic: Some("Career Guidance".into()),
            message: Some("Is 2025 a good year to switch jobs?".into()),
            ..draft()
        }
        .normalize_on(today())
        .unwrap();

        assert_eq!(booking.service, "Career Guidance");
        assert_eq!(booking.notes, "Is 2025 a good year to switch jobs?");
    }

    #[test]
    fn primary_name_wins_over_alternate() {
        let booking = BookingDraft {
            service: Some("Kundali Reading".into()),
            topic: Some("Career Guidance".into()),
            notes: Some("from notes".into()),
            message: Some("from message".into()),
            ..draft()
        }
        .normalize_on(today())
        .unwrap();

        assert_eq!(booking.service, "Kundali Reading");
        assert_eq!(booking.notes, "from notes");
    }

    #[test]
    fn blank_primary_falls_through() {
        let booking = BookingDraft {
            service: Some("  ".into()),
            topic: Some("Vastu Consultation".into()),
            booking_date: Some(String::new()),
            ..draft()
        }
        .normalize_on(today())
        .unwrap();

        assert_eq!(booking.service, "Vastu Consultation");
        assert_eq!(booking.booking_date, "2024-03-21");
    }

    #[test]
    fn name_and_phone_required() {
        let err = BookingDraft {
            name: None,
            ..draft()
        }
        .normalize_on(today())
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "name" });

        let err = BookingDraft {
            phone: Some(" ".into()),
            ..draft()
        }
        .normalize_on(today())
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "phone" });
    }

    #[test]
    fn normalize_uses_current_day() {
        let booking = draft().normalize().unwrap();
        assert_eq!(
            booking.booking_date,
            Local::now().date_naive().format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn status_parsing() {
        assert_eq!("Confirmed".parse::<BookingStatus>().unwrap(), BookingStatus::Confirmed);
        assert_eq!("canceled".parse::<BookingStatus>().unwrap(), BookingStatus::Cancelled);
        assert!(matches!(
            "maybe".parse::<BookingStatus>(),
            Err(ValidationError::InvalidVariant { field: "status", .. })
        ));
        assert_eq!(BookingStatus::default().as_str(), "pending");
    }
}
