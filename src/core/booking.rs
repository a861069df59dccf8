//! Booking form draft and its validation
//!
//! The form lives in a modal and is discarded on submit or cancel. Submitting
//! is a local stub: a valid draft produces an acknowledgement with a
//! generated reference and nothing leaves the browser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Largest party size accepted online
pub const MAX_SEATS: u32 = 10;

/// Accepted digit count for phone numbers
pub const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

/// Date format produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field of the booking form, used to route errors next to inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    Date,
    Seats,
    Message,
}

impl BookingField {
    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Name => "Name",
            BookingField::Email => "Email",
            BookingField::Phone => "Phone",
            BookingField::Date => "Date",
            BookingField::Seats => "Seats",
            BookingField::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            BookingField::Name | BookingField::Email | BookingField::Phone | BookingField::Date
        )
    }
}

/// Reason a draft cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("{} is required", .0.label())]
    Required(BookingField),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Phone number must have 7 to 15 digits")]
    InvalidPhone,
    #[error("Date must look like YYYY-MM-DD")]
    InvalidDate,
    #[error("Seats must be between 1 and {max}")]
    SeatsOutOfRange { max: u32 },
}

impl BookingError {
    pub fn field(&self) -> BookingField {
        match self {
            BookingError::Required(field) => *field,
            BookingError::InvalidEmail => BookingField::Email,
            BookingError::InvalidPhone => BookingField::Phone,
            BookingError::InvalidDate => BookingField::Date,
            BookingError::SeatsOutOfRange { .. } => BookingField::Seats,
        }
    }
}

/// In-memory draft of the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub seats: u32,
    pub message: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: String::new(),
            seats: 1,
            message: String::new(),
        }
    }
}

/// A draft that passed validation, with normalized values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub seats: u32,
    pub message: Option<String>,
}

/// Local confirmation shown after a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingAcknowledgement {
    pub reference: Uuid,
    pub booking: ValidBooking,
}

impl BookingAcknowledgement {
    /// Short human-friendly reference, e.g. `LR-1A2B3C4D`
    pub fn short_reference(&self) -> String {
        let simple = self.reference.simple().to_string();
        format!("LR-{}", simple[..8].to_uppercase())
    }

    pub fn summary(&self) -> String {
        let seats = self.booking.seats;
        format!(
            "{} seat{} for {} on {}",
            seats,
            if seats == 1 { "" } else { "s" },
            self.booking.name,
            self.booking.date.format("%b %-d, %Y")
        )
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.split('.');
    let has_dot = domain.contains('.');
    has_dot && labels.all(|label| !label.is_empty())
}

fn phone_digit_count(phone: &str) -> Option<usize> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.');
    if !phone.chars().all(allowed) {
        return None;
    }
    Some(phone.chars().filter(|c| c.is_ascii_digit()).count())
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field and collect all problems
    pub fn validate(&self) -> Result<ValidBooking, Vec<BookingError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let date = self.date.trim();

        if name.is_empty() {
            errors.push(BookingError::Required(BookingField::Name));
        }

        if email.is_empty() {
            errors.push(BookingError::Required(BookingField::Email));
        } else if !is_valid_email(email) {
            errors.push(BookingError::InvalidEmail);
        }

        if phone.is_empty() {
            errors.push(BookingError::Required(BookingField::Phone));
        } else if !phone_digit_count(phone).is_some_and(|n| PHONE_DIGITS.contains(&n)) {
            errors.push(BookingError::InvalidPhone);
        }

        let parsed_date = if date.is_empty() {
            errors.push(BookingError::Required(BookingField::Date));
            None
        } else {
            match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(BookingError::InvalidDate);
                    None
                }
            }
        };

        if !(1..=MAX_SEATS).contains(&self.seats) {
            errors.push(BookingError::SeatsOutOfRange { max: MAX_SEATS });
        }

        match parsed_date {
            Some(date) if errors.is_empty() => {
                let message = self.message.trim();
                Ok(ValidBooking {
                    name: name.to_string(),
                    email: email.to_lowercase(),
                    phone: phone.to_string(),
                    date,
                    seats: self.seats,
                    message: (!message.is_empty()).then(|| message.to_string()),
                })
            }
            _ => Err(errors),
        }
    }

    /// Errors for one field, for inline display
    pub fn field_error(&self, field: BookingField) -> Option<BookingError> {
        self.validate()
            .err()?
            .into_iter()
            .find(|e| e.field() == field)
    }
}

/// Submit a draft. The booking service is not wired up yet, so a valid
/// draft is acknowledged locally.
pub fn submit(draft: &BookingDraft) -> Result<BookingAcknowledgement, Vec<BookingError>> {
    let booking = draft.validate()?;
    Ok(BookingAcknowledgement {
        reference: Uuid::new_v4(),
        booking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            name: "Sam Stone".to_string(),
            email: "Sam@Example.com".to_string(),
            phone: "+1 (555) 010-2030".to_string(),
            date: "2026-11-14".to_string(),
            seats: 2,
            message: "  Front row please ".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_normalizes() {
        let booking = valid_draft().validate().unwrap();
        assert_eq!(booking.name, "Sam Stone");
        assert_eq!(booking.email, "sam@example.com");
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2026, 11, 14).unwrap());
        assert_eq!(booking.message.as_deref(), Some("Front row please"));
    }

    #[test]
    fn test_empty_draft_reports_all_required_fields() {
        let errors = BookingDraft::new().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                BookingError::Required(BookingField::Name),
                BookingError::Required(BookingField::Email),
                BookingError::Required(BookingField::Phone),
                BookingError::Required(BookingField::Date),
            ]
        );
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let draft = BookingDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            vec![BookingError::Required(BookingField::Name)]
        );
    }

    #[test]
    fn test_message_is_optional() {
        let draft = BookingDraft {
            message: String::new(),
            ..valid_draft()
        };
        assert_eq!(draft.validate().unwrap().message, None);
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["sam", "@example.com", "sam@", "sam@example", "sam@ex..com", "s am@x.com", "a@b@c.com"] {
            let draft = BookingDraft {
                email: email.to_string(),
                ..valid_draft()
            };
            assert_eq!(
                draft.validate().unwrap_err(),
                vec![BookingError::InvalidEmail],
                "email {email:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_phones() {
        for phone in ["12345", "call me", "1234567890123456"] {
            let draft = BookingDraft {
                phone: phone.to_string(),
                ..valid_draft()
            };
            assert_eq!(
                draft.validate().unwrap_err(),
                vec![BookingError::InvalidPhone],
                "phone {phone:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_date() {
        let draft = BookingDraft {
            date: "14/11/2026".to_string(),
            ..valid_draft()
        };
        assert_eq!(draft.validate().unwrap_err(), vec![BookingError::InvalidDate]);
    }

    #[test]
    fn test_seat_bounds() {
        let zero = BookingDraft {
            seats: 0,
            ..valid_draft()
        };
        assert_eq!(
            zero.validate().unwrap_err(),
            vec![BookingError::SeatsOutOfRange { max: MAX_SEATS }]
        );

        let max = BookingDraft {
            seats: MAX_SEATS,
            ..valid_draft()
        };
        assert!(max.validate().is_ok());

        let over = BookingDraft {
            seats: MAX_SEATS + 1,
            ..valid_draft()
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_field_error_lookup() {
        let draft = BookingDraft {
            email: "nope".to_string(),
            ..BookingDraft::new()
        };
        assert_eq!(
            draft.field_error(BookingField::Email),
            Some(BookingError::InvalidEmail)
        );
        assert_eq!(
            draft.field_error(BookingField::Name),
            Some(BookingError::Required(BookingField::Name))
        );
        assert_eq!(draft.field_error(BookingField::Message), None);
        assert_eq!(valid_draft().field_error(BookingField::Email), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BookingError::Required(BookingField::Phone).to_string(),
            "Phone is required"
        );
        assert_eq!(
            BookingError::SeatsOutOfRange { max: 10 }.to_string(),
            "Seats must be between 1 and 10"
        );
    }

    #[test]
    fn test_required_fields() {
        assert!(BookingField::Name.is_required());
        assert!(BookingField::Date.is_required());
        assert!(!BookingField::Seats.is_required());
        assert!(!BookingField::Message.is_required());
    }

    #[test]
    fn test_submit_acknowledges_valid_draft() {
        let ack = submit(&valid_draft()).unwrap();
        assert_eq!(ack.booking.seats, 2);
        assert!(ack.short_reference().starts_with("LR-"));
        assert_eq!(ack.short_reference().len(), 11);
        assert_eq!(ack.summary(), "2 seats for Sam Stone on Nov 14, 2026");
    }

    #[test]
    fn test_submit_rejects_empty_required_fields() {
        let draft = BookingDraft {
            phone: String::new(),
            ..valid_draft()
        };
        assert!(submit(&draft).is_err());
    }

    #[test]
    fn test_submit_references_are_unique() {
        let a = submit(&valid_draft()).unwrap();
        let b = submit(&valid_draft()).unwrap();
        assert_ne!(a.reference, b.reference);
    }

    #[test]
    fn test_acknowledgement_serializes_iso_date() {
        let ack = submit(&valid_draft()).unwrap();
        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json["booking"]["date"], "2026-11-14");
        assert_eq!(json["booking"]["seats"], 2);
        assert_eq!(json["reference"], ack.reference.to_string());

        let back: BookingAcknowledgement = serde_json::from_value(json).unwrap();
        assert_eq!(back, ack);
    }
}
