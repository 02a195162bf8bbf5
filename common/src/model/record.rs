//! The certificate data record edited through the form.
//!
//! A record is never mutated in place by the application: every field edit goes
//! through [`CertificateRecord::with_field`], which builds a new record from the
//! old one plus the changed field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five free-text fields printed on a certificate.
///
/// `completion_date` holds whatever the date input produced (normally
/// `YYYY-MM-DD`); it is only interpreted when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub recipient_name: String,
    pub course_name: String,
    pub completion_date: String,
    pub issuer_name: String,
    pub issuer_title: String,
}

/// Identifies one field of a [`CertificateRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordField {
    RecipientName,
    CourseName,
    CompletionDate,
    IssuerName,
    IssuerTitle,
}

impl RecordField {
    /// All fields, in form order.
    pub const ALL: [RecordField; 5] = [
        RecordField::RecipientName,
        RecordField::CourseName,
        RecordField::CompletionDate,
        RecordField::IssuerName,
        RecordField::IssuerTitle,
    ];

    /// Stable id used for the form inputs.
    pub fn id(self) -> &'static str {
        match self {
            RecordField::RecipientName => "recipient-name",
            RecordField::CourseName => "course-name",
            RecordField::CompletionDate => "completion-date",
            RecordField::IssuerName => "issuer-name",
            RecordField::IssuerTitle => "issuer-title",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            RecordField::RecipientName => "Recipient Name",
            RecordField::CourseName => "Course/Achievement",
            RecordField::CompletionDate => "Completion Date",
            RecordField::IssuerName => "Issuer Name",
            RecordField::IssuerTitle => "Issuer Title",
        }
    }

    /// Hint shown inside an empty input.
    pub fn hint(self) -> &'static str {
        match self {
            RecordField::RecipientName => "Enter the recipient's full name",
            RecordField::CourseName => "e.g., Advanced React Development",
            RecordField::CompletionDate => "",
            RecordField::IssuerName => "Organization or instructor name",
            RecordField::IssuerTitle => "e.g., Director of Education",
        }
    }

    /// `true` for the field rendered by a date picker.
    pub fn is_date(self) -> bool {
        matches!(self, RecordField::CompletionDate)
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl CertificateRecord {
    /// Returns the current value of `field`.
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::RecipientName => &self.recipient_name,
            RecordField::CourseName => &self.course_name,
            RecordField::CompletionDate => &self.completion_date,
            RecordField::IssuerName => &self.issuer_name,
            RecordField::IssuerTitle => &self.issuer_title,
        }
    }

    /// Builds a new record equal to `self` except for `field`, which is set to `value`.
    pub fn with_field(&self, field: RecordField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            RecordField::RecipientName => next.recipient_name = value,
            RecordField::CourseName => next.course_name = value,
            RecordField::CompletionDate => next.completion_date = value,
            RecordField::IssuerName => next.issuer_name = value,
            RecordField::IssuerTitle => next.issuer_title = value,
        }
        next
    }

    /// The first required field that is still empty, if any.
    ///
    /// Recipient and course are required before a certificate can be exported.
    pub fn missing_required(&self) -> Option<RecordField> {
        [RecordField::RecipientName, RecordField::CourseName]
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_leaves_the_original_untouched() {
        let base = CertificateRecord {
            course_name: "Rust".into(),
            ..Default::default()
        };
        let edited = base.with_field(RecordField::RecipientName, "Ada");

        assert_eq!(base.recipient_name, "");
        assert_eq!(edited.recipient_name, "Ada");
        assert_eq!(edited.course_name, "Rust");
    }

    #[test]
    fn every_field_round_trips_through_get() {
        let mut record = CertificateRecord::default();
        for (i, field) in RecordField::ALL.into_iter().enumerate() {
            record = record.with_field(field, format!("value {i}"));
        }
        for (i, field) in RecordField::ALL.into_iter().enumerate() {
            assert_eq!(record.get(field), format!("value {i}"));
        }
    }

    #[test]
    fn missing_required_reports_recipient_first() {
        let record = CertificateRecord::default();
        assert_eq!(record.missing_required(), Some(RecordField::RecipientName));

        let record = record.with_field(RecordField::RecipientName, "Ada");
        assert_eq!(record.missing_required(), Some(RecordField::CourseName));

        let record = record.with_field(RecordField::CourseName, "Rust");
        assert_eq!(record.missing_required(), None);
    }
}
