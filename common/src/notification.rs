//! User-facing notification texts.

use crate::error::{CertificateError, ExportError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Info,
    Destructive,
}

/// A transient message shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    /// Confirmation after a spreadsheet yielded `count` names.
    pub fn names_extracted(count: usize) -> Self {
        Self::info(
            "Success",
            format!("Extracted {count} names from the Excel file."),
        )
    }
}

impl From<&CertificateError> for Notification {
    fn from(error: &CertificateError) -> Self {
        match error {
            CertificateError::UnsupportedFormat => Notification::destructive(
                "Invalid File Type",
                "Please select an Excel file (.xlsx or .xls)",
            ),
            CertificateError::ReadError(_) => Notification::destructive(
                "Error Processing File",
                "There was an error reading the Excel file. Please check the file format.",
            ),
            CertificateError::NoNamesFound => Notification::destructive(
                "No Names Found",
                "No valid names were found in the first column of the Excel file.",
            ),
            CertificateError::MissingRequiredField(_) => Notification::destructive(
                "Missing Information",
                "Fill in the recipient name and course to enable download",
            ),
            CertificateError::UnsupportedImage(_) => Notification::destructive(
                "Invalid Image",
                "Please select an image file for the custom background",
            ),
            CertificateError::Export(ExportError::NotImplemented(format)) => Notification::info(
                "Download Feature",
                format!("Certificate download as {format} is not yet implemented."),
            ),
            CertificateError::Export(ExportError::Failed(_)) => Notification::destructive(
                "Download Failed",
                "There was an error downloading the certificate.",
            ),
        }
    }
}

impl From<CertificateError> for Notification {
    fn from(error: CertificateError) -> Self {
        Notification::from(&error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportFormat;

    #[test]
    fn extraction_failures_are_destructive() {
        for error in [
            CertificateError::UnsupportedFormat,
            CertificateError::ReadError("zip".into()),
            CertificateError::NoNamesFound,
        ] {
            assert_eq!(Notification::from(&error).variant, Variant::Destructive);
        }
    }

    #[test]
    fn unimplemented_export_is_informational() {
        let note = Notification::from(CertificateError::from(ExportError::NotImplemented(
            ExportFormat::Png,
        )));
        assert_eq!(note.title, "Download Feature");
        assert_eq!(note.variant, Variant::Info);
        assert!(note.description.contains("PNG"));
    }

    #[test]
    fn success_message_counts_names() {
        assert_eq!(
            Notification::names_extracted(3).description,
            "Extracted 3 names from the Excel file."
        );
    }
}
