//! Error types shared by the frontend and the backend.
//!
//! None of these are fatal. Each is caught where the user action started and
//! turned into a [`Notification`](crate::notification::Notification); the
//! application state is left as it was before the action.

use crate::model::RecordField;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Output format requested from a [`CertificateExporter`](crate::render::export::CertificateExporter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// One raster image per certificate.
    Png,
    /// One page per certificate.
    Pdf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Pdf => "PDF",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// No exporter capable of this format is wired in.
    #[error("{0} export is not implemented")]
    NotImplemented(ExportFormat),

    #[error("export failed: {0}")]
    Failed(String),
}

/// Main error type for certificate generator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertificateError {
    /// The uploaded file is not an `.xlsx` / `.xls` spreadsheet.
    #[error("unsupported spreadsheet format")]
    UnsupportedFormat,

    /// The spreadsheet could not be opened or parsed.
    #[error("could not read spreadsheet: {0}")]
    ReadError(String),

    /// The spreadsheet was readable but its first column held no names.
    #[error("no names found in the first column")]
    NoNamesFound,

    /// A field required for export is empty.
    #[error("missing required field: {0}")]
    MissingRequiredField(RecordField),

    /// A custom background upload that is not an image.
    #[error("not an image: {0}")]
    UnsupportedImage(String),

    #[error(transparent)]
    Export(#[from] ExportError),
}
