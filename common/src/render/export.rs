//! The export capability used by the download buttons.
//!
//! Turning a [`CertificateView`] into image or document bytes needs a rasteriser
//! that lives outside this crate. The application only talks to the
//! [`CertificateExporter`] trait; [`UnimplementedExporter`] is what ships until a
//! real one is wired in.

use super::CertificateView;
use crate::error::{ExportError, ExportFormat};

pub trait CertificateExporter {
    /// Produces the bytes of a single certificate.
    fn export(&self, view: &CertificateView, format: ExportFormat) -> Result<Vec<u8>, ExportError>;

    /// Produces one multi-page document with a page per certificate.
    fn export_batch(&self, views: &[CertificateView]) -> Result<Vec<u8>, ExportError>;
}

/// Rejects every request with [`ExportError::NotImplemented`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedExporter;

impl CertificateExporter for UnimplementedExporter {
    fn export(&self, _view: &CertificateView, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::NotImplemented(format))
    }

    fn export_batch(&self, _views: &[CertificateView]) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::NotImplemented(ExportFormat::Pdf))
    }
}
