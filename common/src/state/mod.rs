//! Top-level application state and the actions that change it.
//!
//! `AppState` is the single source of truth of the page: the base record, the
//! design selector and the optional batch. It is owned by the root component;
//! children receive read-only projections and request changes by sending an
//! [`Action`]. Every action is applied synchronously and either fully succeeds
//! or leaves the state as it was.

pub mod upload;

use crate::error::{CertificateError, ExportFormat};
use crate::model::{
    BackgroundImage, BatchList, CertificateRecord, DesignChoice, DesignSelector, RecordField,
};
use crate::render::export::CertificateExporter;
use crate::render::{self, CertificateView};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Which preview is shown, derived from whether a batch exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Single,
    Batch,
}

/// A requested state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditField(RecordField, String),
    SelectDesign(DesignChoice),
    AttachBackground(BackgroundImage),
    /// Replaces the current batch with freshly extracted names.
    LoadBatch(Vec<String>),
    NextCertificate,
    PreviousCertificate,
    ClearBatch,
}

/// What applying an action did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effect {
    /// The displayed certificate may have changed.
    pub changed: bool,
    /// A background image that is no longer referenced and can be released.
    pub released: Option<BackgroundImage>,
}

impl Effect {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            released: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    record: CertificateRecord,
    design: DesignSelector,
    batch: Option<BatchList>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record as typed in the form.
    pub fn record(&self) -> &CertificateRecord {
        &self.record
    }

    pub fn design(&self) -> &DesignSelector {
        &self.design
    }

    pub fn batch(&self) -> Option<&BatchList> {
        self.batch.as_ref()
    }

    pub fn mode(&self) -> Mode {
        match self.batch {
            Some(_) => Mode::Batch,
            None => Mode::Single,
        }
    }

    /// The record behind the visible certificate: the form record, with the
    /// recipient replaced by the current batch name in batch mode.
    pub fn displayed_record(&self) -> Cow<'_, CertificateRecord> {
        match &self.batch {
            Some(batch) => Cow::Owned(
                self.record
                    .with_field(RecordField::RecipientName, batch.current()),
            ),
            None => Cow::Borrowed(&self.record),
        }
    }

    /// The certificate currently on screen.
    pub fn view(&self) -> CertificateView {
        render::render(&self.displayed_record(), self.design.style())
    }

    /// One view per batch name, or just the current view outside batch mode.
    pub fn batch_views(&self) -> Vec<CertificateView> {
        match &self.batch {
            Some(batch) => batch
                .names()
                .iter()
                .map(|name| {
                    let record = self.record.with_field(RecordField::RecipientName, name.as_str());
                    render::render(&record, self.design.style())
                })
                .collect(),
            None => vec![self.view()],
        }
    }

    pub fn download_enabled(&self) -> bool {
        render::download_enabled(&self.displayed_record())
    }

    pub fn apply(&mut self, action: Action) -> Result<Effect, CertificateError> {
        match action {
            Action::EditField(field, value) => {
                if self.record.get(field) == value {
                    return Ok(Effect::changed(false));
                }
                self.record = self.record.with_field(field, value);
                Ok(Effect::changed(true))
            }
            Action::SelectDesign(choice) => {
                let changed = self.design.choice() != choice;
                self.design.select(choice);
                Ok(Effect::changed(changed))
            }
            Action::AttachBackground(image) => {
                let released = self.design.attach_background(image)?;
                Ok(Effect {
                    changed: true,
                    released,
                })
            }
            Action::LoadBatch(names) => {
                let batch = BatchList::new(names).ok_or(CertificateError::NoNamesFound)?;
                self.batch = Some(batch);
                Ok(Effect::changed(true))
            }
            Action::NextCertificate => Ok(Effect::changed(
                self.batch.as_mut().is_some_and(BatchList::advance),
            )),
            Action::PreviousCertificate => Ok(Effect::changed(
                self.batch.as_mut().is_some_and(BatchList::retreat),
            )),
            Action::ClearBatch => Ok(Effect::changed(self.batch.take().is_some())),
        }
    }

    /// Exports the visible certificate as an image.
    ///
    /// Rejected with [`CertificateError::MissingRequiredField`] while the
    /// download button is disabled.
    pub fn request_download(
        &self,
        exporter: &dyn CertificateExporter,
    ) -> Result<Vec<u8>, CertificateError> {
        if let Some(field) = self.displayed_record().missing_required() {
            return Err(CertificateError::MissingRequiredField(field));
        }
        Ok(exporter.export(&self.view(), ExportFormat::Png)?)
    }

    /// Exports every batch certificate as one multi-page document.
    pub fn request_batch_download(
        &self,
        exporter: &dyn CertificateExporter,
    ) -> Result<Vec<u8>, CertificateError> {
        if let Some(field) = self.displayed_record().missing_required() {
            return Err(CertificateError::MissingRequiredField(field));
        }
        Ok(exporter.export_batch(&self.batch_views())?)
    }
}
