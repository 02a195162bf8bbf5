//! State of the two upload widgets (spreadsheet and custom background).

use crate::error::CertificateError;
use crate::extract::{accepts, FileMeta};
use serde::{Deserialize, Serialize};

/// Tracks whether a drag is hovering a drop target. Purely visual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropZone {
    dragging: bool,
}

impl DropZone {
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` when the flag changed, so the caller knows to re-render.
    pub fn drag_over(&mut self) -> bool {
        !std::mem::replace(&mut self.dragging, true)
    }

    pub fn drag_leave(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// A drop always ends the drag.
    pub fn drop(&mut self) {
        self.dragging = false;
    }
}

/// The spreadsheet chosen for extraction and whether it is being read.
///
/// While a read is outstanding the extract trigger is disabled, so only one
/// read can be in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetPicker {
    selected: Option<FileMeta>,
    processing: bool,
    pub drop_zone: DropZone,
}

impl SpreadsheetPicker {
    pub fn selected(&self) -> Option<&FileMeta> {
        self.selected.as_ref()
    }

    pub fn processing(&self) -> bool {
        self.processing
    }

    /// Accepts a file chosen through the input or dropped on the zone.
    ///
    /// Non-spreadsheets are rejected and the previous selection is kept.
    pub fn select(&mut self, meta: FileMeta) -> Result<(), CertificateError> {
        self.drop_zone.drop();
        if !accepts(&meta) {
            return Err(CertificateError::UnsupportedFormat);
        }
        self.selected = Some(meta);
        Ok(())
    }

    /// Marks the start of a read. Returns `false` if there is nothing to read
    /// or a read is already running.
    pub fn begin_processing(&mut self) -> bool {
        if self.selected.is_none() || self.processing {
            return false;
        }
        self.processing = true;
        true
    }

    pub fn finish_processing(&mut self) {
        self.processing = false;
    }

    pub fn can_extract(&self) -> bool {
        self.selected.is_some() && !self.processing
    }

    /// Forgets the selected file. Ignored while a read is running.
    pub fn clear(&mut self) {
        if !self.processing {
            self.selected = None;
        }
    }
}
