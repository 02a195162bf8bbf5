pub mod batch_navigator;
pub mod certificate_form;
pub mod certificate_preview;
pub mod design_picker;
pub mod spreadsheet_upload;
