pub mod batch;
pub mod design;
pub mod record;

pub use batch::BatchList;
pub use design::{BackgroundImage, DesignChoice, DesignInfo, DesignSelector, DesignStyle, Palette};
pub use record::{CertificateRecord, RecordField};
