//! Shared core of the certificate generator.
//!
//! Everything here is free of browser and server dependencies so the frontend
//! (compiled to wasm) and the backend use the same model, extraction and
//! rendering code.

pub mod error;
pub mod extract;
pub mod model;
pub mod notification;
pub mod render;
pub mod requests;
pub mod state;

pub use error::{CertificateError, ExportError, ExportFormat};
