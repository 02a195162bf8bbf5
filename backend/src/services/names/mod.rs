//! Server-side recipient name extraction.
//!
//! The browser extracts names locally and never calls this endpoint. It is an
//! extra HTTP entry point that gives scripts and other non-browser clients the
//! same behavior.
//!
//! - `POST /api/names/extract`: multipart/form-data upload with a `file` field
//!   holding an `.xlsx` or `.xls` spreadsheet. Responds with
//!   `{"names": [...]}` taken from column A of the first sheet.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod extract;

const API_PATH: &str = "/api/names";

/// Configures and returns the Actix scope for name extraction routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/extract", post().to(extract::process))
}
