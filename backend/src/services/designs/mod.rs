//! # Design Catalog Service
//!
//! Exposes the fixed list of certificate designs so clients other than the
//! bundled frontend can offer the same choices. The browser app never calls
//! it; it reads the catalog from `common` directly.

use actix_web::web::{get, scope};
use actix_web::{HttpResponse, Responder, Scope};
use common::model::design::catalog;

/// The base path for the design catalog.
const API_PATH: &str = "/api/designs";

/// Configures and returns the Actix `Scope` for the design catalog.
///
/// # Registered Routes:
///
/// *   **`GET /api/designs`**:
///     - **Handler**: `process`
///     - **Description**: Returns every design (id, display name, description
///       and palette) as a JSON array, in picker order. The `custom` design has
///       a `null` palette.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process() -> impl Responder {
    HttpResponse::Ok().json(catalog())
}
