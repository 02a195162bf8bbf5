use crate::config::ServerConfig;
use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::error::CertificateError;
use common::extract::{accepts, extract_names, FileMeta};
use common::requests::{ErrorResponse, ExtractNamesResponse};
use futures_util::StreamExt;
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
enum UploadError {
    #[error("multipart error: {0}")]
    Multipart(String),
    #[error("missing `file` field")]
    MissingFile,
    #[error("upload exceeds {0} bytes")]
    TooLarge(usize),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
}

impl UploadError {
    fn status(&self) -> StatusCode {
        match self {
            UploadError::Multipart(_) | UploadError::MissingFile => StatusCode::BAD_REQUEST,
            UploadError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Certificate(CertificateError::UnsupportedFormat) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            UploadError::Certificate(CertificateError::NoNamesFound) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            UploadError::Certificate(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// HTTP handler wrapper that converts the extraction result into an `HttpResponse`.
///
/// - On success: `200 OK` with an `ExtractNamesResponse`.
/// - On failure: the status from `UploadError::status` with an `ErrorResponse`.
pub async fn process(payload: Multipart, config: web::Data<ServerConfig>) -> HttpResponse {
    match extract_from_upload(payload, config.max_upload_bytes).await {
        Ok(names) => HttpResponse::Ok().json(ExtractNamesResponse { names }),
        Err(e) => {
            warn!("name extraction rejected: {}", e);
            HttpResponse::build(e.status()).json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

async fn extract_from_upload(payload: Multipart, limit: usize) -> Result<Vec<String>, UploadError> {
    let (meta, bytes) = read_file_field(payload, limit).await?;
    let names = extract_names(&meta, &bytes)?;
    info!("extracted {} names from {}", names.len(), meta.file_name);
    Ok(names)
}

/// Reads the `file` part of the upload into memory.
///
/// The declared type is checked before any bytes are buffered, and the read
/// stops as soon as `limit` is exceeded.
async fn read_file_field(
    mut payload: Multipart,
    limit: usize,
) -> Result<(FileMeta, Vec<u8>), UploadError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadError::Multipart(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some("file") {
            // Drain parts we do not care about.
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| UploadError::Multipart(e.to_string()))?;
            }
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        let mime = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        let meta = FileMeta::new(file_name, mime);

        if !accepts(&meta) {
            return Err(CertificateError::UnsupportedFormat.into());
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| UploadError::Multipart(e.to_string()))?;
            if bytes.len() + chunk.len() > limit {
                return Err(UploadError::TooLarge(limit));
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok((meta, bytes));
    }

    Err(UploadError::MissingFile)
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use crate::config::ServerConfig;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, web, App};
    use common::extract::XLSX_MIME;
    use common::requests::{ErrorResponse, ExtractNamesResponse};
    use rust_xlsxwriter::Workbook;

    const BOUNDARY: &str = "certgen-test-boundary";

    fn multipart_body(file_name: &str, mime: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/names/extract")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    fn workbook(names: &[&str]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (row, name) in names.iter().enumerate() {
            sheet.write_string(row as u32, 0, *name).unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    macro_rules! app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn returns_names_from_the_first_column() {
        let app = app!(ServerConfig::default());
        let body = multipart_body("people.xlsx", XLSX_MIME, &workbook(&["Alice", " Bob "]));

        let resp = test::call_service(&app, request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let parsed: ExtractNamesResponse = test::read_body_json(resp).await;
        assert_eq!(parsed.names, vec!["Alice", "Bob"]);
    }

    #[actix_web::test]
    async fn rejects_non_spreadsheets() {
        let app = app!(ServerConfig::default());
        let body = multipart_body("people.csv", "text/csv", b"Alice\n");

        let resp = test::call_service(&app, request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[actix_web::test]
    async fn empty_first_column_is_unprocessable() {
        let app = app!(ServerConfig::default());
        let body = multipart_body("people.xlsx", XLSX_MIME, &workbook(&["   "]));

        let resp = test::call_service(&app, request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let parsed: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(parsed.error, "no names found in the first column");
    }

    #[actix_web::test]
    async fn corrupt_workbook_is_a_bad_request() {
        let app = app!(ServerConfig::default());
        let body = multipart_body("people.xlsx", XLSX_MIME, b"not a zip archive");

        let resp = test::call_service(&app, request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn oversized_uploads_are_refused() {
        let app = app!(ServerConfig {
            max_upload_bytes: 16,
            ..ServerConfig::default()
        });
        let body = multipart_body("people.xlsx", XLSX_MIME, &workbook(&["Alice"]));

        let resp = test::call_service(&app, request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
