//! Static asset serving for the campaign page.
//!
//! Assets come from the embedded `assets/` directory; only the stylesheet
//! is linked by the page today.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::assets::Assets;

/// GET /static/{file} - Serves one embedded asset.
pub async fn serve_static(Path(file): Path<String>) -> Response {
    serve_file(&file)
}

/// Serves a specific file from embedded assets.
fn serve_file(path: &str) -> Response {
    match Assets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}
