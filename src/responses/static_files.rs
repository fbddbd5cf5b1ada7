// responses/static_files.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::path::{Component, Path, PathBuf};

/// Serve `rel` from under `root`. Anything that would escape `root` is a 404.
pub fn static_file_response(root: &Path, rel: &str) -> ResultResp {
    let path = resolve(root, rel).ok_or(ServerError::NotFound)?;
    let bytes = std::fs::read(&path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "static file not served");
        ServerError::NotFound
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime_for(&path).as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

fn resolve(root: &Path, rel: &str) -> Option<PathBuf> {
    let rel = Path::new(rel.trim_start_matches('/'));
    if rel.as_os_str().is_empty() {
        return None;
    }
    if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(root.join(rel))
}

pub fn mime_for(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("css") => mime::TEXT_CSS_UTF_8,
        Some("js") => mime::APPLICATION_JAVASCRIPT_UTF_8,
        Some("html") => mime::TEXT_HTML_UTF_8,
        Some("json") => mime::APPLICATION_JSON,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("ico") => "image/x-icon".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        Some("woff2") => mime::FONT_WOFF2,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
