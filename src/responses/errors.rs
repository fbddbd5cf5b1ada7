use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Convert a ServerError into an HTML error page.
pub fn error_to_response(err: &ServerError) -> Response {
    let status = err.status();
    let message = match err {
        // Internal details stay in the log.
        ServerError::InternalError => "Internal Server Error".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        other => other.to_string(),
    };

    fallback(
        ResponseBuilder::new()
            .status(status)
            .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
            .body(Body::from(error_page(status, &message).into_string())),
    )
}

/// Same error, shaped for `/api` callers: `{"error": "..."}`.
pub fn json_error_response(err: &ServerError) -> Response {
    let body = json!({ "error": err.to_string(), "status": err.status() });

    fallback(
        ResponseBuilder::new()
            .status(err.status())
            .header("Content-Type", mime::APPLICATION_JSON.as_ref())
            .body(Body::from(body.to_string())),
    )
}

fn fallback<E>(built: Result<Response, E>) -> Response {
    built.unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
