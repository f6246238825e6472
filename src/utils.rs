use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Builds a response carrying a human readable message.
///
/// The content type is `application/json` regardless of the plain-text body.
pub fn text_response(status_code: StatusCode, message: String) -> Response {
    (
        status_code,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        message,
    )
        .into_response()
}
