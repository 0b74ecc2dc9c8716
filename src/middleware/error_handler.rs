use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    web, Error, HttpRequest, HttpResponse,
};

/// Build the error body shared with `AppError` responses
pub fn error_response(status_code: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({
        "error": {
            "message": message.into(),
            "code": status_code.as_u16(),
        }
    }))
}

/// Map malformed or mistyped JSON bodies to a 400 in the application error shape
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let status_code = match &err {
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };

    tracing::warn!(path = req.path(), error = %err, "Rejected request body");

    let response = error_response(status_code, format!("Invalid request body: {}", err));
    InternalError::from_response(err, response).into()
}

/// JSON extractor configuration used by every API route
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(json_error_handler)
}
