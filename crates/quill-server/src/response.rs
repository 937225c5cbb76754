use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Uniform success envelope: `{status, data, message}`, with `status`
/// mirroring the HTTP status code.
#[derive(Clone, Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 envelope.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            status: 200,
            data,
            message: message.into(),
        }
    }

    /// 201 envelope for newly created resources.
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            status: 201,
            data,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
