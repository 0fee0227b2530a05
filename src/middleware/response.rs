use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Success response: the serialized value itself, no envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status_code: StatusCode,
    /// `Location` header for 201 responses
    pub location: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK
    pub fn ok(data: T) -> Self {
        Self {
            data,
            status_code: StatusCode::OK,
            location: None,
        }
    }

    /// 201 Created pointing at the new resource
    pub fn created(data: T, location: impl Into<String>) -> Self {
        Self {
            data,
            status_code: StatusCode::CREATED,
            location: Some(location.into()),
        }
    }
}

impl ApiResponse<()> {
    /// 204 No Content
    pub fn no_content() -> Self {
        Self {
            data: (),
            status_code: StatusCode::NO_CONTENT,
            location: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        if self.status_code == StatusCode::NO_CONTENT {
            return self.status_code.into_response();
        }

        let mut response = (self.status_code, Json(self.data)).into_response();
        if let Some(location) = self.location {
            match location.parse() {
                Ok(value) => {
                    response.headers_mut().insert(header::LOCATION, value);
                }
                Err(_) => tracing::error!("Unrepresentable Location header: {}", location),
            }
        }
        response
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
