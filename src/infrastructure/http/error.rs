//! HTTP Error Handling
//!
//! 错误响应为纯文本本地化消息，客户端错误统一返回 400

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;

/// 对外隐藏内部错误细节
const INTERNAL_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다.";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = 400, error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = 500, error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. }
            | ApplicationError::ValidationError(_)
            | ApplicationError::Section(_) => ApiError::BadRequest(e.to_string()),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

// ============================================================================
// Extractor rejections - 默认 422/415 统一改为 400
// ============================================================================

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicationError::validation(rejection.body_text()).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApplicationError::validation(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApplicationError::validation(rejection.body_text()).into()
    }
}
