//! 签到触发接口错误映射

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::checkin::CheckinError;

use super::types::ErrorResponse;

/// 签到接口错误
#[derive(Debug)]
pub struct ApiError(pub CheckinError);

impl From<CheckinError> for ApiError {
    fn from(err: CheckinError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// 获取对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            CheckinError::MalformedCredential => StatusCode::BAD_REQUEST,
            CheckinError::LoginFailed { .. } => StatusCode::UNAUTHORIZED,
            CheckinError::AccountNotFound { .. } => StatusCode::NOT_FOUND,
            CheckinError::StatusFetchFailed { .. }
            | CheckinError::CatalogFetchFailed { .. }
            | CheckinError::SignSubmissionFailed { .. }
            | CheckinError::Transport { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self.0))).into_response()
    }
}
