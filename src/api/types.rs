//! 签到触发接口的响应类型

use chrono::Utc;
use serde::Serialize;

use crate::checkin::CheckinError;
use crate::checkin::model::outcome::CheckinOutcome;

/// 签到成功的响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinReport {
    pub success: bool,
    pub results: Vec<CheckinOutcome>,
    /// 完成时间（RFC3339 格式）
    pub checked_at: String,
}

impl CheckinReport {
    pub fn new(results: Vec<CheckinOutcome>) -> Self {
        Self {
            success: true,
            results,
            checked_at: Utc::now().to_rfc3339(),
        }
    }
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    /// 平台 retcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: Option<i64>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                message: message.into(),
                code,
            },
        }
    }

    pub fn unauthorized() -> Self {
        Self::new("API Key 无效或缺失", None)
    }
}

impl From<&CheckinError> for ErrorResponse {
    fn from(err: &CheckinError) -> Self {
        Self::new(err.to_string(), err.code())
    }
}
