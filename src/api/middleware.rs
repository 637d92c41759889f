//! 签到接口状态与认证中间件

use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;

use crate::checkin::{CheckinApi, CheckinService};

use super::types::ErrorResponse;

/// 签到接口共享状态
pub struct AppState<A> {
    /// 访问密钥，None 表示不校验
    pub api_key: Option<String>,
    pub service: Arc<CheckinService<A>>,
    /// 保证同一时间只有一次签到在执行
    pub run_lock: Arc<Mutex<()>>,
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            service: self.service.clone(),
            run_lock: self.run_lock.clone(),
        }
    }
}

impl<A: CheckinApi> AppState<A> {
    /// 空白的 api_key 视为未配置
    pub fn new(api_key: Option<String>, service: CheckinService<A>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            service: Arc::new(service),
            run_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// 从请求头提取 API Key（`x-api-key` 或 `Authorization: Bearer`）
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    let headers = request.headers();
    if let Some(key) = headers.get("x-api-key").and_then(|v| v.to_str().ok()) {
        return Some(key);
    }
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// 常量时间比较 API Key
fn key_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// API Key 认证中间件
pub async fn auth_middleware<A: Send + Sync + 'static>(
    State(state): State<AppState<A>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = state.api_key.as_deref() else {
        return next.run(request).await;
    };

    let authorized = extract_api_key(&request).is_some_and(|key| key_matches(key, expected));
    if authorized {
        next.run(request).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized()),
        )
            .into_response()
    }
}
