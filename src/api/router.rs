//! 签到接口路由

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::CorsLayer;

use crate::checkin::CheckinApi;

use super::handlers::{health, run_checkin};
use super::middleware::{AppState, auth_middleware};

/// 创建签到接口路由
///
/// - `GET /api/checkin` 执行签到（配置了 apiKey 时需要认证）
/// - `GET /health` 存活检查
pub fn create_router<A>(state: AppState<A>) -> Router
where
    A: CheckinApi + Send + Sync + 'static,
{
    Router::new()
        .route("/api/checkin", get(run_checkin::<A>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<A>,
        ))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
