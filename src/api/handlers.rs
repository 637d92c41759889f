//! 签到接口处理器

use axum::Json;
use axum::extract::State;

use crate::checkin::CheckinApi;

use super::error::ApiError;
use super::middleware::AppState;
use super::types::CheckinReport;

/// GET /api/checkin
///
/// 执行全部账号签到，并发请求会排队依次执行
pub async fn run_checkin<A>(State(state): State<AppState<A>>) -> Result<Json<CheckinReport>, ApiError>
where
    A: CheckinApi + Send + Sync + 'static,
{
    let _guard = state.run_lock.lock().await;
    let results = state.service.run_all().await?;
    Ok(Json(CheckinReport::new(results)))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
