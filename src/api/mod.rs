//! 签到触发接口
//!
//! 展示层通过 `GET /api/checkin` 触发一次全量签到

mod error;
mod handlers;
mod middleware;
mod router;
pub mod types;

pub use middleware::AppState;
pub use router::create_router;
