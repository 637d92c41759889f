//! 每日签到核心模块

pub mod account;
pub mod client;
pub mod credential;
pub mod error;
pub mod game;
pub mod model;
pub mod region;
pub mod service;

pub use client::{CheckinApi, HoyolabClient};
pub use error::CheckinError;
pub use game::GameRegistry;
pub use service::CheckinService;
