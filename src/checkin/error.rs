//! 签到流程错误类型定义

use std::fmt;

use super::game::GameId;

/// 平台拒绝请求时的上下文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// HTTP 状态码
    pub status: u16,
    /// 平台 retcode（响应体无法解析时为 None）
    pub retcode: Option<i64>,
    /// 平台返回的 message 或原始响应体
    pub message: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.retcode {
            Some(retcode) => write!(
                f,
                "HTTP {} retcode {}: {}",
                self.status, retcode, self.message
            ),
            None => write!(f, "HTTP {}: {}", self.status, self.message),
        }
    }
}

/// 签到流程错误
///
/// 每个远程调用步骤在本地捕获网络和解析错误，统一转换为这里的某一种
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinError {
    /// Cookie 中没有 `ltuid_v2`
    MalformedCredential,

    /// 账号卡片接口拒绝请求
    LoginFailed { game: GameId, rejection: Rejection },

    /// 平台账号存在，但没有绑定目标游戏的角色
    AccountNotFound { game: GameId, ltuid: String },

    /// 签到状态查询失败
    StatusFetchFailed { game: GameId, rejection: Rejection },

    /// 奖励列表查询失败
    CatalogFetchFailed { game: GameId, rejection: Rejection },

    /// 提交签到失败
    SignSubmissionFailed { game: GameId, rejection: Rejection },

    /// 网络错误或响应解析失败
    Transport {
        game: GameId,
        step: &'static str,
        message: String,
    },
}

impl fmt::Display for CheckinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckinError::MalformedCredential => write!(f, "Cookie 中未找到 ltuid_v2"),
            CheckinError::LoginFailed { game, rejection } => {
                write!(f, "{} 账号登录失败: {}", game, rejection)
            }
            CheckinError::AccountNotFound { game, ltuid } => {
                write!(f, "ltuid {} 下没有 {} 账号", ltuid, game)
            }
            CheckinError::StatusFetchFailed { game, rejection } => {
                write!(f, "{} 获取签到状态失败: {}", game, rejection)
            }
            CheckinError::CatalogFetchFailed { game, rejection } => {
                write!(f, "{} 获取奖励列表失败: {}", game, rejection)
            }
            CheckinError::SignSubmissionFailed { game, rejection } => {
                write!(f, "{} 签到失败: {}", game, rejection)
            }
            CheckinError::Transport {
                game,
                step,
                message,
            } => write!(f, "{} {} 请求异常: {}", game, step, message),
        }
    }
}

impl std::error::Error for CheckinError {}

impl CheckinError {
    /// 平台返回的数字错误码（如果有）
    pub fn code(&self) -> Option<i64> {
        self.rejection().and_then(|r| r.retcode)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            CheckinError::LoginFailed { rejection, .. }
            | CheckinError::StatusFetchFailed { rejection, .. }
            | CheckinError::CatalogFetchFailed { rejection, .. }
            | CheckinError::SignSubmissionFailed { rejection, .. } => Some(rejection),
            _ => None,
        }
    }
}
