//! 签到流程的领域数据与结果

use serde::{Deserialize, Serialize};

use crate::checkin::game::GameId;
use crate::checkin::model::api::Award;
use crate::checkin::region::Region;

/// 展示用的游戏素材信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub author: String,
    pub game: String,
    pub icon: String,
}

/// 目标游戏中的账号信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    /// 游戏内角色 UID
    pub uid: String,
    pub nickname: String,
    pub level: u32,
    pub region: Region,
}

/// 当前签到状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignStatus {
    /// 本期已签到天数
    pub total_sign_day: u32,
    pub today: String,
    pub is_signed: bool,
}

/// 签到奖励
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reward {
    pub name: String,
    pub count: u32,
    pub icon: String,
}

impl Reward {
    /// 奖励列表中找不到对应条目时的占位
    pub fn none() -> Self {
        Self {
            name: "no reward".to_string(),
            count: 0,
            icon: String::new(),
        }
    }
}

impl From<Award> for Reward {
    fn from(award: Award) -> Self {
        Self {
            name: award.name,
            count: award.cnt,
            icon: award.icon,
        }
    }
}

/// 结果中附带的账号信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeAccount {
    pub uid: String,
    pub nickname: String,
    pub rank: u32,
    pub region: Region,
    /// 原始 Cookie，展示层用它区分同一游戏下的多个账号
    pub cookie: String,
}

/// 单个账号的签到结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckinOutcome {
    #[serde(rename = "platform")]
    pub game: GameId,
    /// 本次运行之后的累计签到天数
    pub total: u32,
    #[serde(rename = "result")]
    pub message: String,
    pub assets: AssetMetadata,
    pub account: OutcomeAccount,
    #[serde(rename = "award")]
    pub reward: Reward,
}
