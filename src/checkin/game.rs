//! 游戏配置注册表
//!
//! 每个游戏对应一份固定的签到活动配置，进程启动时构建，之后只读

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::outcome::AssetMetadata;

/// 支持签到的游戏
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Genshin,
    Honkai,
    StarRail,
    Zenless,
}

impl GameId {
    /// 全部游戏，按签到顺序排列
    pub const ALL: [GameId; 4] = [
        GameId::Genshin,
        GameId::Honkai,
        GameId::StarRail,
        GameId::Zenless,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Genshin => "genshin",
            GameId::Honkai => "honkai",
            GameId::StarRail => "starrail",
            GameId::Zenless => "zenless",
        }
    }

    /// 部署环境中存放该游戏 Cookie 的环境变量名
    pub fn cookie_env_var(&self) -> &'static str {
        match self {
            GameId::Genshin => "GENSHIN_COOKIE",
            GameId::Honkai => "HONKAI_COOKIE",
            GameId::StarRail => "STARRAIL_COOKIE",
            GameId::Zenless => "ZZZ_COOKIE",
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 签到活动的三个接口地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// 签到状态查询
    pub info: String,
    /// 奖励列表查询
    pub home: String,
    /// 提交签到
    pub sign: String,
}

impl Endpoints {
    fn from_base(base: &str) -> Self {
        Self {
            info: format!("{}/info", base),
            home: format!("{}/home", base),
            sign: format!("{}/sign", base),
        }
    }
}

/// 单个游戏的签到配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    pub id: GameId,
    /// 签到活动 ID（act_id）
    pub act_id: String,
    /// 签到成功时的提示
    pub success_message: String,
    /// 今日已签到时的提示
    pub signed_message: String,
    /// 游戏全名
    pub display_name: String,
    /// 平台侧的游戏数字 ID，用于从账号卡片列表中筛选角色
    pub game_id: u32,
    pub assets: AssetMetadata,
    pub endpoints: Endpoints,
    /// `x-rpc-signgame` 请求头的值，崩坏3 为空字符串
    pub sign_game: String,
}

impl GameProfile {
    /// 内置的默认配置
    pub fn builtin(id: GameId) -> Self {
        match id {
            GameId::Genshin => Self {
                id,
                act_id: "e202102251931481".to_string(),
                success_message:
                    "Congratulations, Traveler! You have successfully checked in today~".to_string(),
                signed_message: "이미 보상을 받았어! 여행자~".to_string(),
                display_name: "Genshin Impact".to_string(),
                game_id: 2,
                assets: AssetMetadata {
                    author: "Paimon".to_string(),
                    game: "Genshin Impact".to_string(),
                    icon: "https://fastcdn.hoyoverse.com/static-resource-v2/2024/04/12/b700cce2ac4c68a520b15cafa86a03f0_2812765778371293568.png".to_string(),
                },
                endpoints: Endpoints::from_base("https://sg-hk4e-api.hoyolab.com/event/sol"),
                sign_game: "hk4e".to_string(),
            },
            GameId::Honkai => Self {
                id,
                act_id: "e202110291205111".to_string(),
                success_message: "You have successfully checked in today, Captain~".to_string(),
                signed_message: "You've already checked in today, Captain~".to_string(),
                display_name: "Honkai Impact 3rd".to_string(),
                game_id: 1,
                assets: AssetMetadata {
                    author: "Kiana".to_string(),
                    game: "Honkai Impact 3rd".to_string(),
                    icon: "https://fastcdn.hoyoverse.com/static-resource-v2/2024/02/29/3d96534fd7a35a725f7884e6137346d1_3942255444511793944.png".to_string(),
                },
                endpoints: Endpoints::from_base("https://sg-public-api.hoyolab.com/event/mani"),
                sign_game: String::new(),
            },
            GameId::StarRail => Self {
                id,
                act_id: "e202303301540311".to_string(),
                success_message: "You have successfully checked in today, Trailblazer~".to_string(),
                signed_message: "이미 보상을 받았어! 개척자!".to_string(),
                display_name: "Honkai: Star Rail".to_string(),
                game_id: 6,
                assets: AssetMetadata {
                    author: "PomPom".to_string(),
                    game: "Honkai: Star Rail".to_string(),
                    icon: "https://fastcdn.hoyoverse.com/static-resource-v2/2024/04/12/74330de1ee71ada37bbba7b72775c9d3_1883015313866544428.png".to_string(),
                },
                endpoints: Endpoints::from_base("https://sg-public-api.hoyolab.com/event/luna/os"),
                sign_game: "hkrpg".to_string(),
            },
            GameId::Zenless => Self {
                id,
                act_id: "e202406031448091".to_string(),
                success_message: "Congratulations Proxy! You have successfully checked in today!~"
                    .to_string(),
                signed_message: "보상을 이미 받으셨어요! 로프꾼님!".to_string(),
                display_name: "Zenless Zone Zero".to_string(),
                game_id: 8,
                assets: AssetMetadata {
                    author: "Eous".to_string(),
                    game: "Zenless Zone Zero".to_string(),
                    icon: "https://zenless.hoyoverse.com/favicon.ico".to_string(),
                },
                endpoints: Endpoints::from_base(
                    "https://sg-public-api.hoyolab.com/event/luna/zzz/os",
                ),
                sign_game: "zzz".to_string(),
            },
        }
    }
}

/// 游戏配置注册表
///
/// 启动时由内置配置加上可选的接口地址覆盖构建，运行期间不再修改
#[derive(Debug, Clone)]
pub struct GameRegistry {
    profiles: Vec<GameProfile>,
}

impl GameRegistry {
    /// 使用内置配置，并按需覆盖各游戏的接口地址
    pub fn new(endpoint_overrides: &HashMap<GameId, Endpoints>) -> Self {
        let profiles = GameId::ALL
            .into_iter()
            .map(|id| {
                let mut profile = GameProfile::builtin(id);
                if let Some(endpoints) = endpoint_overrides.get(&id) {
                    profile.endpoints = endpoints.clone();
                }
                profile
            })
            .collect();
        Self { profiles }
    }

    /// 按签到顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &GameProfile> {
        self.profiles.iter()
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new(&HashMap::new())
    }
}
