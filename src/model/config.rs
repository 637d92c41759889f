//! 配置文件

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::checkin::client::DEFAULT_ACCOUNT_CARD_URL;
use crate::checkin::game::{Endpoints, GameId};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// 签到触发接口的访问密钥，未配置时不校验
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub proxy_url: Option<String>,

    #[serde(default)]
    pub proxy_username: Option<String>,

    #[serde(default)]
    pub proxy_password: Option<String>,

    /// 请求超时（秒），未配置时不超时
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_account_card_url")]
    pub account_card_url: String,

    /// 按游戏覆盖签到接口地址
    #[serde(default)]
    pub endpoints: HashMap<GameId, Endpoints>,

    /// 按游戏配置的 Cookie 列表
    #[serde(default)]
    pub accounts: HashMap<GameId, Vec<String>>,

    /// 奖励名称替换表
    #[serde(default)]
    pub reward_names: HashMap<String, String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8990
}

fn default_account_card_url() -> String {
    DEFAULT_ACCOUNT_CARD_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
            request_timeout_secs: None,
            account_card_url: default_account_card_url(),
            endpoints: HashMap::new(),
            accounts: HashMap::new(),
            reward_names: HashMap::new(),
        }
    }
}

impl Config {
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 从 JSON 文件加载配置，文件不存在时使用默认配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("读取配置文件失败: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))?;
        Ok(config)
    }

    /// 追加环境变量中的 Cookie（GENSHIN_COOKIE 等），并去掉空白条目
    pub fn merge_env_accounts(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for id in GameId::ALL {
            if let Some(cookie) = lookup(id.cookie_env_var()) {
                self.accounts.entry(id).or_default().push(cookie);
            }
        }

        for cookies in self.accounts.values_mut() {
            cookies.retain(|cookie| !cookie.trim().is_empty());
        }
    }
}
