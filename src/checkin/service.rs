//! 签到业务逻辑
//!
//! 单账号签到流程：解析 Cookie → 查询账号 → 查询签到状态 → 查询奖励列表 → 按需签到。
//! 批量签到按游戏顺序逐个账号串行执行，任一账号失败立即中止整次运行。

use std::collections::HashMap;

use super::account;
use super::client::CheckinApi;
use super::credential;
use super::error::CheckinError;
use super::game::{GameId, GameProfile, GameRegistry};
use super::model::outcome::{CheckinOutcome, OutcomeAccount, Reward};

/// 根据已签到天数计算奖励列表下标
///
/// 今日已签到时返回的是今天已领取的奖励
pub fn reward_index(total_sign_day: u32) -> usize {
    total_sign_day.saturating_sub(1) as usize
}

/// 签到服务
pub struct CheckinService<A> {
    api: A,
    registry: GameRegistry,
    /// 每个游戏的 Cookie 列表
    accounts: HashMap<GameId, Vec<String>>,
    /// 奖励名称替换表（平台名称 → 展示名称）
    reward_names: HashMap<String, String>,
}

impl<A: CheckinApi> CheckinService<A> {
    pub fn new(
        api: A,
        registry: GameRegistry,
        accounts: HashMap<GameId, Vec<String>>,
        reward_names: HashMap<String, String>,
    ) -> Self {
        Self {
            api,
            registry,
            accounts,
            reward_names,
        }
    }

    /// 已配置的账号总数
    pub fn account_count(&self) -> usize {
        self.accounts.values().map(Vec::len).sum()
    }

    /// 执行所有已配置账号的签到
    ///
    /// 遇到第一个错误即返回该错误，此前其他游戏的成功结果一并丢弃
    pub async fn run_all(&self) -> Result<Vec<CheckinOutcome>, CheckinError> {
        let mut outcomes = Vec::new();

        for profile in self.registry.iter() {
            let cookies = self
                .accounts
                .get(&profile.id)
                .map(Vec::as_slice)
                .unwrap_or_default();

            if cookies.is_empty() {
                tracing::warn!("未配置 {} 账号，跳过", profile.display_name);
                continue;
            }

            for cookie in cookies {
                let outcome = self.check_in(profile, cookie).await?;
                outcomes.push(outcome);
            }
        }

        tracing::info!("签到完成，共 {} 个账号", outcomes.len());
        Ok(outcomes)
    }

    /// 单个账号的签到流程
    pub async fn check_in(
        &self,
        profile: &GameProfile,
        cookie: &str,
    ) -> Result<CheckinOutcome, CheckinError> {
        let ltuid = credential::parse_ltuid(cookie).inspect_err(|_| {
            tracing::warn!(
                "{}: Cookie 中未找到 ltuid: {}",
                profile.display_name,
                credential::mask(cookie)
            );
        })?;

        let account = account::resolve(&self.api, profile, cookie, ltuid).await?;
        let status = self.api.fetch_sign_status(profile, cookie).await?;
        let rewards = self.api.fetch_rewards(profile, cookie).await?;

        let reward = rewards
            .into_iter()
            .nth(reward_index(status.total_sign_day))
            .map(|reward| self.localize(reward))
            .unwrap_or_else(Reward::none);

        let (message, total) = if status.is_signed {
            tracing::info!("{}:CheckIn 今日已签到", profile.display_name);
            (profile.signed_message.clone(), status.total_sign_day)
        } else {
            self.api.sign(profile, cookie).await?;
            tracing::info!(
                "{}:CheckIn 今日奖励: {} x{}",
                profile.display_name,
                reward.name,
                reward.count
            );
            (
                profile.success_message.clone(),
                status.total_sign_day.saturating_add(1),
            )
        };

        Ok(CheckinOutcome {
            game: profile.id,
            total,
            message,
            assets: profile.assets.clone(),
            account: OutcomeAccount {
                uid: account.uid,
                nickname: account.nickname,
                rank: account.level,
                region: account.region,
                cookie: cookie.to_string(),
            },
            reward,
        })
    }

    fn localize(&self, mut reward: Reward) -> Reward {
        if let Some(name) = self.reward_names.get(&reward.name) {
            reward.name = name.clone();
        }
        reward
    }
}
