//! 账号解析：从平台账号卡片中找出目标游戏的角色

use super::client::CheckinApi;
use super::error::CheckinError;
use super::game::GameProfile;
use super::model::api::GameRecord;
use super::model::outcome::AccountProfile;
use super::region::Region;

/// 查询并解析目标游戏的账号信息
pub async fn resolve<A: CheckinApi>(
    api: &A,
    profile: &GameProfile,
    cookie: &str,
    ltuid: &str,
) -> Result<AccountProfile, CheckinError> {
    let records = api.fetch_game_records(profile, cookie, ltuid).await?;
    select(records, profile, ltuid)
}

/// 从角色列表中选出 `game_id` 与目标游戏一致的一条
pub fn select(
    records: Vec<GameRecord>,
    profile: &GameProfile,
    ltuid: &str,
) -> Result<AccountProfile, CheckinError> {
    let record = records
        .into_iter()
        .find(|record| record.game_id == profile.game_id)
        .ok_or_else(|| CheckinError::AccountNotFound {
            game: profile.id,
            ltuid: ltuid.to_string(),
        })?;

    tracing::info!(
        "{} 账号区服: {}",
        profile.display_name,
        record.region
    );

    Ok(AccountProfile {
        uid: record.game_role_id,
        nickname: record.nickname,
        level: record.level,
        region: Region::from_code(&record.region),
    })
}
