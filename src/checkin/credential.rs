//! Cookie 凭据解析

use super::error::CheckinError;

const LTUID_KEY: &str = "ltuid_v2=";

/// 从原始 Cookie 字符串中提取 `ltuid_v2` 的值
///
/// 值以 `;` 或字符串结尾为界，空值视为未找到
pub fn parse_ltuid(cookie: &str) -> Result<&str, CheckinError> {
    cookie
        .match_indices(LTUID_KEY)
        .map(|(start, _)| {
            let rest = &cookie[start + LTUID_KEY.len()..];
            rest.split(';').next().unwrap_or_default()
        })
        .find(|value| !value.is_empty())
        .ok_or(CheckinError::MalformedCredential)
}

/// 日志中使用的凭据掩码形式
pub fn mask(cookie: &str) -> String {
    let half = cookie.chars().count() / 2;
    let visible: String = cookie.chars().take(half.min(16)).collect();
    format!("{}***", visible)
}
