//! 签到平台接口的请求/响应结构
//!
//! 所有响应都包在 `{ retcode, message, data }` 信封中，retcode 为 0 表示成功

use serde::{Deserialize, Serialize};

/// 通用响应信封
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub retcode: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// 只关心 retcode/message 时使用（签到接口、错误响应）
pub type BareEnvelope = ApiEnvelope<serde_json::Value>;

/// 账号卡片：`getGameRecordCard` 的 data
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecordCard {
    #[serde(default)]
    pub list: Vec<GameRecord>,
}

/// 账号在某个游戏中绑定的角色
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameRecord {
    pub game_role_id: String,
    pub nickname: String,
    pub level: u32,
    pub region: String,
    pub game_id: u32,
}

/// 签到状态：`/info` 的 data
#[derive(Debug, Clone, Deserialize)]
pub struct SignInfo {
    pub total_sign_day: u32,
    #[serde(default)]
    pub today: String,
    pub is_sign: bool,
}

/// 奖励列表：`/home` 的 data
#[derive(Debug, Clone, Deserialize)]
pub struct SignHome {
    #[serde(default)]
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Award {
    pub name: String,
    pub cnt: u32,
    #[serde(default)]
    pub icon: String,
}

/// 签到请求体
#[derive(Debug, Clone, Serialize)]
pub struct SignRequest<'a> {
    pub act_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_card_envelope() {
        let body = r#"{
            "retcode": 0,
            "message": "OK",
            "data": {
                "list": [
                    {
                        "has_role": true,
                        "game_id": 2,
                        "game_role_id": "800123456",
                        "nickname": "Lumine",
                        "region": "os_asia",
                        "level": 58,
                        "background_image": "https://example.invalid/bg.png"
                    }
                ]
            }
        }"#;
        let envelope: ApiEnvelope<GameRecordCard> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.retcode, 0);
        let list = envelope.data.unwrap().list;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].game_role_id, "800123456");
        assert_eq!(list[0].level, 58);
    }

    #[test]
    fn test_decode_rejection_with_null_data() {
        let body = r#"{"retcode": -100, "message": "Please log in", "data": null}"#;
        let envelope: BareEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.retcode, -100);
        assert_eq!(envelope.message, "Please log in");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_decode_sign_info_and_home() {
        let info: ApiEnvelope<SignInfo> = serde_json::from_str(
            r#"{"retcode":0,"message":"OK","data":{"total_sign_day":3,"today":"2026-10-16","is_sign":false,"first_bind":false}}"#,
        )
        .unwrap();
        let info = info.data.unwrap();
        assert_eq!(info.total_sign_day, 3);
        assert!(!info.is_sign);

        let home: ApiEnvelope<SignHome> = serde_json::from_str(
            r#"{"retcode":0,"message":"OK","data":{"month":10,"awards":[{"icon":"i0","name":"Primogem","cnt":60}]}}"#,
        )
        .unwrap();
        let awards = home.data.unwrap().awards;
        assert_eq!(awards[0].name, "Primogem");
        assert_eq!(awards[0].cnt, 60);
    }

    #[test]
    fn test_encode_sign_request() {
        let body = serde_json::to_string(&SignRequest {
            act_id: "e202102251931481",
        })
        .unwrap();
        assert_eq!(body, r#"{"act_id":"e202102251931481"}"#);
    }
}
