//! 签到平台 API 客户端
//!
//! `CheckinApi` 是签到流程依赖的四个远程调用，`HoyolabClient` 为基于 reqwest 的实现。
//! 网络错误和响应解析错误在这里就地转换为 `CheckinError`，不会向上抛出其他错误类型。

use std::future::Future;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::error::{CheckinError, Rejection};
use super::game::{GameId, GameProfile};
use super::model::api::{
    ApiEnvelope, BareEnvelope, GameRecord, GameRecordCard, SignHome, SignInfo, SignRequest,
};
use super::model::outcome::{Reward, SignStatus};

/// 账号卡片接口默认地址
pub const DEFAULT_ACCOUNT_CARD_URL: &str =
    "https://bbs-api-os.hoyolab.com/game_record/card/wapi/getGameRecordCard";

/// 签到流程所需的远程调用
pub trait CheckinApi {
    /// 查询平台账号下绑定的所有游戏角色
    fn fetch_game_records(
        &self,
        profile: &GameProfile,
        cookie: &str,
        ltuid: &str,
    ) -> impl Future<Output = Result<Vec<GameRecord>, CheckinError>> + Send;

    /// 查询今日是否已签到及本期累计天数
    fn fetch_sign_status(
        &self,
        profile: &GameProfile,
        cookie: &str,
    ) -> impl Future<Output = Result<SignStatus, CheckinError>> + Send;

    /// 查询本期奖励列表
    fn fetch_rewards(
        &self,
        profile: &GameProfile,
        cookie: &str,
    ) -> impl Future<Output = Result<Vec<Reward>, CheckinError>> + Send;

    /// 提交签到，会消耗当日签到机会
    fn sign(
        &self,
        profile: &GameProfile,
        cookie: &str,
    ) -> impl Future<Output = Result<(), CheckinError>> + Send;
}

/// 单次请求的失败原因
#[derive(Debug)]
enum Failure {
    Rejected(Rejection),
    Transport(String),
}

impl Failure {
    fn into_error(
        self,
        game: GameId,
        step: &'static str,
        rejected: impl FnOnce(Rejection) -> CheckinError,
    ) -> CheckinError {
        match self {
            Failure::Rejected(rejection) => {
                tracing::error!("{}:{} 平台拒绝请求: {}", game, step, rejection);
                rejected(rejection)
            }
            Failure::Transport(message) => {
                tracing::error!("{}:{} 请求异常: {}", game, step, message);
                CheckinError::Transport {
                    game,
                    step,
                    message,
                }
            }
        }
    }
}

fn require_data<T>(data: Option<T>) -> Result<T, Failure> {
    data.ok_or_else(|| {
        Failure::Rejected(Rejection {
            status: StatusCode::OK.as_u16(),
            retcode: Some(0),
            message: "响应缺少 data 字段".to_string(),
        })
    })
}

/// 发送请求并解析响应信封
///
/// 仅 HTTP 200 且 retcode 为 0 视为成功，返回信封中的 data
async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<Option<T>, Failure> {
    let response = request
        .send()
        .await
        .map_err(|e| Failure::Transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Failure::Transport(e.to_string()))?;

    if status != StatusCode::OK {
        // 非 200 响应体不一定是 JSON，尽量取出 retcode
        let rejection = match serde_json::from_str::<BareEnvelope>(&body) {
            Ok(envelope) => Rejection {
                status: status.as_u16(),
                retcode: Some(envelope.retcode),
                message: envelope.message,
            },
            Err(_) => Rejection {
                status: status.as_u16(),
                retcode: None,
                message: body,
            },
        };
        return Err(Failure::Rejected(rejection));
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
        .map_err(|e| Failure::Transport(format!("响应解析失败: {}", e)))?;

    if envelope.retcode != 0 {
        return Err(Failure::Rejected(Rejection {
            status: status.as_u16(),
            retcode: Some(envelope.retcode),
            message: envelope.message,
        }));
    }

    Ok(envelope.data)
}

/// 基于 reqwest 的签到平台客户端
#[derive(Debug, Clone)]
pub struct HoyolabClient {
    client: Client,
    account_card_url: String,
}

impl HoyolabClient {
    pub fn new(client: Client, account_card_url: impl Into<String>) -> Self {
        Self {
            client,
            account_card_url: account_card_url.into(),
        }
    }

    /// 附带 Cookie 和 `x-rpc-signgame` 的 GET 请求
    fn get(&self, url: &str, profile: &GameProfile, cookie: &str) -> RequestBuilder {
        self.client
            .get(url)
            .header("Cookie", cookie)
            .header("x-rpc-signgame", &profile.sign_game)
    }
}

impl CheckinApi for HoyolabClient {
    async fn fetch_game_records(
        &self,
        profile: &GameProfile,
        cookie: &str,
        ltuid: &str,
    ) -> Result<Vec<GameRecord>, CheckinError> {
        let url = format!(
            "{}?uid={}",
            self.account_card_url,
            urlencoding::encode(ltuid)
        );
        let game = profile.id;

        let card: GameRecordCard = execute(self.client.get(&url).header("Cookie", cookie))
            .await
            .and_then(require_data)
            .map_err(|f| {
                f.into_error(game, "login", |rejection| CheckinError::LoginFailed {
                    game,
                    rejection,
                })
            })?;

        Ok(card.list)
    }

    async fn fetch_sign_status(
        &self,
        profile: &GameProfile,
        cookie: &str,
    ) -> Result<SignStatus, CheckinError> {
        let url = format!(
            "{}?act_id={}",
            profile.endpoints.info,
            urlencoding::encode(&profile.act_id)
        );
        let game = profile.id;

        let info: SignInfo = execute(self.get(&url, profile, cookie))
            .await
            .and_then(require_data)
            .map_err(|f| {
                f.into_error(game, "getSignInfo", |rejection| {
                    CheckinError::StatusFetchFailed { game, rejection }
                })
            })?;

        Ok(SignStatus {
            total_sign_day: info.total_sign_day,
            today: info.today,
            is_signed: info.is_sign,
        })
    }

    async fn fetch_rewards(
        &self,
        profile: &GameProfile,
        cookie: &str,
    ) -> Result<Vec<Reward>, CheckinError> {
        let url = format!(
            "{}?act_id={}",
            profile.endpoints.home,
            urlencoding::encode(&profile.act_id)
        );
        let game = profile.id;

        let home: SignHome = execute(self.get(&url, profile, cookie))
            .await
            .and_then(require_data)
            .map_err(|f| {
                f.into_error(game, "getAwardsData", |rejection| {
                    CheckinError::CatalogFetchFailed { game, rejection }
                })
            })?;

        if home.awards.is_empty() {
            tracing::warn!("{}:getAwardsData 奖励列表为空", game);
        }

        Ok(home.awards.into_iter().map(Reward::from).collect())
    }

    async fn sign(&self, profile: &GameProfile, cookie: &str) -> Result<(), CheckinError> {
        let game = profile.id;
        let request = self
            .client
            .post(&profile.endpoints.sign)
            .header("Cookie", cookie)
            .header("x-rpc-signgame", &profile.sign_game)
            .json(&SignRequest {
                act_id: &profile.act_id,
            });

        let data = execute::<serde_json::Value>(request).await.map_err(|f| {
            f.into_error(game, "sign", |rejection| CheckinError::SignSubmissionFailed {
                game,
                rejection,
            })
        })?;

        tracing::debug!("{}:sign 响应数据: {:?}", game, data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::extract::{Query, State};
    use axum::http::HeaderMap;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;
    use crate::checkin::game::Endpoints;
    use crate::http_client::build_client;

    const COOKIE: &str = "ltoken_v2=token; ltuid_v2=1001";

    #[derive(Clone, Default)]
    struct FakePlatform {
        sign_calls: Arc<AtomicUsize>,
    }

    fn has_cookie(headers: &HeaderMap) -> bool {
        headers.get("cookie").and_then(|v| v.to_str().ok()) == Some(COOKIE)
    }

    fn rejected(retcode: i64, message: &str) -> Json<Value> {
        Json(json!({ "retcode": retcode, "message": message, "data": null }))
    }

    async fn card(Query(query): Query<HashMap<String, String>>, headers: HeaderMap) -> Json<Value> {
        if !has_cookie(&headers) {
            return rejected(10001, "Please login");
        }
        match query.get("uid").map(String::as_str) {
            Some("1001") => Json(json!({
                "retcode": 0,
                "message": "OK",
                "data": { "list": [
                    { "game_id": 2, "game_role_id": "800000001", "nickname": "Lumine", "level": 60, "region": "os_asia" },
                    { "game_id": 6, "game_role_id": "600000001", "nickname": "Stelle", "level": 70, "region": "prod_official_usa" }
                ]}
            })),
            _ => rejected(-100, "invalid uid"),
        }
    }

    async fn info(Query(query): Query<HashMap<String, String>>, headers: HeaderMap) -> Json<Value> {
        let sign_game = headers.get("x-rpc-signgame").and_then(|v| v.to_str().ok());
        if query.get("act_id").map(String::as_str) != Some("act-test") || sign_game != Some("hk4e") {
            return rejected(-1, "bad request");
        }
        Json(json!({
            "retcode": 0,
            "message": "OK",
            "data": { "total_sign_day": 3, "today": "2026-10-16", "is_sign": false }
        }))
    }

    async fn home() -> Json<Value> {
        Json(json!({
            "retcode": 0,
            "message": "OK",
            "data": { "month": 10, "awards": [
                { "name": "Primogem", "cnt": 20, "icon": "p.png" },
                { "name": "Mora", "cnt": 5000, "icon": "m.png" }
            ]}
        }))
    }

    async fn sign(State(state): State<FakePlatform>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
        if !has_cookie(&headers) || body["act_id"] != "act-test" {
            return rejected(-5003, "already signed");
        }
        state.sign_calls.fetch_add(1, Ordering::SeqCst);
        Json(json!({ "retcode": 0, "message": "OK", "data": { "code": "ok" } }))
    }

    async fn spawn_platform(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn profile_for(base: &str) -> GameProfile {
        let mut profile = GameProfile::builtin(GameId::Genshin);
        profile.act_id = "act-test".to_string();
        profile.endpoints = Endpoints {
            info: format!("{}/info", base),
            home: format!("{}/home", base),
            sign: format!("{}/sign", base),
        };
        profile
    }

    async fn setup() -> (HoyolabClient, GameProfile, FakePlatform) {
        let platform = FakePlatform::default();
        let router = Router::new()
            .route("/card", get(card))
            .route("/info", get(info))
            .route("/home", get(home))
            .route("/sign", post(sign))
            .with_state(platform.clone());
        let base = spawn_platform(router).await;
        let client = HoyolabClient::new(build_client(None, Some(5)).unwrap(), format!("{}/card", base));
        (client, profile_for(&base), platform)
    }

    #[tokio::test]
    async fn test_fetch_game_records() {
        let (client, profile, _) = setup().await;
        let records = client.fetch_game_records(&profile, COOKIE, "1001").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].nickname, "Stelle");
    }

    #[tokio::test]
    async fn test_fetch_game_records_rejected() {
        let (client, profile, _) = setup().await;
        let err = client
            .fetch_game_records(&profile, COOKIE, "9999")
            .await
            .unwrap_err();
        assert!(matches!(err, CheckinError::LoginFailed { game: GameId::Genshin, .. }));
        assert_eq!(err.code(), Some(-100));
    }

    #[tokio::test]
    async fn test_fetch_sign_status_sends_act_id_and_header() {
        let (client, profile, _) = setup().await;
        let status = client.fetch_sign_status(&profile, COOKIE).await.unwrap();
        assert_eq!(status.total_sign_day, 3);
        assert_eq!(status.today, "2026-10-16");
        assert!(!status.is_signed);
    }

    #[tokio::test]
    async fn test_fetch_sign_status_wrong_header_rejected() {
        let (client, mut profile, _) = setup().await;
        profile.sign_game = "hkrpg".to_string();
        let err = client.fetch_sign_status(&profile, COOKIE).await.unwrap_err();
        assert!(matches!(err, CheckinError::StatusFetchFailed { .. }));
        assert_eq!(err.code(), Some(-1));
    }

    #[tokio::test]
    async fn test_fetch_rewards() {
        let (client, profile, _) = setup().await;
        let rewards = client.fetch_rewards(&profile, COOKIE).await.unwrap();
        assert_eq!(rewards.len(), 2);
        assert_eq!(rewards[1].name, "Mora");
        assert_eq!(rewards[1].count, 5000);
        assert_eq!(rewards[1].icon, "m.png");
    }

    #[tokio::test]
    async fn test_sign_posts_act_id() {
        let (client, profile, platform) = setup().await;
        client.sign(&profile, COOKIE).await.unwrap();
        assert_eq!(platform.sign_calls.load(Ordering::SeqCst), 1);

        let err = client.sign(&profile, "ltuid_v2=2").await.unwrap_err();
        assert!(matches!(err, CheckinError::SignSubmissionFailed { .. }));
        assert_eq!(platform.sign_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_200_plain_body() {
        let router = Router::new().route(
            "/home",
            get(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let base = spawn_platform(router).await;
        let client = HoyolabClient::new(build_client(None, Some(5)).unwrap(), format!("{}/card", base));

        let err = client.fetch_rewards(&profile_for(&base), COOKIE).await.unwrap_err();
        match err {
            CheckinError::CatalogFetchFailed { rejection, .. } => {
                assert_eq!(rejection.status, 502);
                assert_eq!(rejection.retcode, None);
                assert_eq!(rejection.message, "upstream down");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_data_is_rejection() {
        let router = Router::new().route(
            "/info",
            get(|| async { Json(json!({ "retcode": 0, "message": "OK", "data": null })) }),
        );
        let base = spawn_platform(router).await;
        let client = HoyolabClient::new(build_client(None, Some(5)).unwrap(), format!("{}/card", base));

        let err = client
            .fetch_sign_status(&profile_for(&base), COOKIE)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckinError::StatusFetchFailed { .. }));
        assert_eq!(err.code(), Some(0));
    }

    #[tokio::test]
    async fn test_invalid_json_is_transport_error() {
        let router = Router::new().route("/info", get(|| async { "<html>maintenance</html>" }));
        let base = spawn_platform(router).await;
        let client = HoyolabClient::new(build_client(None, Some(5)).unwrap(), format!("{}/card", base));

        let err = client
            .fetch_sign_status(&profile_for(&base), COOKIE)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CheckinError::Transport { step: "getSignInfo", .. }
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // 绑定后立即释放端口，确保没有服务在监听
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = HoyolabClient::new(build_client(None, Some(5)).unwrap(), format!("{}/card", base));
        let err = client
            .fetch_game_records(&profile_for(&base), COOKIE, "1001")
            .await
            .unwrap_err();
        assert!(matches!(err, CheckinError::Transport { step: "login", .. }));
    }
}
