mod api;
mod checkin;
mod http_client;
mod model;

use api::types::{CheckinReport, ErrorResponse};
use checkin::model::outcome::CheckinOutcome;
use checkin::{CheckinError, CheckinService, GameRegistry, HoyolabClient};
use clap::Parser;
use model::arg::Args;
use model::config::Config;

#[tokio::main]
async fn main() {
    // 解析命令行参数
    let args = Args::parse();

    // 初始化日志，输出到标准错误，标准输出留给 --once 的 JSON 结果
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // 加载配置，环境变量中的 Cookie 追加到对应游戏
    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path).unwrap_or_else(|e| {
        tracing::error!("加载配置失败: {:#}", e);
        std::process::exit(1);
    });
    config.merge_env_accounts(|key| std::env::var(key).ok());

    // 构建代理配置
    let proxy_config = config.proxy_url.as_ref().map(|url| {
        let mut proxy = http_client::ProxyConfig::new(url);
        if let (Some(username), Some(password)) = (&config.proxy_username, &config.proxy_password) {
            proxy = proxy.with_auth(username, password);
        }
        proxy
    });

    if let Some(proxy) = &proxy_config {
        tracing::info!("已配置 HTTP 代理: {}", proxy.url);
    }

    let client = http_client::build_client(proxy_config.as_ref(), config.request_timeout_secs)
        .unwrap_or_else(|e| {
            tracing::error!("创建 HTTP 客户端失败: {:#}", e);
            std::process::exit(1);
        });

    let registry = GameRegistry::new(&config.endpoints);
    let service = CheckinService::new(
        HoyolabClient::new(client, config.account_card_url.clone()),
        registry,
        config.accounts.clone(),
        config.reward_names.clone(),
    );

    let account_count = service.account_count();
    if account_count == 0 {
        tracing::warn!("未配置任何账号 Cookie，请在配置文件或环境变量中添加");
    } else {
        tracing::info!("已加载 {} 个账号", account_count);
    }

    if args.once {
        run_once(&service).await;
        return;
    }

    let state = api::AppState::new(config.api_key.clone(), service);
    let auth_enabled = state.api_key.is_some();
    let app = api::create_router(state);

    // 启动服务器
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("启动签到服务: {}", addr);
    tracing::info!("可用 API:");
    tracing::info!("  GET  /api/checkin");
    tracing::info!("  GET  /health");
    if !auth_enabled {
        tracing::warn!("未配置 apiKey，签到接口不需要认证");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("绑定地址失败 {}: {}", addr, e);
            std::process::exit(1);
        });
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("服务异常退出: {}", e);
        std::process::exit(1);
    }
}

/// 执行一次签到，结果以 JSON 输出到标准输出
async fn run_once(service: &CheckinService<HoyolabClient>) {
    match render_report(service.run_all().await) {
        Ok((body, code)) => {
            println!("{}", body);
            std::process::exit(code);
        }
        Err(e) => {
            tracing::error!("序列化签到结果失败: {}", e);
            std::process::exit(1);
        }
    }
}

/// 将签到结果渲染为 JSON 文本和进程退出码
fn render_report(
    result: Result<Vec<CheckinOutcome>, CheckinError>,
) -> serde_json::Result<(String, i32)> {
    match result {
        Ok(results) => Ok((serde_json::to_string_pretty(&CheckinReport::new(results))?, 0)),
        Err(e) => Ok((serde_json::to_string_pretty(&ErrorResponse::from(&e))?, 1)),
    }
}
