//! HTTP 客户端构建模块
//!
//! 所有对签到平台的请求共用同一个 reqwest::Client

use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Proxy};

/// HTTP 代理配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// 代理地址（http / https / socks5）
    pub url: String,
    /// 代理认证用户名
    pub username: Option<String>,
    /// 代理认证密码
    pub password: Option<String>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// 设置代理认证信息
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// 构建 HTTP 客户端
///
/// `timeout_secs` 为 None 时不设置超时，请求会一直等待到平台响应
pub fn build_client(proxy: Option<&ProxyConfig>, timeout_secs: Option<u64>) -> anyhow::Result<Client> {
    let mut builder = Client::builder();

    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(proxy_config) = proxy {
        let mut proxy = Proxy::all(&proxy_config.url)
            .with_context(|| format!("代理地址无效: {}", proxy_config.url))?;
        if let (Some(username), Some(password)) = (&proxy_config.username, &proxy_config.password) {
            proxy = proxy.basic_auth(username, password);
        }
        builder = builder.proxy(proxy);
    }

    builder.build().context("构建 HTTP 客户端失败")
}
