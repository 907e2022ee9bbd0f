//! Eureka REST 客户端
//!
//! 三个接口，每次调用只发一个请求：
//! - `POST   {base}/eureka/v2/apps/{app}`       注册，期望 204
//! - `PUT    {base}/eureka/v2/apps/{app}/{id}`  心跳，期望 200
//! - `DELETE {base}/eureka/v2/apps/{app}/{id}`  注销，期望 200

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Response, StatusCode};
use tracing::{debug, info, warn};

use super::instance::{Instance, RegisterPayload};
use crate::error::{RegistryError, Result};

/// 默认请求超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Eureka REST 客户端
///
/// 只持有连接池和基础地址，可以在多个任务间共享。
#[derive(Debug, Clone)]
pub struct EurekaClient {
    http_client: HttpClient,
    base_url: String,
}

impl EurekaClient {
    /// 使用指定超时创建客户端
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(base_url, http_client))
    }

    /// 使用已有的 HTTP 客户端
    pub fn with_http_client(base_url: impl Into<String>, http_client: HttpClient) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 注册实例
    pub async fn register(&self, instance: &Instance) -> Result<()> {
        let body = serde_json::to_vec(&RegisterPayload { instance })?;
        let url = self.app_path(&instance.app);
        debug!(app = %instance.app, instance_id = %instance.id, url = %url, "Registering instance");

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = drain(response).await;

        if status != StatusCode::NO_CONTENT {
            warn!(app = %instance.app, instance_id = %instance.id, status = %status, "Register rejected");
            return Err(RegistryError::unexpected_status(status));
        }

        info!(
            app = %instance.app,
            instance_id = %instance.id,
            ip = %instance.ip_address,
            port = instance.port.port,
            "✅ Instance registered"
        );
        Ok(())
    }

    /// 发送心跳，续租
    pub async fn heartbeat(&self, app: &str, id: &str) -> Result<()> {
        let url = self.instance_path(app, id);
        debug!(app = %app, instance_id = %id, url = %url, "Sending heartbeat");

        let response = self.http_client.put(&url).send().await?;
        let status = drain(response).await;

        if status != StatusCode::OK {
            warn!(app = %app, instance_id = %id, status = %status, "Heartbeat rejected");
            return Err(RegistryError::unexpected_status(status));
        }

        debug!(app = %app, instance_id = %id, "💓 Heartbeat sent");
        Ok(())
    }

    /// 注销实例
    pub async fn deregister(&self, app: &str, id: &str) -> Result<()> {
        let url = self.instance_path(app, id);
        debug!(app = %app, instance_id = %id, url = %url, "Deregistering instance");

        let response = self.http_client.delete(&url).send().await?;
        let status = drain(response).await;

        if status != StatusCode::OK {
            warn!(app = %app, instance_id = %id, status = %status, "Deregister rejected");
            return Err(RegistryError::deregister_failed(id, status));
        }

        info!(app = %app, instance_id = %id, "✅ Instance deregistered");
        Ok(())
    }

    /// `{base}/eureka/v2/apps/{app}`
    pub fn app_path(&self, app: &str) -> String {
        format!("{}/eureka/v2/apps/{}", self.base_url, app)
    }

    /// `{base}/eureka/v2/apps/{app}/{id}`
    pub fn instance_path(&self, app: &str, id: &str) -> String {
        format!("{}/eureka/v2/apps/{}/{}", self.base_url, app, id)
    }
}

/// 逐块读完并丢弃响应体，连接归还连接池
async fn drain(mut response: Response) -> StatusCode {
    let status = response.status();
    loop {
        match response.chunk().await {
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(e) => {
                debug!(status = %status, error = %e, "Failed to drain response body");
                break;
            }
        }
    }
    status
}
