//! Eureka 注册中心适配器
//!
//! 通过 `eureka://host:port/...`（HTTP）或 `eureka-tls://host:port/...`（HTTPS）构造，
//! 把桥接框架的注册、注销、心跳映射为 Eureka REST 调用。

pub mod client;
pub mod instance;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::info;

pub use client::{DEFAULT_TIMEOUT, EurekaClient};
pub use instance::{Instance, Metadata, Port};

use crate::config::AdapterConfig;
use crate::error::{RegistryError, Result};
use crate::registry::{AdapterFactory, AdapterRegistry, BoxedAdapter, RegistryAdapter};
use crate::types::ServiceRecord;

/// 明文 scheme
pub const EUREKA_SCHEME: &str = "eureka";
/// 加密 scheme
pub const EUREKA_TLS_SCHEME: &str = "eureka-tls";

/// 把两个 Eureka scheme 注册到工厂注册表
pub fn register_factories(registry: &mut AdapterRegistry) {
    let factory: Arc<dyn AdapterFactory> = Arc::new(EurekaFactory::default());
    registry.register(EUREKA_SCHEME, factory.clone());
    registry.register(EUREKA_TLS_SCHEME, factory);
}

/// Eureka 适配器工厂
#[derive(Debug, Clone)]
pub struct EurekaFactory {
    timeout: Duration,
}

impl EurekaFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for EurekaFactory {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl AdapterFactory for EurekaFactory {
    fn create(&self, uri: &Url) -> Result<BoxedAdapter> {
        Ok(Box::new(EurekaAdapter::with_timeout(uri, self.timeout)?))
    }
}

/// Eureka 适配器
///
/// 不保存任何实例状态，每次调用都从服务记录重新构建实例。
#[derive(Debug, Clone)]
pub struct EurekaAdapter {
    client: EurekaClient,
}

impl EurekaAdapter {
    /// 使用默认超时（30 秒）创建
    pub fn new(uri: &Url) -> Result<Self> {
        Self::with_timeout(uri, DEFAULT_TIMEOUT)
    }

    /// 从 URI 字符串创建
    pub fn from_uri(uri: &str) -> Result<Self> {
        let parsed = Url::parse(uri).map_err(|e| RegistryError::InvalidUri(format!("{}: {}", uri, e)))?;
        Self::new(&parsed)
    }

    /// 从配置创建
    pub fn with_config(config: &AdapterConfig) -> Result<Self> {
        config.validate()?;
        let parsed = Url::parse(&config.uri)
            .map_err(|e| RegistryError::InvalidUri(format!("{}: {}", config.uri, e)))?;
        Self::with_timeout(&parsed, config.timeout())
    }

    /// 使用指定超时创建，超时为 0 时返回配置错误
    pub fn with_timeout(uri: &Url, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(RegistryError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        let base_url = resolve_base_url(uri)?;
        info!(base_url = %base_url, timeout_ms = timeout.as_millis() as u64, "Eureka adapter created");
        Ok(Self {
            client: EurekaClient::new(base_url, timeout)?,
        })
    }

    /// 解析后的注册中心地址，如 `http://registry.local:8761`
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn client(&self) -> &EurekaClient {
        &self.client
    }
}

#[async_trait]
impl RegistryAdapter for EurekaAdapter {
    async fn ping(&self) -> Result<()> {
        // TODO: 调用注册中心的健康检查接口
        Ok(())
    }

    async fn register(&self, service: &ServiceRecord) -> Result<()> {
        self.client.register(&Instance::from_service(service)).await
    }

    async fn deregister(&self, service: &ServiceRecord) -> Result<()> {
        let instance = Instance::from_service(service);
        self.client.deregister(&instance.app, &instance.id).await
    }

    async fn refresh(&self, service: &ServiceRecord) -> Result<()> {
        let instance = Instance::from_service(service);
        self.client.heartbeat(&instance.app, &instance.id).await
    }

    async fn services(&self) -> Result<Vec<ServiceRecord>> {
        Ok(Vec::new())
    }
}

/// 把 Eureka scheme 改写为传输层 scheme，保留主机、端口、路径和查询串
///
/// 结果不带结尾的 `/`，便于直接拼接 `/eureka/v2/...`。
pub fn resolve_base_url(uri: &Url) -> Result<String> {
    let transport = match uri.scheme() {
        EUREKA_SCHEME => "http",
        EUREKA_TLS_SCHEME => "https",
        other => return Err(RegistryError::UnsupportedScheme(other.to_string())),
    };

    // `Url::set_scheme` 不允许从非特殊 scheme 切换到 http/https，只能重新解析
    let rest = &uri.as_str()[uri.scheme().len()..];
    let rewritten = format!("{}{}", transport, rest);
    let parsed = Url::parse(&rewritten)
        .map_err(|e| RegistryError::InvalidUri(format!("{}: {}", uri, e)))?;

    if parsed.host_str().is_none() {
        return Err(RegistryError::InvalidUri(format!("{}: missing host", uri)));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
