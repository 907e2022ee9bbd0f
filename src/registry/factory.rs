//! 适配器工厂与 scheme 注册表
//!
//! 宿主进程在自己的初始化流程里显式注册工厂，没有任何加载期副作用：
//!
//! ```rust,no_run
//! use flare_eureka_adapter::registry::AdapterRegistry;
//!
//! let mut registry = AdapterRegistry::new();
//! flare_eureka_adapter::eureka::register_factories(&mut registry);
//! let adapter = registry.create("eureka://registry.local:8761").unwrap();
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Url;
use tracing::{debug, warn};

use super::trait_def::BoxedAdapter;
use crate::error::{RegistryError, Result};

/// 适配器工厂
pub trait AdapterFactory: Send + Sync {
    /// 根据连接 URI 创建适配器
    fn create(&self, uri: &Url) -> Result<BoxedAdapter>;
}

/// scheme → 工厂 的注册表
#[derive(Default, Clone)]
pub struct AdapterRegistry {
    factories: HashMap<String, Arc<dyn AdapterFactory>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为 scheme 注册工厂，同名 scheme 会被覆盖
    pub fn register(&mut self, scheme: impl Into<String>, factory: Arc<dyn AdapterFactory>) {
        let scheme = scheme.into().to_lowercase();
        if self.factories.insert(scheme.clone(), factory).is_some() {
            warn!(scheme = %scheme, "Adapter factory replaced");
        } else {
            debug!(scheme = %scheme, "Adapter factory registered");
        }
    }

    /// 是否已注册该 scheme
    pub fn contains(&self, scheme: &str) -> bool {
        self.factories.contains_key(&scheme.to_lowercase())
    }

    /// 已注册的 scheme（已排序）
    pub fn schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self.factories.keys().cloned().collect();
        schemes.sort();
        schemes
    }

    /// 解析 URI 并交给对应 scheme 的工厂
    pub fn create(&self, uri: &str) -> Result<BoxedAdapter> {
        let parsed = Url::parse(uri).map_err(|e| RegistryError::InvalidUri(format!("{}: {}", uri, e)))?;
        let factory = self
            .factories
            .get(parsed.scheme())
            .ok_or_else(|| RegistryError::UnsupportedScheme(parsed.scheme().to_string()))?;
        factory.create(&parsed)
    }
}
