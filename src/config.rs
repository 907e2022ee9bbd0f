use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// 覆盖请求超时的环境变量（毫秒）
pub const TIMEOUT_ENV: &str = "EUREKA_TIMEOUT_MS";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AdapterConfig {
    /// 连接 URI，`eureka://host:port/...` 或 `eureka-tls://host:port/...`
    pub uri: String,
    /// 单次请求超时（毫秒），必须大于 0
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl AdapterConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// 设置请求超时（按毫秒保存）
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// 应用环境变量覆盖（无法解析的值忽略）
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(ms) = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.timeout_ms = ms;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 校验配置：超时不能为 0
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(RegistryError::Config(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AdapterConfig =
            toml::from_str(content).map_err(|e| RegistryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::Config(format!("{}: {}", path, e)))?;
        Self::from_toml_str(&content)
    }
}
