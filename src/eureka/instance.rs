//! Eureka 实例定义
//!
//! 把桥接框架的 [`ServiceRecord`] 转换为 Eureka 注册中心的线上格式。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ServiceRecord;

/// 固定注入的协议提示（供 sidecar 代理路由使用）
pub const PROTOCOL_METADATA_KEY: &str = "istio.protocol";
pub const PROTOCOL_METADATA_VALUE: &str = "http";

/// 实例元数据
pub type Metadata = HashMap<String, String>;

/// Eureka 实例
///
/// `(app, id)` 是注册中心的寻址键，本地不保存任何实例。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instance {
    #[serde(rename = "instanceId", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(rename = "hostName")]
    pub hostname: String,

    pub app: String,

    #[serde(rename = "ipAddr")]
    pub ip_address: String,

    #[serde(default)]
    pub port: Port,

    #[serde(rename = "securePort", default)]
    pub secure_port: Port,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: Metadata,
}

/// 端口描述
///
/// Eureka 要求 `$` 和 `@enabled` 都以字符串形式出现在 JSON 中。
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Port {
    #[serde(rename = "$", with = "as_string")]
    pub port: u16,

    #[serde(rename = "@enabled", with = "as_string")]
    pub enabled: bool,
}

impl Port {
    /// 创建已启用的端口
    pub fn enabled(port: u16) -> Self {
        Self {
            port,
            enabled: true,
        }
    }
}

/// 注册请求体：`{"instance": {...}}`
#[derive(Debug, Serialize)]
pub(crate) struct RegisterPayload<'a> {
    pub instance: &'a Instance,
}

impl Instance {
    /// 从服务记录构建实例
    ///
    /// - `id` 中的 `:` 全部替换为 `-`，保证可以直接拼进 URL
    /// - `hostName` 和 `app` 都取服务名
    /// - 元数据先写入 `istio.protocol=http`，再按顺序应用标签，标签可以覆盖它
    pub fn from_service(service: &ServiceRecord) -> Self {
        Self {
            id: service.id.replace(':', "-"),
            hostname: service.name.clone(),
            app: service.name.clone(),
            ip_address: service.ip.clone(),
            port: Port::enabled(service.port),
            secure_port: Port::default(),
            metadata: build_metadata(&service.tags),
        }
    }
}

impl From<&ServiceRecord> for Instance {
    fn from(service: &ServiceRecord) -> Self {
        Instance::from_service(service)
    }
}

/// 构建元数据：`key|value` 按第一个 `|` 切分，没有 `|` 时值为空串
pub fn build_metadata<S: AsRef<str>>(tags: &[S]) -> Metadata {
    let mut metadata = Metadata::with_capacity(tags.len() + 1);
    metadata.insert(
        PROTOCOL_METADATA_KEY.to_string(),
        PROTOCOL_METADATA_VALUE.to_string(),
    );

    for tag in tags {
        let (key, value) = tag.as_ref().split_once('|').unwrap_or((tag.as_ref(), ""));
        metadata.insert(key.to_string(), value.to_string());
    }

    metadata
}

/// 以字符串形式读写标量字段
mod as_string {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
