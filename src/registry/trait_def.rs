//! 注册中心适配器 Trait 定义

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ServiceRecord;

/// 注册中心适配器 Trait
///
/// 宿主桥接框架在服务启动时调用 `register`，停止时调用 `deregister`，
/// 并按自己的定时器周期性调用 `refresh`。每个方法都是一次独立的无状态调用。
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// 检查注册中心是否可用
    async fn ping(&self) -> Result<()>;

    /// 注册服务
    async fn register(&self, service: &ServiceRecord) -> Result<()>;

    /// 注销服务
    async fn deregister(&self, service: &ServiceRecord) -> Result<()>;

    /// 心跳续期
    async fn refresh(&self, service: &ServiceRecord) -> Result<()>;

    /// 列出注册中心中的服务
    async fn services(&self) -> Result<Vec<ServiceRecord>>;
}

/// 适配器（类型别名，便于宿主持有任意后端）
pub type BoxedAdapter = Box<dyn RegistryAdapter>;
