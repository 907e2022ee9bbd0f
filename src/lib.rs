//! Flare Eureka Adapter
//!
//! 让通用的容器服务发现桥接框架通过 HTTP/JSON 向 Eureka 兼容的注册中心
//! 注册、注销服务并发送心跳。

pub mod config;
pub mod error;
pub mod eureka;
pub mod logging;
pub mod registry;
pub mod types;

// Re-exports
pub use config::AdapterConfig;
pub use error::{ErrorCategory, ErrorCode, RegistryError, Result};
pub use eureka::{
    EUREKA_SCHEME, EUREKA_TLS_SCHEME, EurekaAdapter, EurekaClient, EurekaFactory, Instance,
    register_factories,
};
pub use logging::{LogFormat, init_logging};
pub use registry::{AdapterFactory, AdapterRegistry, BoxedAdapter, RegistryAdapter};
pub use types::ServiceRecord;
