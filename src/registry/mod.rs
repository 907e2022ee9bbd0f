//! 服务注册适配器模块
//!
//! 定义宿主桥接框架使用的适配器能力集，以及按 URI scheme 选择后端的工厂注册表。

pub mod factory;
pub mod trait_def;

pub use factory::{AdapterFactory, AdapterRegistry};
pub use trait_def::{BoxedAdapter, RegistryAdapter};
