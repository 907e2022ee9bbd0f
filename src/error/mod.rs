//! 注册中心适配器错误处理模块
//!
//! 所有失败（URI 构造、JSON 编码、传输层、非预期状态码）都以
//! [`RegistryError`] 原样返回给调用方，适配器内部不做任何恢复。

pub mod code;
pub mod registry_error;

pub use code::{ErrorCategory, ErrorCode};
pub use registry_error::{RegistryError, Result};
