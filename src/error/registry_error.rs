//! 注册中心适配器统一错误类型

use super::code::ErrorCode;
use reqwest::StatusCode;
use thiserror::Error;

/// 注册中心适配器统一错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    /// 连接 URI 无法解析或无法拼出请求地址
    #[error("invalid registry uri: {0}")]
    InvalidUri(String),

    /// 没有为该 scheme 注册适配器工厂
    #[error("unsupported registry scheme: {0}")]
    UnsupportedScheme(String),

    /// 实例编码为 JSON 失败
    #[error("failed to encode instance: {0}")]
    Encode(#[from] serde_json::Error),

    /// 网络失败或请求超时
    #[error("registry request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 注册中心返回了非预期的状态码
    #[error("unexpected status code {status}")]
    UnexpectedStatus { status: StatusCode },

    /// 注销时注册中心返回了非 200 状态码
    #[error("failed to unregister {id}, got {status}")]
    DeregisterFailed { id: String, status: StatusCode },

    /// 配置文件读取或解析失败
    #[error("invalid adapter config: {0}")]
    Config(String),
}

impl RegistryError {
    /// 创建非预期状态码错误
    pub fn unexpected_status(status: StatusCode) -> Self {
        RegistryError::UnexpectedStatus { status }
    }

    /// 创建注销失败错误
    pub fn deregister_failed(id: impl Into<String>, status: StatusCode) -> Self {
        RegistryError::DeregisterFailed {
            id: id.into(),
            status,
        }
    }

    /// 注册中心返回的 HTTP 状态码
    ///
    /// 传输层失败（连接被拒、超时）时没有响应，返回 `None`。
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RegistryError::UnexpectedStatus { status }
            | RegistryError::DeregisterFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 获取错误代码
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::InvalidUri(_) => ErrorCode::InvalidParameter,
            RegistryError::UnsupportedScheme(_) => ErrorCode::OperationNotSupported,
            RegistryError::Encode(_) => ErrorCode::EncodingError,
            RegistryError::Transport(e) if e.is_timeout() => ErrorCode::ConnectionTimeout,
            RegistryError::Transport(_) => ErrorCode::ConnectionFailed,
            RegistryError::UnexpectedStatus { status }
            | RegistryError::DeregisterFailed { status, .. } => match *status {
                StatusCode::NOT_FOUND => ErrorCode::InstanceNotFound,
                StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::BAD_GATEWAY
                | StatusCode::GATEWAY_TIMEOUT => ErrorCode::RegistryUnavailable,
                _ => ErrorCode::UnexpectedStatus,
            },
            RegistryError::Config(_) => ErrorCode::ConfigurationError,
        }
    }

    /// 判断是否为可重试的错误
    pub fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, RegistryError>;
