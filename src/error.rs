use std::path::PathBuf;

use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// 远端调用失败（网络、服务端拒绝、响应格式错误）
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("request failed")]
    Transport(#[source] Box<ureq::Transport>),
    /// 非 2xx 响应
    #[error("remote error status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response json")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode request json")]
    Encode(#[source] serde_json::Error),
    #[error("failed to read response body")]
    Body(#[source] std::io::Error),
}

/// 配置文件相关错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid base url {url:?}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base url {0:?} must use http or https")]
    Scheme(String),
}
