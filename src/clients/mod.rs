pub mod drive_client;
pub mod gemini_client;

pub use drive_client::DriveClient;
pub use gemini_client::GeminiClient;

use crate::config::Config;
use crate::error::AppResult;
use std::time::Duration;

/// 构建所有客户端共用的 HTTP 客户端，超时取自配置
pub fn build_http_client(config: &Config) -> AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;
    Ok(client)
}
