use thiserror::Error;

/// 应用程序错误类型
///
/// `Display` 的内容就是展示给用户的那一条消息
#[derive(Debug, Error)]
pub enum AppError {
    /// 缺少凭据，需要运维介入
    #[error("配置错误: 环境变量 {var_name} 未设置，无法访问云端服务")]
    Config { var_name: &'static str },

    /// 授权被拒绝或配额耗尽
    #[error("访问被拒绝或 API 配额已用尽 ({endpoint}, HTTP {status})，请检查文件夹的共享设置")]
    Access { endpoint: String, status: u16 },

    /// 网络或 HTTP 层失败，包含服务端的状态描述
    #[error("网络请求失败 ({endpoint}): {status_text}")]
    Transport { endpoint: String, status_text: String },

    /// 列表成功，但所有文件都下载失败
    #[error("找到 {listed} 个文件，但全部无法直接下载，请改用本地上传")]
    BlockedDownloads { listed: usize },

    /// 本地文件读取失败
    #[error("无法读取本地文件 {path}: {source}")]
    LocalRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 模型输出不符合约定的结构
    ///
    /// `raw` 仅用于排查问题，不会出现在 `Display` 中
    #[error("模型返回的数据格式不正确 ({reason})，请重试")]
    MalformedResponse { reason: String, raw: String },

    /// 已有操作在进行中
    #[error("已有操作正在进行，请等待其完成")]
    Busy,

    /// 无法从链接中解析出文件夹 ID
    #[error("无效的 Google Drive 文件夹链接: {url}")]
    InvalidFolderUrl { url: String },
}

// ========== 从常见错误类型转换 ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::transport("http", err)
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建网络请求错误
    ///
    /// 去掉错误中的 URL，避免把查询参数里的 API Key 带进消息
    pub fn transport(endpoint: impl Into<String>, err: reqwest::Error) -> Self {
        let status_text = if err.is_timeout() {
            "请求超时".to_string()
        } else {
            err.without_url().to_string()
        };
        AppError::Transport {
            endpoint: endpoint.into(),
            status_text,
        }
    }

    /// 根据非成功的 HTTP 状态码创建错误
    ///
    /// 401、403 与 429 视为授权/配额问题，其余统一归为传输错误
    pub fn from_status(endpoint: impl Into<String>, status: reqwest::StatusCode) -> Self {
        let endpoint = endpoint.into();
        match status {
            reqwest::StatusCode::UNAUTHORIZED
            | reqwest::StatusCode::FORBIDDEN
            | reqwest::StatusCode::TOO_MANY_REQUESTS => {
                AppError::Access {
                    endpoint,
                    status: status.as_u16(),
                }
            }
            _ => AppError::Transport {
                endpoint,
                status_text: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_u16().to_string()),
            },
        }
    }

    /// 创建本地文件读取错误
    pub fn local_read(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::LocalRead {
            path: path.into(),
            source,
        }
    }

    /// 创建模型输出格式错误
    pub fn malformed(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        AppError::MalformedResponse {
            reason: reason.into(),
            raw: raw.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
