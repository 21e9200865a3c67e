use crate::error::{AppError, AppResult};

/// 单次推理最多携带的附件数量，超出部分直接丢弃
pub const MAX_INFERENCE_FILES: usize = 15;

/// 推理温度，偏低以保证事实提取的稳定性
pub const TEMPERATURE: f32 = 0.2;

/// 无法识别类型时使用的 MIME
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 云盘与模型共用的 API Key，缺失时所有云端操作都会失败
    pub api_key: Option<String>,
    /// Drive API 根地址
    pub drive_api_base_url: String,
    // --- Gemini 配置 ---
    pub gemini_api_base_url: String,
    pub gemini_model_name: String,
    /// 要求模型输出的语言
    pub output_language: String,
    /// 每个网络请求的超时时间（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            drive_api_base_url: "https://www.googleapis.com/drive/v3".to_string(),
            gemini_api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model_name: "gemini-3-pro-preview".to_string(),
            output_language: "Russian".to_string(),
            request_timeout_secs: 120,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源构建配置，便于测试时不依赖进程环境
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            api_key: lookup("API_KEY")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            drive_api_base_url: lookup("DRIVE_API_BASE_URL").unwrap_or(default.drive_api_base_url),
            gemini_api_base_url: lookup("GEMINI_API_BASE_URL").unwrap_or(default.gemini_api_base_url),
            gemini_model_name: lookup("GEMINI_MODEL_NAME").unwrap_or(default.gemini_model_name),
            output_language: lookup("OUTPUT_LANGUAGE").unwrap_or(default.output_language),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 获取 API Key，未配置时返回配置错误
    ///
    /// 必须在发起任何网络请求之前调用
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(AppError::Config { var_name: "API_KEY" })
    }
}
