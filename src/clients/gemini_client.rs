/// Gemini API 客户端
///
/// 只负责发送 generateContent 请求并取回文本，不关心请求内容
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{GenerateContentRequest, GenerateContentResponse};
use tracing::{debug, warn};

/// Gemini 客户端
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model_name: String,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.gemini_api_base_url.trim_end_matches('/').to_string(),
            model_name: config.gemini_model_name.clone(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 发送一次推理请求
    ///
    /// # 返回
    /// 第一个候选结果的文本；没有候选时返回空字符串，由调用方判定格式
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
        api_key: &str,
    ) -> AppResult<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model_name);
        debug!(
            "正在调用 Gemini API，模型: {}，附件数: {}",
            self.model_name,
            request.inline_data_count()
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let err = AppError::transport("generateContent", e);
                warn!("Gemini API 调用失败: {}", err);
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Gemini API 返回错误状态: {}", status);
            return Err(AppError::from_status("generateContent", status));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::transport("generateContent", e))?;

        debug!("Gemini API 调用成功");
        Ok(body.text())
    }
}
