//! 总结服务 - 业务能力层
//!
//! 只负责"把一批文件交给模型并拿回结构化总结"，不关心文件从哪里来
//!
//! ## 技术栈
//! - 直接调用 Gemini generateContent 接口（reqwest）
//! - 通过 `responseSchema` 约束输出结构

use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};

use crate::clients::{build_http_client, GeminiClient};
use crate::config::{Config, MAX_INFERENCE_FILES, TEMPERATURE};
use crate::error::{AppError, AppResult};
use crate::models::gemini::{Blob, Content, GenerationConfig};
use crate::models::{FileRecord, GenerateContentRequest, Part, SummaryResult};

/// 总结服务
///
/// 职责：
/// - 截断输入文件（最多 `MAX_INFERENCE_FILES` 个）
/// - 构造带输出结构约束的推理请求
/// - 解析模型返回的 JSON
/// - 不重试，失败直接返回给调用方
pub struct SummaryService {
    gemini: GeminiClient,
    config: Config,
}

impl SummaryService {
    /// 使用按配置构建的 HTTP 客户端（带超时）
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(build_http_client(config)?, config))
    }

    /// 使用外部传入的 HTTP 客户端
    ///
    /// 超时由 `http` 自身决定，`config.request_timeout_secs` 不会生效
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            gemini: GeminiClient::new(http, config),
            config: config.clone(),
        }
    }

    /// 对一批文件生成结构化总结
    ///
    /// # 参数
    /// - `files`: 待分析的文件，超过上限的部分会被忽略
    /// - `context`: 写进指令里的上下文（通常是文件夹链接）
    pub async fn summarize(&self, files: &[FileRecord], context: &str) -> AppResult<SummaryResult> {
        let api_key = self.config.require_api_key()?;

        if files.len() > MAX_INFERENCE_FILES {
            info!(
                "文件数 {} 超过上限，只分析前 {} 个",
                files.len(),
                MAX_INFERENCE_FILES
            );
        }

        let request = build_request(files, context, &self.config.output_language);
        info!(
            "🤖 开始分析 {} 个文件 (模型: {})",
            request.inline_data_count(),
            self.gemini.model_name()
        );

        let text = self.gemini.generate_content(&request, api_key).await?;
        parse_summary(&text)
    }
}

/// 构造推理请求：一段指令文本，后接每个文件的内联附件
pub fn build_request(files: &[FileRecord], context: &str, output_language: &str) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(MAX_INFERENCE_FILES + 1);
    parts.push(Part::Text(build_instruction(context, output_language)));
    parts.extend(files.iter().take(MAX_INFERENCE_FILES).map(|file| {
        Part::InlineData(Blob {
            mime_type: file.mime_type.clone(),
            data: file.data.clone(),
        })
    }));

    GenerateContentRequest {
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            response_mime_type: "application/json".to_string(),
            response_schema: summary_schema(),
        },
    }
}

fn build_instruction(context: &str, output_language: &str) -> String {
    format!(
        r#"你是一名资深分析师。请分析这个文件夹的内容：{}

你会收到若干文件（图片、PDF、文档）。
要求：
1. 对所有图片（JPG、PNG、WEBP）进行 OCR 文字识别。
2. 阅读所有 PDF 及文档中的文字。
3. 把找到的全部信息合并成一份结构化的总结。
4. 找出不同文件之间的关联。

请严格使用 {} 回答。"#,
        context, output_language
    )
}

/// 模型输出必须满足的结构
pub fn summary_schema() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "对整个文件夹的深入总结。"
            },
            "keyPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "从文档中提取的主要事实和数据。"
            },
            "mainTopics": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "关键主题。"
            },
            "sentiment": {
                "type": "STRING",
                "description": "信息的整体基调。"
            }
        },
        "required": ["summary", "keyPoints", "mainTopics", "sentiment"]
    })
}

/// 解析模型返回的文本
///
/// 非 JSON 或缺少任一必填字段都视为格式错误，不会返回部分结果
pub fn parse_summary(text: &str) -> AppResult<SummaryResult> {
    serde_json::from_str::<SummaryResult>(text.trim()).map_err(|e| {
        warn!("模型返回的数据无法解析: {}", e);
        debug!("模型原始输出: {}", text);
        AppError::malformed(e.to_string(), text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(n: usize) -> Vec<FileRecord> {
        (0..n)
            .map(|i| FileRecord::new(format!("f{i}.png"), &[i as u8], "image/png"))
            .collect()
    }

    #[test]
    fn test_request_caps_attachments() {
        let request = build_request(&files(20), "ctx", "Russian");
        assert_eq!(request.inline_data_count(), MAX_INFERENCE_FILES);

        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), MAX_INFERENCE_FILES + 1);
        // 被截断的是末尾的文件
        let last = FileRecord::new("f14.png", &[14u8], "image/png");
        assert_eq!(
            parts[MAX_INFERENCE_FILES],
            Part::InlineData(Blob {
                mime_type: "image/png".to_string(),
                data: last.data,
            })
        );
    }

    #[test]
    fn test_request_layout_under_cap() {
        let request = build_request(&files(3), "https://drive.test/folders/abc", "English");
        let parts = &request.contents[0].parts;
        assert_eq!(request.inline_data_count(), 3);
        match &parts[0] {
            Part::Text(text) => {
                assert!(text.contains("https://drive.test/folders/abc"));
                assert!(text.contains("English"));
            }
            other => panic!("first part should be text, got {other:?}"),
        }
        assert!(parts[1..].iter().all(|p| matches!(p, Part::InlineData(_))));
    }

    #[test]
    fn test_generation_config() {
        let request = build_request(&[], "", "Russian");
        let value = serde_json::to_value(&request).unwrap();
        let config = &value["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert!((config["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
        assert_eq!(
            config["responseSchema"]["required"],
            json!(["summary", "keyPoints", "mainTopics", "sentiment"])
        );
    }

    #[test]
    fn test_parse_exact_schema() {
        let result = parse_summary(
            r#"{"summary":"X","keyPoints":["a"],"mainTopics":["b"],"sentiment":"neutral"}"#,
        )
        .unwrap();
        assert_eq!(result.summary, "X");
        assert_eq!(result.key_points, vec!["a"]);
        assert_eq!(result.main_topics, vec!["b"]);
        assert_eq!(result.sentiment, "neutral");
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_summary(r#"{"summary":"X","keyPoints":["a"],"mainTopics":["b"]}"#).unwrap_err();
        match err {
            AppError::MalformedResponse { reason, raw } => {
                assert!(reason.contains("sentiment"));
                assert!(raw.contains("\"summary\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_json_and_empty() {
        assert!(matches!(
            parse_summary("Sorry, I cannot help."),
            Err(AppError::MalformedResponse { .. })
        ));
        assert!(matches!(parse_summary(""), Err(AppError::MalformedResponse { .. })));
        assert!(matches!(parse_summary("{}"), Err(AppError::MalformedResponse { .. })));
    }
}
