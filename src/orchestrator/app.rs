//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：记录启动信息、创建 `SummaryFlow`
//! 2. **执行请求**：按命令行选择自动扫描或本地文件流程
//! 3. **输出结果**：打印文件列表和总结，可选写入 JSON 文件
//!
//! 不处理任何业务细节，全部委托给 workflow 层

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::utils::logging::{log_file_list, log_startup};
use crate::workflow::{AppState, AppStatus, SummaryFlow};

/// 本地文件流程在没有指定上下文时写进指令的描述
const LOCAL_CONTEXT: &str = "用户手动上传的本地文件";

/// 一次运行的输入
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// 云盘文件夹链接
    pub folder_url: Option<String>,
    /// 本地文件路径
    pub files: Vec<PathBuf>,
    /// 本地文件流程使用的上下文描述
    pub context: Option<String>,
    /// 结果 JSON 的输出路径
    pub output: Option<PathBuf>,
}

/// 应用主结构
pub struct App {
    flow: SummaryFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);
        let flow = SummaryFlow::new(&config).context("无法创建 HTTP 客户端")?;
        Ok(Self { flow })
    }

    /// 运行应用主逻辑
    ///
    /// 最终状态为错误时返回 `Err`，消息即展示给用户的内容
    pub async fn run(&self, request: &RunRequest) -> Result<AppState> {
        let mut state = AppState::new();

        if let Some(url) = &request.folder_url {
            state.set_folder_url(url.clone());
            self.flow.auto_scan(&mut state).await?;
        } else if !request.files.is_empty() {
            state.set_folder_url(
                request
                    .context
                    .clone()
                    .unwrap_or_else(|| LOCAL_CONTEXT.to_string()),
            );
            self.flow.add_local_files(&mut state, &request.files).await?;
            self.flow.run_inference(&mut state).await?;
        } else {
            warn!("⚠️ 没有指定文件夹链接或本地文件，程序结束");
            return Ok(state);
        }

        if !state.files().is_empty() {
            log_file_list(state.files());
        }

        if let AppStatus::Error(message) = state.status() {
            anyhow::bail!("{}", message);
        }

        if let Some(result) = state.summary() {
            println!("{}", result);
            if let Some(path) = &request.output {
                let json = serde_json::to_string_pretty(result)?;
                tokio::fs::write(path, json)
                    .await
                    .with_context(|| format!("无法写入结果文件: {}", path.display()))?;
                info!("结果已保存至: {}", path.display());
            }
        }

        Ok(state)
    }
}
