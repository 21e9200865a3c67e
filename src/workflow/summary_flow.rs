//! 总结流程 - 流程层
//!
//! 核心职责：把用户操作翻译成服务调用，并驱动 `AppState` 迁移
//!
//! 流程：
//! 1. 自动扫描：解析链接 → 获取云盘文件 → 自动分析
//! 2. 本地上传：读取文件 → 追加到列表（不自动分析）
//! 3. 手动分析：对当前列表运行推理

use std::path::Path;
use tracing::{error, info, warn};

use crate::clients::build_http_client;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::{extract_folder_id, FileAcquisition, SummaryService};
use crate::workflow::app_state::{AppEvent, AppState};

/// 文件夹有内容但一个都拿不到时，以及文件夹本身为空时，给用户的提示
pub const NO_FILES_MESSAGE: &str =
    "未能获取到任何文件，请检查文件夹的访问设置，或改用本地上传。";

/// 总结流程
///
/// - 每个方法对应一个用户操作
/// - 操作内部的错误写入状态，不向上传播
/// - 只有 `Busy`（已有操作在进行）会作为 `Err` 返回
pub struct SummaryFlow {
    acquisition: FileAcquisition,
    summary: SummaryService,
}

impl SummaryFlow {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = build_http_client(config)?;
        Ok(Self {
            acquisition: FileAcquisition::new(http.clone(), config),
            summary: SummaryService::new(http, config),
        })
    }

    /// 扫描 `state` 中的文件夹链接，成功后自动开始分析
    pub async fn auto_scan(&self, state: &mut AppState) -> AppResult<()> {
        let Some(folder_id) = extract_folder_id(state.folder_url()) else {
            let err = AppError::InvalidFolderUrl {
                url: state.folder_url().to_string(),
            };
            warn!("{}", err);
            return state.apply(AppEvent::ScanRejected(err.to_string()));
        };

        state.apply(AppEvent::ScanStarted)?;
        info!("🔍 正在扫描文件夹 {}", folder_id);

        match self.acquisition.fetch_folder_files(&folder_id).await {
            Ok(files) if files.is_empty() => {
                warn!("文件夹 {} 中没有可用的文件", folder_id);
                state.apply(AppEvent::ScanFailed(NO_FILES_MESSAGE.to_string()))
            }
            Ok(files) => {
                state.apply(AppEvent::ScanSucceeded(files))?;
                self.run_inference(state).await
            }
            Err(e) => {
                error!("❌ 扫描失败: {}", e);
                state.apply(AppEvent::ScanFailed(e.to_string()))
            }
        }
    }

    /// 读取本地文件并追加到当前列表
    pub async fn add_local_files<P: AsRef<Path>>(&self, state: &mut AppState, paths: &[P]) -> AppResult<()> {
        if paths.is_empty() {
            return Ok(());
        }

        state.apply(AppEvent::LocalReadStarted)?;

        match self.acquisition.from_local_selection(paths).await {
            Ok(files) => {
                info!("✓ 已添加 {} 个本地文件", files.len());
                state.apply(AppEvent::FilesAdded(files))
            }
            Err(e) => {
                error!("❌ 本地文件读取失败: {}", e);
                state.apply(AppEvent::LocalReadFailed(e.to_string()))
            }
        }
    }

    /// 对当前列表运行一次分析，列表为空时什么都不做
    ///
    /// 文件夹链接作为上下文写进指令
    pub async fn run_inference(&self, state: &mut AppState) -> AppResult<()> {
        if state.files().is_empty() {
            return Ok(());
        }

        state.apply(AppEvent::InferenceStarted)?;

        let outcome = self
            .summary
            .summarize(state.files(), state.folder_url())
            .await;

        match outcome {
            Ok(result) => {
                info!("✅ 分析完成");
                state.apply(AppEvent::InferenceSucceeded(result))
            }
            Err(e) => {
                error!("❌ 分析失败: {}", e);
                state.apply(AppEvent::InferenceFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::app_state::AppStatus;

    fn offline_flow() -> SummaryFlow {
        let config = Config {
            api_key: None,
            drive_api_base_url: "http://127.0.0.1:9".to_string(),
            gemini_api_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        SummaryFlow::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_url_sets_error_without_loading() {
        let flow = offline_flow();
        let mut state = AppState::new();
        state.set_folder_url("https://example.com/not-a-folder");

        flow.auto_scan(&mut state).await.unwrap();

        let message = state.error_message().unwrap();
        assert!(message.contains("https://example.com/not-a-folder"));
    }

    #[tokio::test]
    async fn test_missing_key_surfaces_config_error() {
        let flow = offline_flow();
        let mut state = AppState::new();
        state.set_folder_url("https://drive.google.com/drive/folders/abc");

        flow.auto_scan(&mut state).await.unwrap();

        assert!(state.error_message().unwrap().contains("API_KEY"));
    }

    #[tokio::test]
    async fn test_run_inference_on_empty_is_noop() {
        let flow = offline_flow();
        let mut state = AppState::new();

        flow.run_inference(&mut state).await.unwrap();

        assert_eq!(state.status(), &AppStatus::Idle);
    }

    #[tokio::test]
    async fn test_local_files_do_not_trigger_inference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.jpg");
        std::fs::write(&path, [0xFFu8, 0xD8, 0xFF]).unwrap();

        let flow = offline_flow();
        let mut state = AppState::new();
        flow.add_local_files(&mut state, &[&path]).await.unwrap();

        assert_eq!(state.status(), &AppStatus::Idle);
        assert_eq!(state.files().len(), 1);
        assert_eq!(state.files()[0].mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_local_read_failure_sets_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pdf");

        let flow = offline_flow();
        let mut state = AppState::new();
        flow.add_local_files(&mut state, &[&missing]).await.unwrap();

        assert!(state.error_message().unwrap().contains("missing.pdf"));
        assert!(state.files().is_empty());
    }
}
