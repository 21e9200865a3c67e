//! 应用状态
//!
//! 整个界面只有一个状态值，只能通过 `AppEvent` 迁移

use crate::error::{AppError, AppResult};
use crate::models::{FileRecord, SummaryResult};

/// 当前状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStatus {
    Idle,
    /// 附带当前步骤的描述
    Loading(String),
    Success(SummaryResult),
    Error(String),
}

/// 状态迁移事件
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// 链接无效，扫描未开始
    ScanRejected(String),
    ScanStarted,
    ScanSucceeded(Vec<FileRecord>),
    ScanFailed(String),
    LocalReadStarted,
    FilesAdded(Vec<FileRecord>),
    LocalReadFailed(String),
    FilesCleared,
    InferenceStarted,
    InferenceSucceeded(SummaryResult),
    InferenceFailed(String),
}

/// 进程内唯一的应用状态
#[derive(Debug, Clone)]
pub struct AppState {
    status: AppStatus,
    files: Vec<FileRecord>,
    folder_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            status: AppStatus::Idle,
            files: Vec::new(),
            folder_url: String::new(),
        }
    }

    pub fn status(&self) -> &AppStatus {
        &self.status
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn folder_url(&self) -> &str {
        &self.folder_url
    }

    pub fn set_folder_url(&mut self, url: impl Into<String>) {
        self.folder_url = url.into();
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, AppStatus::Loading(_))
    }

    pub fn summary(&self) -> Option<&SummaryResult> {
        match &self.status {
            AppStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            AppStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// 应用一个事件
    ///
    /// 处于 Loading 时任何"开始"类事件都会被拒绝（`Busy`），状态保持不变
    pub fn apply(&mut self, event: AppEvent) -> AppResult<()> {
        if self.is_loading() && event.is_trigger() {
            return Err(AppError::Busy);
        }

        match event {
            AppEvent::ScanRejected(message) => {
                self.status = AppStatus::Error(message);
            }
            AppEvent::ScanStarted => {
                self.files.clear();
                self.status = AppStatus::Loading("正在云端查找文件...".to_string());
            }
            AppEvent::ScanSucceeded(files) => {
                self.files = files;
                self.status = AppStatus::Idle;
            }
            AppEvent::LocalReadStarted => {
                self.status = AppStatus::Loading("正在处理本地文件...".to_string());
            }
            AppEvent::FilesAdded(files) => {
                self.files.extend(files);
                self.status = AppStatus::Idle;
            }
            AppEvent::FilesCleared => {
                self.files.clear();
            }
            AppEvent::InferenceStarted => {
                self.status = AppStatus::Loading(format!(
                    "正在对 {} 个文件进行 AI 分析...",
                    self.files.len()
                ));
            }
            AppEvent::InferenceSucceeded(result) => {
                self.status = AppStatus::Success(result);
            }
            AppEvent::ScanFailed(message)
            | AppEvent::LocalReadFailed(message)
            | AppEvent::InferenceFailed(message) => {
                self.status = AppStatus::Error(message);
            }
        }

        Ok(())
    }
}

impl AppEvent {
    /// 由用户操作触发的事件（其余是 I/O 完成事件）
    fn is_trigger(&self) -> bool {
        matches!(
            self,
            AppEvent::ScanRejected(_)
                | AppEvent::ScanStarted
                | AppEvent::LocalReadStarted
                | AppEvent::FilesCleared
                | AppEvent::InferenceStarted
        )
    }
}
