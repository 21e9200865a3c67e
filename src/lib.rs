//! # Folder Mind
//!
//! 把云盘文件夹（或本地文件）交给多模态模型做 OCR 与总结
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 只负责 HTTP 调用，不做业务判断
//! - `DriveClient` - 文件列表与内容下载
//! - `GeminiClient` - generateContent 推理调用
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `extract_folder_id` - 从链接中解析文件夹 ID
//! - `FileAcquisition` - 获取云盘/本地文件，统一为 `FileRecord`
//! - `SummaryService` - 构造请求并解析结构化总结
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 用户操作到状态迁移的映射
//! - `AppState` - 唯一的状态值，只能通过 `AppEvent` 迁移
//! - `SummaryFlow` - 自动扫描 / 本地上传 / 手动分析
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 命令行的一次完整运行
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{FileRecord, SummaryResult};
pub use orchestrator::{App, RunRequest};
pub use services::{extract_folder_id, FileAcquisition, SummaryService};
pub use workflow::{AppEvent, AppState, AppStatus, SummaryFlow, NO_FILES_MESSAGE};
