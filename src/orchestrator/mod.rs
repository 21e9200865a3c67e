//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (命令行一次运行)
//!     ↓
//! workflow::SummaryFlow (用户操作 → 状态迁移)
//!     ↓
//! services (能力层：resolve / acquire / summarize)
//!     ↓
//! clients (Drive / Gemini HTTP 调用)
//! ```

pub mod app;

pub use app::{App, RunRequest};
