/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::FileRecord;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则按 `verbose` 选择 debug 或 info。重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🤖 模型: {}", config.gemini_model_name);
    info!("🌐 输出语言: {}", config.output_language);
    if config.api_key.is_none() {
        info!("⚠️ 未设置 API_KEY，云端操作将不可用");
    }
    info!("{}", "=".repeat(60));
}

/// 输出当前文件列表
pub fn log_file_list(files: &[FileRecord]) {
    info!("📋 当前文件 ({} 个):", files.len());
    for (i, file) in files.iter().enumerate() {
        info!(
            "  {}. [{}] {} ({})",
            i + 1,
            file.kind().label(),
            truncate_text(&file.name, 60),
            format_size(file.size)
        );
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

/// 把字节数格式化为便于阅读的大小
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
