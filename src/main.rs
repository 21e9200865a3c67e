use anyhow::Result;
use clap::Parser;
use folder_mind::utils::logging;
use folder_mind::{App, Config, RunRequest};
use std::path::PathBuf;

/// 文件夹智能总结：OCR + 多模态模型
#[derive(Debug, Parser)]
#[command(name = "folder-mind", version)]
struct Cli {
    /// Google Drive 文件夹链接
    #[arg(long, conflicts_with = "file")]
    folder: Option<String>,

    /// 本地文件（可多次指定）
    #[arg(long)]
    file: Vec<PathBuf>,

    /// 本地文件分析时写进指令的上下文
    #[arg(long, requires = "file")]
    context: Option<String>,

    /// 把结果以 JSON 格式保存到该路径
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    let request = RunRequest {
        folder_url: cli.folder,
        files: cli.file,
        context: cli.context,
        output: cli.output,
    };

    // 初始化并运行应用
    App::initialize(config)?.run(&request).await?;

    Ok(())
}
