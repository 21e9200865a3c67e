//! 文件获取服务 - 业务能力层
//!
//! 负责把云盘文件夹或本地文件统一转换为 `FileRecord` 列表
//!
//! ## 失败策略
//! - 云盘：单个文件下载失败只记录日志并跳过，全部失败时才报错
//! - 本地：任意一个文件读取失败即整体失败（fail-fast）

use futures::stream::{self, StreamExt};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::clients::{build_http_client, DriveClient};
use crate::config::{Config, FALLBACK_MIME_TYPE};
use crate::error::{AppError, AppResult};
use crate::models::FileRecord;

/// 逐个下载的累计结果
#[derive(Debug, Default)]
struct DownloadTally {
    records: Vec<FileRecord>,
    failures: usize,
}

/// 文件获取服务
pub struct FileAcquisition {
    drive: DriveClient,
    config: Config,
}

impl FileAcquisition {
    /// 使用按配置构建的 HTTP 客户端（带超时）
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(build_http_client(config)?, config))
    }

    /// 使用外部传入的 HTTP 客户端
    ///
    /// 超时由 `http` 自身决定，`config.request_timeout_secs` 不会生效
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            drive: DriveClient::new(http, config),
            config: config.clone(),
        }
    }

    /// 获取云盘文件夹中的所有文件
    ///
    /// # 返回
    /// - 文件夹为空时返回空列表
    /// - 有文件但全部下载失败时返回 `BlockedDownloads`
    /// - 否则返回成功下载的文件，顺序与列表一致
    pub async fn fetch_folder_files(&self, folder_id: &str) -> AppResult<Vec<FileRecord>> {
        let api_key = self.config.require_api_key()?;

        let listing = self.drive.list_children(folder_id, api_key).await?;
        if listing.is_empty() {
            info!("文件夹 {} 中没有文件", folder_id);
            return Ok(Vec::new());
        }

        let listed = listing.len();
        info!("✓ 找到 {} 个文件，开始逐个下载", listed);

        let drive = &self.drive;
        let tally = stream::iter(listing)
            .fold(DownloadTally::default(), |mut tally, file| async move {
                match drive.download(&file.id, api_key).await {
                    Ok(bytes) => {
                        debug!("已下载 {} ({} 字节)", file.name, bytes.len());
                        tally
                            .records
                            .push(FileRecord::new(file.name, &bytes, file.mime_type));
                    }
                    Err(e) => {
                        warn!("⚠️ 文件 {} 无法直接下载，已跳过: {}", file.name, e);
                        tally.failures += 1;
                    }
                }
                tally
            })
            .await;

        if tally.records.is_empty() {
            return Err(AppError::BlockedDownloads { listed });
        }

        info!(
            "✓ 下载完成: 成功 {}/{}，失败 {}",
            tally.records.len(),
            listed,
            tally.failures
        );
        Ok(tally.records)
    }

    /// 读取本地选择的文件
    ///
    /// 任意一个文件读取失败都会让整批失败
    pub async fn from_local_selection<P: AsRef<Path>>(&self, paths: &[P]) -> AppResult<Vec<FileRecord>> {
        read_local_files(paths).await
    }
}

/// 读取本地文件并转为 `FileRecord`，MIME 类型按扩展名推断
pub async fn read_local_files<P: AsRef<Path>>(paths: &[P]) -> AppResult<Vec<FileRecord>> {
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::local_read(path.display().to_string(), e))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string());

        debug!("已读取本地文件 {} ({}, {} 字节)", name, mime_type, bytes.len());
        records.push(FileRecord::new(name, &bytes, mime_type));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_local_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("a.pdf");
        let unknown = dir.path().join("notes.zzunknown");
        std::fs::File::create(&pdf).unwrap().write_all(b"%PDF-1.4").unwrap();
        std::fs::File::create(&unknown).unwrap().write_all(b"hi").unwrap();

        let records = tokio_test::block_on(read_local_files(&[&pdf, &unknown])).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a.pdf");
        assert_eq!(records[0].mime_type, "application/pdf");
        assert_eq!(records[0].size, 8);
        assert_eq!(records[1].name, "notes.zzunknown");
        assert_eq!(records[1].mime_type, FALLBACK_MIME_TYPE);
    }

    #[test]
    fn test_read_local_files_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("b.png");
        std::fs::write(&good, [0u8, 1, 2]).unwrap();
        let missing = dir.path().join("missing.png");

        let err = tokio_test::block_on(read_local_files(&[&good, &missing])).unwrap_err();
        match err {
            AppError::LocalRead { path, .. } => assert!(path.ends_with("missing.png")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_requires_api_key_before_network() {
        // 指向不可达地址，如果真的发起请求会得到传输错误而不是配置错误
        let config = Config {
            api_key: None,
            drive_api_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        let service = FileAcquisition::new(reqwest::Client::new(), &config);

        let err = service.fetch_folder_files("abc").await.unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
