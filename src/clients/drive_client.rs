/// Google Drive API 客户端
///
/// 封装文件列表和内容下载两个调用
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{DriveFile, DriveFileList};
use tracing::debug;

const LIST_FIELDS: &str = "files(id,name,mimeType)";

/// Drive 客户端
pub struct DriveClient {
    http: reqwest::Client,
    base_url: String,
}

impl DriveClient {
    /// 创建新的 Drive 客户端
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.drive_api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 列出文件夹下未被删除的文件
    ///
    /// # 参数
    /// - `folder_id`: 文件夹 ID
    /// - `api_key`: API Key
    ///
    /// # 返回
    /// 按服务端返回顺序排列的文件列表，可能为空
    pub async fn list_children(&self, folder_id: &str, api_key: &str) -> AppResult<Vec<DriveFile>> {
        let url = format!("{}/files", self.base_url);
        let query = folder_query(folder_id);
        debug!("正在获取文件夹 {} 的文件列表", folder_id);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query.as_str()), ("fields", LIST_FIELDS), ("key", api_key)])
            .send()
            .await
            .map_err(|e| AppError::transport("files.list", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::from_status("files.list", status));
        }

        let list: DriveFileList = response
            .json()
            .await
            .map_err(|e| AppError::transport("files.list", e))?;

        debug!("文件夹 {} 共有 {} 个文件", folder_id, list.files.len());
        Ok(list.files)
    }

    /// 下载单个文件的原始字节
    pub async fn download(&self, file_id: &str, api_key: &str) -> AppResult<Vec<u8>> {
        let url = format!("{}/files/{}", self.base_url, file_id);

        let response = self
            .http
            .get(&url)
            .query(&[("alt", "media"), ("key", api_key)])
            .send()
            .await
            .map_err(|e| AppError::transport("files.get", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::from_status("files.get", status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::transport("files.get", e))?;

        Ok(bytes.to_vec())
    }
}

/// 构造 `files.list` 的查询表达式
///
/// ID 放在单引号字符串里，`\` 和 `'` 需要转义
fn folder_query(folder_id: &str) -> String {
    let escaped = folder_id.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}' in parents and trashed=false", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_query_plain_id() {
        assert_eq!(
            folder_query("1x6EKNkVw6PlFVTr6cGrsVscmRuwqGrXd"),
            "'1x6EKNkVw6PlFVTr6cGrsVscmRuwqGrXd' in parents and trashed=false"
        );
    }

    #[test]
    fn test_folder_query_escapes_quotes() {
        assert_eq!(
            folder_query("x' or name contains 'a"),
            r"'x\' or name contains \'a' in parents and trashed=false"
        );
        assert_eq!(folder_query(r"a\b"), r"'a\\b' in parents and trashed=false");
    }
}
