use serde::{Deserialize, Serialize};

/// Drive 文件列表中的一项（只请求了 id/name/mimeType）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
}

/// `files.list` 的响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriveFileList {
    /// 没有子文件时服务端可能不返回该字段
    #[serde(default)]
    pub files: Vec<DriveFile>,
}
