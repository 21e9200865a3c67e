use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// 单个文件的内容与元数据
///
/// 无论来自云盘还是本地磁盘，统一用这个结构表示。构造后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub name: String,
    /// base64 编码后的文件内容
    pub data: String,
    pub mime_type: String,
    /// 原始字节数
    pub size: u64,
}

/// 文件大类，仅用于展示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
    Other,
}

impl FileRecord {
    /// 由原始字节构建，内部完成 base64 编码
    pub fn new(name: impl Into<String>, bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
        }
    }

    pub fn kind(&self) -> FileKind {
        if self.mime_type.contains("pdf") {
            FileKind::Pdf
        } else if self.mime_type.starts_with("image/") {
            FileKind::Image
        } else {
            FileKind::Other
        }
    }
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Image => "图片",
            FileKind::Other => "文档",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_encodes_and_measures() {
        let record = FileRecord::new("a.txt", b"hello", "text/plain");
        assert_eq!(record.data, "aGVsbG8=");
        assert_eq!(record.size, 5);
        assert_eq!(record.kind(), FileKind::Other);
    }

    #[test]
    fn test_kind() {
        assert_eq!(FileRecord::new("a.pdf", b"", "application/pdf").kind(), FileKind::Pdf);
        assert_eq!(FileRecord::new("b.png", b"", "image/png").kind(), FileKind::Image);
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = FileRecord::new("b.png", &[0u8, 1, 2], "image/png");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["mimeType"], "image/png");
        assert_eq!(json["size"], 3);
    }
}
