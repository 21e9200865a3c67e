//! 文件夹链接解析
//!
//! 纯函数，不做任何 I/O

use once_cell::sync::Lazy;
use regex::Regex;

/// 按优先级排列：先匹配路径段 `folders/<id>`，再匹配查询参数 `id=<id>`
static FOLDER_ID_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"folders/([A-Za-z0-9_-]+)").expect("folder path pattern"),
        Regex::new(r"id=([A-Za-z0-9_-]+)").expect("folder id query pattern"),
    ]
});

/// 从分享链接中提取文件夹 ID
///
/// 两种形式都不匹配时返回 `None`
pub fn extract_folder_id(url: &str) -> Option<String> {
    FOLDER_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_path() {
        assert_eq!(
            extract_folder_id(
                "https://drive.google.com/drive/folders/1x6EKNkVw6PlFVTr6cGrsVscmRuwqGrXd?usp=sharing"
            )
            .as_deref(),
            Some("1x6EKNkVw6PlFVTr6cGrsVscmRuwqGrXd")
        );
    }

    #[test]
    fn test_query_param() {
        assert_eq!(
            extract_folder_id("https://drive.google.com/open?id=abc_DEF-123").as_deref(),
            Some("abc_DEF-123")
        );
    }

    #[test]
    fn test_path_takes_precedence() {
        assert_eq!(
            extract_folder_id("https://x.test/open?id=fromquery&next=/folders/frompath").as_deref(),
            Some("frompath")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_folder_id("https://drive.google.com/drive/my-drive"), None);
        assert_eq!(extract_folder_id(""), None);
        assert_eq!(extract_folder_id("folders/"), None);
    }

    #[test]
    fn test_id_stops_at_disallowed_chars() {
        assert_eq!(
            extract_folder_id("folders/abc.def").as_deref(),
            Some("abc")
        );
    }
}
