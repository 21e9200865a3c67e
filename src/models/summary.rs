use serde::{Deserialize, Serialize};
use std::fmt;

/// 模型对整个文件夹的结构化总结
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub main_topics: Vec<String>,
    pub sentiment: String,
}

impl fmt::Display for SummaryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "【总结】")?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "【关键事实】")?;
        for point in &self.key_points {
            writeln!(f, "  ✓ {}", point)?;
        }
        writeln!(f)?;
        let topics: Vec<String> = self.main_topics.iter().map(|t| format!("#{}", t)).collect();
        writeln!(f, "【主题】 {}", topics.join(" "))?;
        write!(f, "【基调】 {}", self.sentiment)
    }
}
