//! 报告导出模型

/// 报告导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Word 文档
    Docx,
    /// PDF 文档
    Pdf,
}

impl ReportFormat {
    /// 获取格式标识（用于 query 参数与文件扩展名）
    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Docx => "docx",
            ReportFormat::Pdf => "pdf",
        }
    }

    /// 尝试从字符串解析格式（大小写不敏感）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "docx" => Some(ReportFormat::Docx),
            "pdf" => Some(ReportFormat::Pdf),
            _ => None,
        }
    }

    /// 导出文件名
    pub fn artifact_name(self) -> String {
        format!("essay_report.{}", self.name())
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 报告导出请求携带的会话快照
///
/// 五个字段对应 `/download` 接口的五个表单字段，
/// `highlighted` 保留服务端返回的原始标记文本。
#[derive(Debug, Clone, Default)]
pub struct ReportBundle {
    pub essay: String,
    pub score: String,
    pub feedback: String,
    pub highlighted: String,
    pub legend: String,
}
