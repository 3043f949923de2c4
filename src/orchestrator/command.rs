//! 会话命令解析
//!
//! 输入行以 `:` 开头视为命令，其余原样追加到草稿

use std::path::PathBuf;

/// 会话命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 追加一行草稿文本
    Append(String),
    /// 提交作文评分
    Submit,
    /// 上传文件替换草稿（无参数时不做任何事）
    Upload(Option<PathBuf>),
    /// 导出报告（格式参数可省略）
    Download(Option<String>),
    /// 显示当前草稿与结果
    Show,
    /// 展开/收起反馈列表
    ToggleFeedback,
    /// 清空草稿
    Clear,
    /// 切换主题
    Theme,
    /// About 页面
    About,
    /// Goal 页面
    Goal,
    /// 命令帮助
    Help,
    /// 退出会话
    Quit,
    /// 无法识别的命令
    Unknown(String),
}

impl Command {
    /// 解析一行输入
    ///
    /// 命令关键字后的剩余部分作为参数（去除首尾空白）
    pub fn parse(line: &str) -> Command {
        let trimmed = line.trim();
        if !trimmed.starts_with(':') {
            return Command::Append(line.to_string());
        }

        let mut parts = trimmed[1..].splitn(2, char::is_whitespace);
        let word = parts.next().unwrap_or("");
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        match word {
            "submit" => Command::Submit,
            "upload" => Command::Upload(arg.map(PathBuf::from)),
            "download" => Command::Download(arg),
            "show" => Command::Show,
            "feedback" => Command::ToggleFeedback,
            "clear" => Command::Clear,
            "theme" => Command::Theme,
            "about" => Command::About,
            "goal" => Command::Goal,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text_appends() {
        assert_eq!(
            Command::parse("This is my essay."),
            Command::Append("This is my essay.".to_string())
        );
        // 空行作为段落分隔，同样追加
        assert_eq!(Command::parse(""), Command::Append("".to_string()));
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Command::parse(":submit"), Command::Submit);
        assert_eq!(Command::parse(":show"), Command::Show);
        assert_eq!(Command::parse(":feedback"), Command::ToggleFeedback);
        assert_eq!(Command::parse(":theme"), Command::Theme);
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse(":exit"), Command::Quit);
        // 前后空白不影响识别
        assert_eq!(Command::parse("  :submit  "), Command::Submit);
    }

    #[test]
    fn test_parse_upload_with_and_without_path() {
        assert_eq!(Command::parse(":upload"), Command::Upload(None));
        assert_eq!(
            Command::parse(":upload /tmp/essay.docx"),
            Command::Upload(Some(PathBuf::from("/tmp/essay.docx")))
        );
        assert_eq!(
            Command::parse(":upload   /tmp/my essay.docx  "),
            Command::Upload(Some(PathBuf::from("/tmp/my essay.docx")))
        );
    }

    #[test]
    fn test_parse_download_formats() {
        assert_eq!(Command::parse(":download"), Command::Download(None));
        assert_eq!(
            Command::parse(":download pdf"),
            Command::Download(Some("pdf".to_string()))
        );
        assert_eq!(
            Command::parse(":download PDF"),
            Command::Download(Some("PDF".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse(":frobnicate"),
            Command::Unknown("frobnicate".to_string())
        );
        // 命令大小写敏感
        assert_eq!(
            Command::parse(":SUBMIT"),
            Command::Unknown("SUBMIT".to_string())
        );
    }
}
