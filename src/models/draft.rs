//! 作文草稿模型
//!
//! 职责：持有用户正在编辑的作文文本，在每次变更后强制执行单词数上限

/// 作文允许的最大单词数
pub const WORD_LIMIT: usize = 500;

/// 一次文本变更的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// 变更后仍在单词上限以内
    Accepted,
    /// 超出上限，文本已被截断到前 500 个单词
    Truncated,
}

/// 作文草稿
///
/// 所有变更入口（追加、整体替换）在写入后立即检查单词数，
/// 超限时只保留前 `WORD_LIMIT` 个单词并用单个空格重新拼接。
#[derive(Debug, Clone, Default)]
pub struct EssayDraft {
    text: String,
}

impl EssayDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取原始文本（未 trim）
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 获取去除首尾空白后的文本
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// 原始文本是否为空字符串
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// trim 后是否为空（纯空白也算空）
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// 当前单词数（按空白分割）
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// 追加一行文本
    ///
    /// # 返回
    /// 变更结果：是否因超出单词上限被截断
    pub fn append_line(&mut self, line: &str) -> MutationOutcome {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
        self.clamp_to_limit()
    }

    /// 整体替换文本（文件上传成功后使用）
    pub fn replace(&mut self, text: String) -> MutationOutcome {
        self.text = text;
        self.clamp_to_limit()
    }

    /// 清空草稿
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// 超限时截断到前 500 个单词，单词间用单个空格重新拼接
    fn clamp_to_limit(&mut self) -> MutationOutcome {
        let words: Vec<&str> = self.text.split_whitespace().collect();
        if words.len() <= WORD_LIMIT {
            return MutationOutcome::Accepted;
        }
        self.text = words[..WORD_LIMIT].join(" ");
        MutationOutcome::Truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_within_limit() {
        let mut draft = EssayDraft::new();
        assert_eq!(draft.append_line("hello world"), MutationOutcome::Accepted);
        assert_eq!(draft.word_count(), 2);
        assert_eq!(draft.text(), "hello world");
    }

    #[test]
    fn test_append_joins_with_newline() {
        let mut draft = EssayDraft::new();
        draft.append_line("first line");
        draft.append_line("second line");
        assert_eq!(draft.text(), "first line\nsecond line");
    }

    #[test]
    fn test_truncate_over_limit() {
        let mut draft = EssayDraft::new();
        let long_text = vec!["word"; WORD_LIMIT + 20].join(" ");
        assert_eq!(draft.replace(long_text), MutationOutcome::Truncated);
        assert_eq!(draft.word_count(), WORD_LIMIT);
    }

    #[test]
    fn test_truncate_rejoins_with_single_spaces() {
        let mut draft = EssayDraft::new();
        // 多余的空白在截断后不保留
        let long_text = vec!["word"; WORD_LIMIT + 1].join("\n\n  ");
        draft.replace(long_text);
        assert!(!draft.text().contains('\n'));
        assert_eq!(draft.text(), vec!["word"; WORD_LIMIT].join(" "));
    }

    #[test]
    fn test_exactly_at_limit_not_truncated() {
        let mut draft = EssayDraft::new();
        let text = vec!["word"; WORD_LIMIT].join(" ");
        assert_eq!(draft.replace(text.clone()), MutationOutcome::Accepted);
        assert_eq!(draft.text(), text);
    }

    #[test]
    fn test_blank_vs_empty() {
        let mut draft = EssayDraft::new();
        assert!(draft.is_empty());
        assert!(draft.is_blank());

        draft.replace("   \n\t  ".to_string());
        assert!(!draft.is_empty());
        assert!(draft.is_blank());
        assert_eq!(draft.word_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut draft = EssayDraft::new();
        draft.append_line("some essay text");
        draft.clear();
        assert!(draft.is_empty());
    }
}
