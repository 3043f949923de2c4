//! 校验错误分类
//!
//! 评分服务对提交的作文做服务端校验，失败时返回一个错误标签。
//! 客户端只负责把标签精确映射为固定的用户提示，绝不自行推断。

use thiserror::Error;

/// 服务端校验错误
///
/// 每个变体对应一个固定的用户提示文案，由 `error` 标签精确匹配产生。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 提交的作文为空
    #[error("Please enter some text before evaluating.")]
    Empty,
    /// 不含任何字母字符
    #[error("Invalid entry. Please enter meaningful alphabetic text.")]
    Invalid,
    /// 少于 50 个单词
    #[error("Your essay is too short. Please write at least 50–100 words.")]
    TooShort,
}

impl ValidationError {
    /// 从服务端错误标签解析（精确匹配）
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "empty" => Some(ValidationError::Empty),
            "invalid" => Some(ValidationError::Invalid),
            "short" => Some(ValidationError::TooShort),
            _ => None,
        }
    }

    /// 获取服务端标签
    pub fn tag(self) -> &'static str {
        match self {
            ValidationError::Empty => "empty",
            ValidationError::Invalid => "invalid",
            ValidationError::TooShort => "short",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_exact_match() {
        assert_eq!(ValidationError::from_tag("empty"), Some(ValidationError::Empty));
        assert_eq!(ValidationError::from_tag("invalid"), Some(ValidationError::Invalid));
        assert_eq!(ValidationError::from_tag("short"), Some(ValidationError::TooShort));
    }

    #[test]
    fn test_from_tag_unknown() {
        // 未知标签不映射到任何变体
        assert_eq!(ValidationError::from_tag("timeout"), None);
        assert_eq!(ValidationError::from_tag("EMPTY"), None);
        assert_eq!(ValidationError::from_tag(""), None);
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "Please enter some text before evaluating."
        );
        assert_eq!(
            ValidationError::Invalid.to_string(),
            "Invalid entry. Please enter meaningful alphabetic text."
        );
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Your essay is too short. Please write at least 50–100 words."
        );
    }

    #[test]
    fn test_tag_round_trip() {
        for err in [ValidationError::Empty, ValidationError::Invalid, ValidationError::TooShort] {
            assert_eq!(ValidationError::from_tag(err.tag()), Some(err));
        }
    }
}
