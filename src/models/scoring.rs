use serde::Deserialize;

/// `/predict` 接口响应
///
/// 服务端要么返回 `error` 标签，要么返回完整的评分字段，
/// 两种形态共用一个结构，由调用方根据 `error` 是否存在分流。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: Option<String>,
    #[serde(default)]
    pub feedback: Option<Vec<String>>,
    #[serde(default)]
    pub highlighted: Option<String>,
}

/// `/upload` 接口响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// 评分结果
///
/// 从一次成功的 `/predict` 响应构造，构造后不再变更。
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResult {
    /// 分数文本（如 "7.5/10"）
    pub score: String,
    /// 按服务端顺序排列的反馈条目
    pub feedback: Vec<String>,
    /// 带红绿标注的作文标记文本，原样保存
    pub highlighted: String,
}

// Helper function to deserialize score as either string or number
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct ScoreVisitor;

    impl<'de> Visitor<'de> for ScoreVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or number representing a score")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(ScoreVisitor)
        }
    }

    deserializer.deserialize_option(ScoreVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let json = r#"{"score": "7.5/10", "feedback": ["Excellent grammar usage."], "highlighted": "<span>ok</span>"}"#;
        let resp: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(resp.error.is_none());
        assert_eq!(resp.score.as_deref(), Some("7.5/10"));
        assert_eq!(resp.feedback.as_ref().unwrap().len(), 1);
        assert_eq!(resp.highlighted.as_deref(), Some("<span>ok</span>"));
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{"error": "short"}"#;
        let resp: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error.as_deref(), Some("short"));
        assert!(resp.score.is_none());
        assert!(resp.feedback.is_none());
    }

    #[test]
    fn test_score_as_number() {
        // 服务端可能返回数字而非字符串
        let json = r#"{"score": 4, "feedback": [], "highlighted": ""}"#;
        let resp: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.score.as_deref(), Some("4"));

        let json = r#"{"score": 8.5, "feedback": [], "highlighted": ""}"#;
        let resp: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.score.as_deref(), Some("8.5"));
    }

    #[test]
    fn test_score_null() {
        let json = r#"{"score": null}"#;
        let resp: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(resp.score.is_none());
    }

    #[test]
    fn test_parse_upload_responses() {
        let json = r#"{"content": "essay text from file"}"#;
        let resp: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.content.as_deref(), Some("essay text from file"));
        assert!(resp.error.is_none());

        let json = r#"{"error": "Failed to process the document."}"#;
        let resp: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error.as_deref(), Some("Failed to process the document."));
        assert!(resp.content.is_none());
    }
}
