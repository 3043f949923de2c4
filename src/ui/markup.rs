//! 标注文本着色
//!
//! 服务端返回的作文标注是一串红/绿 `<span>` 标记。
//! 终端渲染时把识别出的标记转成对应颜色，标记外的文本原样输出。
//! 标注本身始终原样保存，着色只发生在打印这一步。

use anyhow::Result;
use console::style;
use regex::Regex;

/// 把服务端标注文本渲染为带颜色的终端文本
///
/// # 参数
/// - `markup`: 服务端返回的原始标注文本
///
/// # 返回
/// 返回已着色的终端文本：红/绿标记被替换为对应颜色的内文，
/// 其余内容（包括无法识别的标签）不做解释，原样保留
pub fn paint_highlighted(markup: &str) -> Result<String> {
    let re = Regex::new(r#"<span style="color:(red|green);">([^<]*)</span>"#)?;

    let mut painted = String::new();
    let mut last_end = 0;

    for cap in re.captures_iter(markup) {
        let whole = match cap.get(0) {
            Some(m) => m,
            None => continue,
        };
        painted.push_str(&markup[last_end..whole.start()]);

        let color = cap.get(1).map(|m| m.as_str()).unwrap_or("");
        let text = cap.get(2).map(|m| m.as_str()).unwrap_or("");
        if color == "red" {
            painted.push_str(&style(text).red().to_string());
        } else {
            painted.push_str(&style(text).green().to_string());
        }

        last_end = whole.end();
    }
    painted.push_str(&markup[last_end..]);

    Ok(painted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_spans_stripped() {
        let markup = r#"<span style="color:red;">teh</span><span style="color:green;"> rest is fine</span>"#;
        let painted = paint_highlighted(markup).unwrap();
        assert!(!painted.contains("<span"));
        assert!(!painted.contains("</span>"));
        assert!(painted.contains("teh"));
        assert!(painted.contains(" rest is fine"));
    }

    #[test]
    fn test_text_outside_spans_kept() {
        let markup = r#"before <span style="color:green;">good</span> after"#;
        let painted = paint_highlighted(markup).unwrap();
        assert!(painted.starts_with("before "));
        assert!(painted.ends_with(" after"));
    }

    #[test]
    fn test_unknown_tags_passed_through() {
        // 未识别的标签不做解释，原样输出
        let markup = r#"<b>ok</b> <span style="color:blue;">skip</span>"#;
        let painted = paint_highlighted(markup).unwrap();
        assert_eq!(painted, markup);
    }

    #[test]
    fn test_empty_markup() {
        assert_eq!(paint_highlighted("").unwrap(), "");
    }

    #[test]
    fn test_span_order_preserved() {
        let markup = concat!(
            r#"<span style="color:green;">one </span>"#,
            r#"<span style="color:red;">two </span>"#,
            r#"<span style="color:green;">three</span>"#,
        );
        let painted = paint_highlighted(markup).unwrap();
        let one = painted.find("one").unwrap();
        let two = painted.find("two").unwrap();
        let three = painted.find("three").unwrap();
        assert!(one < two && two < three);
    }
}
