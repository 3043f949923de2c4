//! 结果面板
//!
//! 对应页面上的四块展示区域：分数、反馈、标注作文、图例。
//! 面板持有的是当前渲染出的纯文本；标注原文原样保存，打印时才着色。

use anyhow::Result;
use console::style;

use crate::models::{FeedbackView, ScoringResult, Theme};
use crate::ui::markup::paint_highlighted;

/// 图例第一行（红色标记含义）
pub const LEGEND_RED_LINE: &str = "Red highlight indicates grammar issues.";
/// 图例第二行（绿色标记含义）
pub const LEGEND_GREEN_LINE: &str = "Green highlight indicates well-structured grammar.";

/// 会话结果面板
///
/// 进入请求流程前整体清空，成功响应后整体填充，
/// 四个字段同时也是导出报告时的会话快照来源。
#[derive(Debug, Clone, Default)]
pub struct SessionPanels {
    /// 分数行（如 "Predicted Score: 7.5/10"）
    pub score: String,
    /// 反馈面板当前渲染出的文本
    pub feedback: String,
    /// 服务端标注原文
    pub highlighted: String,
    /// 图例文本
    pub legend: String,
}

impl SessionPanels {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空所有面板
    pub fn clear(&mut self) {
        self.score.clear();
        self.feedback.clear();
        self.highlighted.clear();
        self.legend.clear();
    }

    /// 所有面板是否为空
    pub fn is_empty(&self) -> bool {
        self.score.is_empty()
            && self.feedback.is_empty()
            && self.highlighted.is_empty()
            && self.legend.is_empty()
    }

    /// 用评分结果填充全部面板
    pub fn render_result(&mut self, result: &ScoringResult, expanded: bool) {
        self.score = format!("Predicted Score: {}", result.score);
        self.feedback = Self::feedback_text(&FeedbackView::new(result, expanded));
        self.highlighted = result.highlighted.clone();
        self.legend = format!("{}\n{}", LEGEND_RED_LINE, LEGEND_GREEN_LINE);
    }

    /// 切换折叠状态后重建反馈面板文本
    pub fn rebuild_feedback(&mut self, result: &ScoringResult, expanded: bool) {
        self.feedback = Self::feedback_text(&FeedbackView::new(result, expanded));
    }

    /// 把反馈视图排版成面板文本
    ///
    /// 顺序与页面一致：可见条目、折叠开关文案、展开后的剩余条目
    pub fn feedback_text(view: &FeedbackView) -> String {
        let mut lines = vec!["Feedback:".to_string()];
        for item in &view.visible_items {
            lines.push(format!("- {}", item));
        }
        if let Some(label) = view.toggle_label() {
            lines.push(label);
            if view.expanded {
                for item in &view.hidden_items {
                    lines.push(format!("- {}", item));
                }
            }
        }
        lines.join("\n")
    }

    /// 打印所有非空面板
    pub fn print(&self, theme: Theme) -> Result<()> {
        if !self.score.is_empty() {
            println!("{}", paint_header(theme, &self.score));
        }
        if !self.feedback.is_empty() {
            println!();
            for line in self.feedback.lines() {
                if line == "Feedback:" {
                    println!("{}", paint_header(theme, line));
                } else if line.starts_with("- ") {
                    println!("{}", line);
                } else {
                    // 折叠开关文案
                    println!("{}", style(line).cyan());
                }
            }
        }
        if !self.highlighted.is_empty() {
            println!();
            println!("{}", paint_header(theme, "Highlighted Essay:"));
            println!("{} {}", style("●").red(), LEGEND_RED_LINE);
            println!("{} {}", style("●").green(), LEGEND_GREEN_LINE);
            println!();
            println!("{}", paint_highlighted(&self.highlighted)?);
        }
        Ok(())
    }
}

/// 面板标题按主题着色
fn paint_header(theme: Theme, text: &str) -> String {
    match theme {
        Theme::Dark => style(text).bold().cyan().to_string(),
        Theme::Light => style(text).bold().blue().to_string(),
    }
}
