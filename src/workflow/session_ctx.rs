//! 会话上下文
//!
//! 把一次交互会话的全部可变状态集中在一个显式传递的结构里，
//! 不依赖任何全局变量

use console::style;

use crate::models::{EssayDraft, Theme};
use crate::ui::SessionPanels;
use crate::workflow::submission::SubmissionState;

/// 会话统计
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    /// 发起的提交次数
    pub submissions: usize,
    /// 成功评分次数
    pub scored: usize,
    /// 已导出的报告数
    pub reports: usize,
}

/// 会话上下文
///
/// 职责：
/// - 持有草稿、提交状态、结果面板、主题等全部会话状态
/// - 由编排层创建，显式传入各个流程
pub struct SessionCtx {
    /// 作文草稿
    pub draft: EssayDraft,
    /// 提交状态
    pub state: SubmissionState,
    /// 结果面板
    pub panels: SessionPanels,
    /// 反馈折叠部分是否展开
    pub feedback_expanded: bool,
    /// 当前主题
    pub theme: Theme,
    /// 会话统计
    pub stats: SessionStats,
    /// 按顺序记录的用户提示
    pub alerts: Vec<String>,
}

impl SessionCtx {
    /// 创建新的会话上下文
    pub fn new(theme: Theme) -> Self {
        Self {
            draft: EssayDraft::new(),
            state: SubmissionState::Idle,
            panels: SessionPanels::new(),
            feedback_expanded: false,
            theme,
            stats: SessionStats::default(),
            alerts: Vec::new(),
        }
    }

    /// 弹出提示：打印并记录
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        println!("⚠ {}", style(&message).yellow());
        self.alerts.push(message);
    }

    /// 最近一次提示
    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(|s| s.as_str())
    }

    /// 导航离开后重置会话状态（草稿、面板、提交状态一并丢弃）
    pub fn reset_for_navigation(&mut self) {
        self.draft.clear();
        self.panels.clear();
        self.state = SubmissionState::Idle;
        self.feedback_expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_and_empty() {
        let ctx = SessionCtx::new(Theme::Light);
        assert!(ctx.draft.is_empty());
        assert_eq!(ctx.state, SubmissionState::Idle);
        assert!(ctx.panels.is_empty());
        assert!(!ctx.feedback_expanded);
        assert_eq!(ctx.stats.submissions, 0);
    }

    #[test]
    fn test_alert_records_messages_in_order() {
        let mut ctx = SessionCtx::new(Theme::Light);
        ctx.alert("first");
        ctx.alert("second");
        assert_eq!(ctx.alerts, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(ctx.last_alert(), Some("second"));
    }

    #[test]
    fn test_reset_for_navigation() {
        let mut ctx = SessionCtx::new(Theme::Dark);
        ctx.draft.append_line("some essay");
        ctx.panels.score = "Predicted Score: 9/10".to_string();
        ctx.feedback_expanded = true;
        ctx.state = SubmissionState::InFlight;

        ctx.reset_for_navigation();

        assert!(ctx.draft.is_empty());
        assert!(ctx.panels.is_empty());
        assert_eq!(ctx.state, SubmissionState::Idle);
        assert!(!ctx.feedback_expanded);
        // 主题偏好不随导航重置
        assert_eq!(ctx.theme, Theme::Dark);
    }
}
