//! 反馈分页展示模型

use crate::models::scoring::ScoringResult;

/// 默认直接可见的反馈条目数量
pub const VISIBLE_LIMIT: usize = 10;

/// 反馈展示视图
///
/// 由 `ScoringResult` 派生，每次渲染时重新计算，本身不持久化。
/// 前 10 条始终可见，其余条目折叠在一个开关后面。
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackView {
    /// 直接可见的条目（至多 10 条）
    pub visible_items: Vec<String>,
    /// 折叠的剩余条目
    pub hidden_items: Vec<String>,
    /// 折叠部分是否已展开
    pub expanded: bool,
}

impl FeedbackView {
    /// 从评分结果派生视图
    ///
    /// # 参数
    /// - `result`: 评分结果
    /// - `expanded`: 会话当前的展开状态（切换开关只翻转此标志，不重新取数）
    pub fn new(result: &ScoringResult, expanded: bool) -> Self {
        let visible_items = result.feedback.iter().take(VISIBLE_LIMIT).cloned().collect();
        let hidden_items = result.feedback.iter().skip(VISIBLE_LIMIT).cloned().collect();
        Self {
            visible_items,
            hidden_items,
            expanded,
        }
    }

    /// 是否需要渲染折叠开关（仅当存在折叠条目时）
    pub fn has_toggle(&self) -> bool {
        !self.hidden_items.is_empty()
    }

    /// 折叠开关的当前文案
    ///
    /// # 返回
    /// - 无折叠条目时为 `None`
    /// - 未展开时为 `"Show N more"`，N 为折叠条目数
    /// - 已展开时为 `"Show less"`
    pub fn toggle_label(&self) -> Option<String> {
        if self.hidden_items.is_empty() {
            return None;
        }
        if self.expanded {
            Some("Show less".to_string())
        } else {
            Some(format!("Show {} more", self.hidden_items.len()))
        }
    }
}
