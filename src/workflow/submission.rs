//! 提交状态机
//!
//! 一次会话只有一个提交状态实例，状态转换只由用户的提交动作
//! 和对应的网络响应触发。

use crate::models::{PredictResponse, ScoringResult, ValidationError};

/// 提交失败原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// 服务端校验失败，固定文案
    Validation(ValidationError),
    /// 服务端返回了无法识别的错误标签，提示文案为空
    Unclassified,
    /// 传输失败或响应损坏，通用文案
    Processing,
}

impl SubmitError {
    /// 用户可见的提示文案
    pub fn message(&self) -> String {
        match self {
            SubmitError::Validation(e) => e.to_string(),
            SubmitError::Unclassified => String::new(),
            SubmitError::Processing => {
                "An error occurred while processing your essay. Please try again.".to_string()
            }
        }
    }
}

/// 提交状态
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// 尚未提交
    Idle,
    /// 请求进行中
    InFlight,
    /// 评分成功
    Succeeded(ScoringResult),
    /// 提交失败
    Failed(SubmitError),
}

impl SubmissionState {
    /// 尝试进入 InFlight
    ///
    /// # 返回
    /// InFlight 状态下拒绝再次进入（不允许并发提交），返回 false；
    /// 其余状态转入 InFlight 并返回 true
    pub fn try_begin(&mut self) -> bool {
        if matches!(self, SubmissionState::InFlight) {
            return false;
        }
        *self = SubmissionState::InFlight;
        true
    }

    /// 请求是否进行中
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    /// 当前持有的评分结果
    pub fn result(&self) -> Option<&ScoringResult> {
        match self {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

/// 一次提交响应的分类结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// 进入渲染
    Scored(ScoringResult),
    /// 弹出错误提示
    Rejected(SubmitError),
}

impl SubmissionOutcome {
    /// 对服务端响应做分类
    ///
    /// - 带 error 标签：精确匹配三种校验错误，未知标签归为 `Unclassified`
    /// - 无 error 标签：缺 feedback 视为响应损坏（`Processing`），
    ///   score / highlighted 缺失降级为空串
    pub fn from_response(response: PredictResponse) -> Self {
        if let Some(tag) = response.error {
            return match ValidationError::from_tag(&tag) {
                Some(err) => SubmissionOutcome::Rejected(SubmitError::Validation(err)),
                None => SubmissionOutcome::Rejected(SubmitError::Unclassified),
            };
        }

        let feedback = match response.feedback {
            Some(feedback) => feedback,
            None => return SubmissionOutcome::Rejected(SubmitError::Processing),
        };

        SubmissionOutcome::Scored(ScoringResult {
            score: response.score.unwrap_or_default(),
            feedback,
            highlighted: response.highlighted.unwrap_or_default(),
        })
    }
}
