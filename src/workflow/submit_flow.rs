//! 提交流程
//!
//! 串联一次作文提交的完整流程：
//! 并发门闸 → 清空旧面板 → 调用评分接口 → 归类结果 → 渲染或提示

use anyhow::Result;

use crate::clients::GradingClient;
use crate::config::Config;
use crate::infrastructure::HttpExecutor;
use crate::ui::BusyIndicator;
use crate::utils::truncate_text;
use crate::workflow::session_ctx::SessionCtx;
use crate::workflow::submission::{SubmissionOutcome, SubmissionState, SubmitError};

/// 提交流程
///
/// 职责：
/// - 编排从门闸到渲染的完整提交流程
/// - 校验和归类交给服务端标记，本层只负责流程
pub struct SubmitFlow {
    client: GradingClient,
}

impl SubmitFlow {
    /// 创建提交流程
    pub fn new(config: &Config) -> Self {
        Self {
            client: GradingClient::new(config),
        }
    }

    /// 执行一次提交
    ///
    /// 流程：
    /// 1. 并发门闸：已有请求在途时直接忽略本次请求
    /// 2. 清空旧结果面板，收起反馈，进入在途状态
    /// 3. 带忙碌指示调用评分接口（始终发送 trim 后的文本）
    /// 4. 按响应归类：成功渲染面板，失败弹提示
    ///
    /// 传输层错误不向上冒泡：记录诊断日志后以统一提示呈现，
    /// 因此除渲染失败外总是返回 Ok
    pub async fn run(
        &self,
        executor: &HttpExecutor,
        busy: &BusyIndicator,
        ctx: &mut SessionCtx,
    ) -> Result<()> {
        // ========== 并发门闸 ==========
        if !ctx.state.try_begin() {
            tracing::warn!("⚠️ 已有提交在途，忽略本次请求");
            return Ok(());
        }

        ctx.stats.submissions += 1;
        ctx.panels.clear();
        ctx.feedback_expanded = false;

        tracing::info!("📤 提交作文评分（{} 词）", ctx.draft.word_count());
        tracing::debug!("提交文本预览: {}", truncate_text(ctx.draft.trimmed(), 80));

        // ========== 调用评分接口 ==========
        // 守卫保证无论哪条分支退出，忙碌指示都会收起
        let response = {
            let _busy = busy.begin("Evaluating your essay...");
            self.client.predict(executor, ctx.draft.trimmed()).await
        };

        // ========== 归类结果 ==========
        match response {
            Ok(response) => match SubmissionOutcome::from_response(response) {
                SubmissionOutcome::Scored(result) => {
                    tracing::info!("✓ 评分成功: {}", result.score);
                    ctx.stats.scored += 1;
                    ctx.panels.render_result(&result, ctx.feedback_expanded);
                    ctx.state = SubmissionState::Succeeded(result);
                    ctx.panels.print(ctx.theme)?;
                }
                SubmissionOutcome::Rejected(error) => {
                    tracing::warn!("⚠️ 提交被拒绝: {:?}", error);
                    ctx.alert(error.message());
                    ctx.state = SubmissionState::Failed(error);
                }
            },
            Err(e) => {
                tracing::error!("❌ 评分请求失败: {}", e);
                ctx.alert(SubmitError::Processing.message());
                ctx.state = SubmissionState::Failed(SubmitError::Processing);
            }
        }

        Ok(())
    }
}
