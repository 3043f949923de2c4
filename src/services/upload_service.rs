//! 文件上传服务 - 业务能力层
//!
//! 只负责"上传文件换取文本"能力，不关心流程

use crate::clients::GradingClient;
use crate::error::AppError;
use crate::infrastructure::HttpExecutor;
use crate::models::{EssayDraft, MutationOutcome};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// 上传结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 草稿已被服务端提取的文本整体替换
    Replaced {
        /// 替换后的单词数
        words: usize,
        /// 是否因超出单词上限被截断
        truncated: bool,
    },
    /// 服务端拒绝，消息原样透传给用户
    Rejected(String),
}

/// 文件上传服务
///
/// 职责：
/// - 读取本地文件并上传换取作文文本
/// - 成功时整体替换草稿（不合并、不确认）
/// - 单次调用只发一次请求，不重试
pub struct UploadService;

impl UploadService {
    /// 创建新的上传服务
    pub fn new() -> Self {
        Self
    }

    /// 上传文件并用返回的文本替换草稿
    ///
    /// # 参数
    /// - `executor`: HTTP 执行器
    /// - `client`: 评分客户端
    /// - `draft`: 会话草稿
    /// - `path`: 用户选择的文件
    ///
    /// # 返回
    /// 服务端业务拒绝返回 `Rejected`（消息原样透传）；
    /// 文件读取失败、传输失败、响应缺字段走 Err，由调用方给通用提示
    pub async fn apply(
        &self,
        executor: &HttpExecutor,
        client: &GradingClient,
        draft: &mut EssayDraft,
        path: &Path,
    ) -> Result<UploadOutcome> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "essay.docx".to_string());

        let bytes = fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        debug!("读取上传文件 {} ({} 字节)", filename, bytes.len());

        let response = client.upload(executor, &filename, bytes).await?;

        if let Some(error) = response.error {
            return Ok(UploadOutcome::Rejected(error));
        }

        let content = response.content.context("上传响应缺少 content 字段")?;

        let truncated = draft.replace(content) == MutationOutcome::Truncated;
        Ok(UploadOutcome::Replaced {
            words: draft.word_count(),
            truncated,
        })
    }
}

impl Default for UploadService {
    fn default() -> Self {
        Self::new()
    }
}
