//! 报告导出服务 - 业务能力层
//!
//! 只负责"导出一份报告"能力，不关心流程

use crate::clients::GradingClient;
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::HttpExecutor;
use crate::models::{ReportBundle, ReportFormat};
use anyhow::{Context, Result};
use futures::StreamExt;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// 导出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// 报告已写入本地文件
    Saved(PathBuf),
    /// 草稿为空，未发起请求
    EmptyEssay,
}

/// 报告导出服务
///
/// 职责：
/// - 打包会话快照请求导出
/// - 把二进制响应流式写入本地文件
/// - 每次调用至多产生一个文件，失败路径不留文件
pub struct ReportService {
    report_folder: PathBuf,
}

impl ReportService {
    /// 创建新的导出服务
    pub fn new(config: &Config) -> Self {
        Self {
            report_folder: PathBuf::from(&config.report_folder),
        }
    }

    /// 请求导出并保存报告
    ///
    /// # 参数
    /// - `executor`: HTTP 执行器
    /// - `client`: 评分客户端
    /// - `format`: 导出格式
    /// - `bundle`: 当前会话快照
    ///
    /// # 返回
    /// 空草稿直接返回 `EmptyEssay`，不发请求；
    /// 非 2xx 状态和传输失败走 Err，由调用方给通用提示
    pub async fn export(
        &self,
        executor: &HttpExecutor,
        client: &GradingClient,
        format: ReportFormat,
        bundle: &ReportBundle,
    ) -> Result<ExportOutcome> {
        // 前置检查用原始草稿文本（不 trim），与页面行为一致
        if bundle.essay.is_empty() {
            return Ok(ExportOutcome::EmptyEssay);
        }

        let response = client.download(executor, format, bundle).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::bad_status("/download", status.as_u16()).into());
        }

        fs::create_dir_all(&self.report_folder)
            .await
            .with_context(|| format!("无法创建报告目录: {}", self.report_folder.display()))?;

        let artifact_path = self.report_folder.join(format.artifact_name());
        let mut file = fs::File::create(&artifact_path)
            .await
            .with_context(|| format!("无法创建报告文件: {}", artifact_path.display()))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    // 传输中断时不保留半截文件
                    drop(file);
                    if let Err(cleanup) = fs::remove_file(&artifact_path).await {
                        warn!("清理未完成的报告文件失败: {}", cleanup);
                    }
                    return Err(e).context("报告下载中断");
                }
            };
            file.write_all(&chunk)
                .await
                .with_context(|| format!("写入报告文件失败: {}", artifact_path.display()))?;
        }
        file.flush().await?;

        debug!("报告已保存: {}", artifact_path.display());
        Ok(ExportOutcome::Saved(artifact_path))
    }
}
