/// 评分服务 API 客户端
///
/// 封装所有与评分服务相关的调用逻辑
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::HttpExecutor;
use crate::models::{PredictResponse, ReportBundle, ReportFormat, UploadResponse};
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// 评分服务 API 客户端
pub struct GradingClient {
    base_url: String,
}

impl GradingClient {
    /// 创建新的评分客户端
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    /// 提交作文评分
    ///
    /// # 参数
    /// - `executor`: HTTP 执行器
    /// - `essay`: 作文文本（调用方负责 trim）
    ///
    /// # 返回
    /// 返回评分响应（成功字段或错误标签）
    pub async fn predict(&self, executor: &HttpExecutor, essay: &str) -> AppResult<PredictResponse> {
        let url = format!("{}/predict", self.base_url);
        let form = Form::new().text("essay", essay.to_string());

        debug!("提交作文评分 - 文本长度: {} 字符", essay.len());

        let response: PredictResponse = executor.post_form_as(&url, form).await?;

        debug!("评分响应: error={:?}, score={:?}", response.error, response.score);

        Ok(response)
    }

    /// 上传作文文件换取文本
    ///
    /// # 参数
    /// - `executor`: HTTP 执行器
    /// - `filename`: 原始文件名（服务端据此校验扩展名）
    /// - `bytes`: 文件内容
    ///
    /// # 返回
    /// 返回上传响应（提取出的文本或错误消息）
    pub async fn upload(
        &self,
        executor: &HttpExecutor,
        filename: &str,
        bytes: Vec<u8>,
    ) -> AppResult<UploadResponse> {
        let url = format!("{}/upload", self.base_url);
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        debug!("上传作文文件: {}", filename);

        let response: UploadResponse = executor.post_form_as(&url, form).await?;

        debug!(
            "上传响应: error={:?}, content_len={:?}",
            response.error,
            response.content.as_ref().map(|c| c.len())
        );

        Ok(response)
    }

    /// 请求导出报告
    ///
    /// # 参数
    /// - `executor`: HTTP 执行器
    /// - `format`: 导出格式
    /// - `bundle`: 当前会话快照（五个表单字段）
    ///
    /// # 返回
    /// 返回原始响应，由调用方检查状态码并落盘
    pub async fn download(
        &self,
        executor: &HttpExecutor,
        format: ReportFormat,
        bundle: &ReportBundle,
    ) -> AppResult<reqwest::Response> {
        let url = format!("{}/download", self.base_url);
        let form = Form::new()
            .text("essay", bundle.essay.clone())
            .text("score", bundle.score.clone())
            .text("feedback", bundle.feedback.clone())
            .text("highlighted", bundle.highlighted.clone())
            .text("legend", bundle.legend.clone());

        debug!("请求导出报告 - 格式: {}", format);

        executor
            .post_form_raw(&url, &[("format", format.name())], form)
            .await
    }
}
