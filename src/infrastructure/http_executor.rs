//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端资源，只暴露"发请求"的能力

use crate::error::{AppError, AppResult};
use reqwest::multipart::Form;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// HTTP 执行器
///
/// 职责：
/// - 持有唯一的 HTTP 客户端资源
/// - 暴露 multipart 表单提交能力
/// - 不认识 EssayDraft / ScoringResult
/// - 不处理业务流程
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    ///
    /// # 参数
    /// - `timeout_secs`: 请求超时时间（秒）
    pub fn new(timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(AppError::client_build_failed)?;
        Ok(Self { client })
    }

    /// 提交 multipart 表单并返回 JSON 结果
    ///
    /// # 参数
    /// - `url`: 完整的接口地址
    /// - `form`: multipart 表单
    ///
    /// # 返回
    /// 返回 JSON 值；服务端用响应体而非状态码表达业务错误，
    /// 所以这里不检查状态码，状态码策略由调用方决定
    pub async fn post_form(&self, url: &str, form: Form) -> AppResult<JsonValue> {
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(url, e))?;
        let json_value = response
            .json::<JsonValue>()
            .await
            .map_err(AppError::json_parse_failed)?;
        Ok(json_value)
    }

    /// 提交 multipart 表单并反序列化为指定类型
    pub async fn post_form_as<T: DeserializeOwned>(&self, url: &str, form: Form) -> AppResult<T> {
        let json_value = self.post_form(url, form).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// 提交 multipart 表单并返回原始响应（用于二进制下载）
    ///
    /// # 参数
    /// - `url`: 完整的接口地址
    /// - `query`: query 参数
    /// - `form`: multipart 表单
    pub async fn post_form_raw(
        &self,
        url: &str,
        query: &[(&str, &str)],
        form: Form,
    ) -> AppResult<reqwest::Response> {
        let response = self
            .client
            .post(url)
            .query(query)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(url, e))?;
        Ok(response)
    }
}
