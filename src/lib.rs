//! # Essay Score Client
//!
//! 一个作文自动评分服务的交互式客户端
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `HttpExecutor` - 唯一的 HTTP client owner，提供表单请求能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个动作
//! - `UploadService` - 上传文件换取文本能力
//! - `ReportService` - 导出报告并落盘能力
//! - `PrefsStore` - 主题偏好读写能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整处理流程
//! - `SessionCtx` - 会话状态封装（草稿 + 面板 + 提交状态）
//! - `SubmitFlow` - 流程编排（门闸 → 清空 → 请求 → 归类 → 渲染）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/repl` - 交互式会话，管理资源和命令循环
//! - `orchestrator/command` - 输入行到命令的解析
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::GradingClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::HttpExecutor;
pub use models::{EssayDraft, ScoringResult, Theme};
pub use orchestrator::{App, Command};
pub use workflow::{SessionCtx, SubmissionOutcome, SubmissionState, SubmitFlow};
