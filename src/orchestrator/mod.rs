//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话生命周期和命令调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `repl` - 交互式会话
//! - 管理应用生命周期（初始化、运行、收尾）
//! - 逐行读取输入并分发命令
//! - 管理 HTTP 资源（HttpExecutor）
//! - 草稿非空时拦截导航与退出
//! - 输出会话统计信息
//!
//! ### `command` - 命令解析
//! - 把输入行解析为 Command
//! - `:` 前缀视为命令，其余追加到草稿
//!
//! ## 层次关系
//!
//! ```text
//! repl (命令循环)
//!     ↓
//! workflow::SubmitFlow (单次提交流程)
//!     ↓
//! services (能力层：upload / report / prefs)
//!     ↓
//! infrastructure (基础设施：HttpExecutor)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：repl 管循环，command 管解析
//! 2. **资源隔离**：只有编排层持有 HttpExecutor
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure
//! 4. **无业务逻辑**：只做调度和统计，不做具体业务判断
//!
//! ## 入口示意
//!
//! ```no_run
//! use essay_score_client::config::Config;
//! use essay_score_client::orchestrator::App;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut app = App::initialize(Config::from_env()).await?;
//!     app.run().await
//! }
//! ```

pub mod command;
pub mod repl;

// 重新导出主要类型
pub use command::Command;
pub use repl::App;
