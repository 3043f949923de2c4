//! 交互式会话 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责交互式评分会话的编排和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、恢复主题偏好、创建 HttpExecutor
//! 2. **命令循环**：逐行读取标准输入，解析并分发命令
//! 3. **离开拦截**：草稿非空时，导航和退出前要求用户确认
//! 4. **资源管理**：唯一持有 HttpExecutor 和忙碌指示器
//! 5. **会话统计**：退出时汇总本次会话
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个命令的业务细节
//! - **资源所有者**：HttpExecutor 只在此处创建
//! - **向下委托**：提交走 SubmitFlow，上传/导出走对应服务

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use console::style;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, error, info, warn};

use crate::clients::GradingClient;
use crate::config::Config;
use crate::infrastructure::HttpExecutor;
use crate::models::{FeedbackView, MutationOutcome, ReportBundle, ReportFormat, Theme};
use crate::orchestrator::command::Command;
use crate::services::{ExportOutcome, PrefsStore, ReportService, UploadOutcome, UploadService};
use crate::ui::BusyIndicator;
use crate::workflow::{SessionCtx, SubmitFlow};

// ========== 用户提示文案 ==========

/// 离开页面确认
const LEAVE_WARNING: &str = "Your essay will be lost. Are you sure you want to leave this page?";
/// 清空草稿确认
const CLEAR_PROMPT: &str = "Are you sure you want to clear this essay?";
/// 超出单词上限提示
const WORD_LIMIT_MESSAGE: &str = "Essay cannot exceed 500 words. Please reduce your essay length.";
/// 上传失败统一提示
const UPLOAD_ERROR_MESSAGE: &str = "Error uploading file.";
/// 空草稿导出提示
const EMPTY_ESSAY_MESSAGE: &str = "Essay is empty.";
/// 报告导出失败统一提示
const DOWNLOAD_ERROR_MESSAGE: &str = "Failed to generate report.";
/// 不支持的导出格式提示
const UNSUPPORTED_FORMAT_MESSAGE: &str = "Unsupported format";

/// About 页面正文
const ABOUT_PAGE: &str = "Automated Essay Scoring grades essays with a machine learning model \
and returns an instant score, feedback, and grammar highlights.";
/// Goal 页面正文
const GOAL_PAGE: &str = "The goal of this project is to help students improve their writing \
through objective scores and actionable feedback on every essay.";

/// 应用主结构
pub struct App {
    config: Config,
    executor: HttpExecutor,
    busy: BusyIndicator,
    prefs: PrefsStore,
    client: GradingClient,
    submit_flow: SubmitFlow,
    upload_service: UploadService,
    report_service: ReportService,
    ctx: SessionCtx,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        // 创建 HttpExecutor（持有 HTTP 客户端）
        let executor = HttpExecutor::new(config.request_timeout_secs)?;

        // 恢复主题偏好，没保存过则跟随系统
        let prefs = PrefsStore::new(&config);
        let theme = match prefs.load_theme().await {
            Some(theme) => {
                info!("✓ 已恢复主题偏好: {}", theme);
                theme
            }
            None => {
                let theme = Theme::system_default();
                info!("💡 未找到主题偏好，跟随系统: {}", theme);
                theme
            }
        };

        Ok(Self {
            executor,
            busy: BusyIndicator::new(),
            prefs,
            client: GradingClient::new(&config),
            submit_flow: SubmitFlow::new(&config),
            upload_service: UploadService::new(),
            report_service: ReportService::new(&config),
            ctx: SessionCtx::new(theme),
            config,
        })
    }

    /// 运行命令循环，直到用户退出或输入结束
    pub async fn run(&mut self) -> Result<()> {
        print_welcome(&self.ctx);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            prompt()?;
            let Some(line) = lines.next_line().await? else {
                // 输入结束时无法交互确认，提示后直接收尾
                if !self.ctx.draft.is_blank() {
                    println!();
                    println!("{}", style(LEAVE_WARNING).yellow());
                }
                break;
            };

            match Command::parse(&line) {
                Command::Append(text) => self.handle_append(&text),
                Command::Submit => self.handle_submit().await?,
                Command::Upload(path) => self.handle_upload(path).await,
                Command::Download(format) => self.handle_download(format).await,
                Command::Show => self.handle_show()?,
                Command::ToggleFeedback => self.handle_toggle_feedback()?,
                Command::Clear => self.handle_clear(&mut lines).await?,
                Command::Theme => self.handle_theme().await,
                Command::About => self.handle_navigation("About", ABOUT_PAGE, &mut lines).await?,
                Command::Goal => self.handle_navigation("Goal", GOAL_PAGE, &mut lines).await?,
                Command::Help => print_help(),
                Command::Quit => {
                    if self.handle_quit(&mut lines).await? {
                        break;
                    }
                }
                Command::Unknown(word) => {
                    println!("Unknown command: :{}. Type :help for a list of commands.", word);
                }
            }
        }

        print_session_summary(&self.ctx, &self.config);
        Ok(())
    }

    /// 追加一行草稿，超限时截断并提示
    fn handle_append(&mut self, text: &str) {
        if self.ctx.draft.append_line(text) == MutationOutcome::Truncated {
            self.ctx.alert(WORD_LIMIT_MESSAGE);
        }
    }

    /// 提交评分，流程细节交给 SubmitFlow
    async fn handle_submit(&mut self) -> Result<()> {
        self.submit_flow
            .run(&self.executor, &self.busy, &mut self.ctx)
            .await
    }

    /// 上传文件替换草稿
    async fn handle_upload(&mut self, path: Option<PathBuf>) {
        // 未选择文件时与页面一致：什么都不做
        let Some(path) = path else {
            debug!("未提供上传文件路径，忽略");
            return;
        };

        match self
            .upload_service
            .apply(&self.executor, &self.client, &mut self.ctx.draft, &path)
            .await
        {
            Ok(UploadOutcome::Replaced { words, truncated }) => {
                info!("✓ 上传成功，草稿已替换（{} 词）", words);
                println!("Loaded {} words from {}.", words, path.display());
                if truncated {
                    self.ctx.alert(WORD_LIMIT_MESSAGE);
                }
            }
            Ok(UploadOutcome::Rejected(message)) => {
                warn!("⚠️ 上传被服务端拒绝: {}", message);
                // 服务端业务错误原样呈现
                self.ctx.alert(message);
            }
            Err(e) => {
                error!("❌ 上传失败: {}", e);
                self.ctx.alert(UPLOAD_ERROR_MESSAGE);
            }
        }
    }

    /// 导出当前会话的评分报告
    async fn handle_download(&mut self, format_arg: Option<String>) {
        // 页面只有 docx/pdf 两个导出入口，省略参数时默认 docx
        let format = match format_arg {
            None => ReportFormat::Docx,
            Some(arg) => match ReportFormat::from_str(&arg) {
                Some(format) => format,
                None => {
                    self.ctx.alert(UNSUPPORTED_FORMAT_MESSAGE);
                    return;
                }
            },
        };

        let bundle = self.snapshot_bundle();
        match self
            .report_service
            .export(&self.executor, &self.client, format, &bundle)
            .await
        {
            Ok(ExportOutcome::Saved(path)) => {
                self.ctx.stats.reports += 1;
                info!("✓ 报告已导出: {}", path.display());
                println!("Report saved to {}.", path.display());
            }
            Ok(ExportOutcome::EmptyEssay) => {
                self.ctx.alert(EMPTY_ESSAY_MESSAGE);
            }
            Err(e) => {
                error!("❌ 报告导出失败: {}", e);
                self.ctx.alert(DOWNLOAD_ERROR_MESSAGE);
            }
        }
    }

    /// 显示当前草稿与最近一次结果
    fn handle_show(&self) -> Result<()> {
        print_draft(&self.ctx);
        if !self.ctx.panels.is_empty() {
            self.ctx.panels.print(self.ctx.theme)?;
        }
        Ok(())
    }

    /// 展开/收起反馈列表，没有可折叠项时静默忽略
    fn handle_toggle_feedback(&mut self) -> Result<()> {
        let Some(result) = self.ctx.state.result().cloned() else {
            debug!("当前没有评分结果，忽略反馈折叠切换");
            return Ok(());
        };

        let view = FeedbackView::new(&result, self.ctx.feedback_expanded);
        if !view.has_toggle() {
            return Ok(());
        }

        self.ctx.feedback_expanded = !self.ctx.feedback_expanded;
        self.ctx
            .panels
            .rebuild_feedback(&result, self.ctx.feedback_expanded);
        self.ctx.panels.print(self.ctx.theme)
    }

    /// 清空草稿（结果面板保留）
    async fn handle_clear(&mut self, lines: &mut Lines<BufReader<Stdin>>) -> Result<()> {
        // 空白草稿时与页面一致：不弹确认
        if self.ctx.draft.is_blank() {
            return Ok(());
        }
        if confirm(CLEAR_PROMPT, lines).await? {
            self.ctx.draft.clear();
            info!("✓ 草稿已清空");
        }
        Ok(())
    }

    /// 切换主题并持久化偏好
    async fn handle_theme(&mut self) {
        self.ctx.theme = self.ctx.theme.toggled();
        println!("Switched to {} theme.", self.ctx.theme);

        // 持久化失败不影响本次会话
        if let Err(e) = self.prefs.save_theme(self.ctx.theme).await {
            warn!("⚠️ 主题偏好保存失败: {}", e);
        }
    }

    /// 跳转到另一个页面，草稿非空时先确认
    async fn handle_navigation(
        &mut self,
        title: &str,
        body: &str,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> Result<()> {
        if !self.ctx.draft.is_blank() && !confirm(LEAVE_WARNING, lines).await? {
            return Ok(());
        }
        // 离开页面即丢弃整个会话状态
        self.ctx.reset_for_navigation();
        print_page(title, body);
        Ok(())
    }

    /// 退出前的离开确认，返回是否允许退出
    async fn handle_quit(&mut self, lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
        if self.ctx.draft.is_blank() {
            return Ok(true);
        }
        confirm(LEAVE_WARNING, lines).await
    }

    /// 按页面规则采集导出快照：原始草稿 + 面板当前文本
    fn snapshot_bundle(&self) -> ReportBundle {
        ReportBundle {
            essay: self.ctx.draft.text().to_string(),
            score: self.ctx.panels.score.clone(),
            feedback: self.ctx.panels.feedback.clone(),
            highlighted: self.ctx.panels.highlighted.clone(),
            legend: self.ctx.panels.legend.clone(),
        }
    }
}

// ========== 输入辅助函数 ==========

/// 打印输入提示符
fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

/// 交互确认，输入结束视为取消
async fn confirm(prompt_text: &str, lines: &mut Lines<BufReader<Stdin>>) -> Result<bool> {
    print!("{} [y/N] ", style(prompt_text).yellow().bold());
    std::io::stdout().flush()?;

    match lines.next_line().await? {
        Some(answer) => Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        )),
        None => Ok(false),
    }
}

// ========== 输出辅助函数 ==========

fn print_welcome(ctx: &SessionCtx) {
    println!("{}", "=".repeat(60));
    println!("{}", style("Automated Essay Scoring").bold());
    println!("Theme: {}. Type :help for commands.", ctx.theme);
    println!("{}", "=".repeat(60));
}

fn print_help() {
    println!("Commands:");
    println!("  :submit              Evaluate the current essay");
    println!("  :upload <path>       Upload a .doc or .docx file to replace the essay");
    println!("  :download [format]   Export a report (docx or pdf, default docx)");
    println!("  :show                Show the essay and latest results");
    println!("  :feedback            Show more / show less feedback");
    println!("  :clear               Clear the essay");
    println!("  :theme               Toggle dark/light theme");
    println!("  :about               About page");
    println!("  :goal                Goal page");
    println!("  :help                Show this help");
    println!("  :quit                Exit");
    println!("Any other line is appended to the essay.");
}

fn print_draft(ctx: &SessionCtx) {
    println!();
    if ctx.draft.is_empty() {
        println!("{}", style("(essay is empty)").dim());
        return;
    }
    println!(
        "{}",
        style(format!("Essay ({} words):", ctx.draft.word_count())).bold()
    );
    println!("{}", ctx.draft.text());
}

fn print_page(title: &str, body: &str) {
    println!();
    println!("{}", style(title).bold().underlined());
    println!("{}", body);
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 作文评分交互会话");
    info!("📋 API 地址: {}", config.api_base_url);
    info!("{}", "=".repeat(60));
}

fn print_session_summary(ctx: &SessionCtx, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 会话结束统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "✅ 提交 {} 次，成功评分 {} 次",
        ctx.stats.submissions, ctx.stats.scored
    );
    info!(
        "📄 导出报告 {} 份（目录: {}）",
        ctx.stats.reports, config.report_folder
    );
    info!("{}", "=".repeat(60));
}
