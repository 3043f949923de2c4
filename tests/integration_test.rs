//! 真实评分服务联调测试
//!
//! 需要本地先启动评分服务（默认 http://127.0.0.1:5000）

use essay_score_client::models::{ReportBundle, ReportFormat};
use essay_score_client::services::{ExportOutcome, ReportService, UploadOutcome, UploadService};
use essay_score_client::workflow::SubmissionOutcome;
use essay_score_client::{Config, EssayDraft, GradingClient, HttpExecutor};

/// 满足最短篇幅要求的联调用作文（约 70 词）
const LIVE_ESSAY: &str = "Education has always been the cornerstone of human progress. \
When students learn to express their thoughts clearly in writing, they develop skills \
that serve them for a lifetime. Automated feedback systems can accelerate this growth \
by pointing out grammatical mistakes and structural weaknesses the moment an essay is \
submitted. Used carefully, such tools do not replace teachers but give every learner a \
patient reviewer available at any time of day.";

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_predict_live() {
    // 初始化日志
    let _ = tracing_subscriber::fmt::try_init();

    // 加载配置
    let config = Config::from_env();
    let executor = HttpExecutor::new(config.request_timeout_secs).expect("创建 HTTP 执行器失败");
    let client = GradingClient::new(&config);

    println!("\n========== 作文评分接口 ==========");
    let response = client
        .predict(&executor, LIVE_ESSAY)
        .await
        .expect("评分请求失败");

    match SubmissionOutcome::from_response(response) {
        SubmissionOutcome::Scored(result) => {
            println!("✅ 评分成功: {}", result.score);
            println!("反馈条数: {}", result.feedback.len());
            assert!(!result.score.is_empty(), "评分不应为空");
        }
        SubmissionOutcome::Rejected(error) => {
            panic!("❌ 评分被拒绝: {:?}", error);
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_predict_short_essay_live() {
    // 初始化日志
    let _ = tracing_subscriber::fmt::try_init();

    // 加载配置
    let config = Config::from_env();
    let executor = HttpExecutor::new(config.request_timeout_secs).expect("创建 HTTP 执行器失败");
    let client = GradingClient::new(&config);

    println!("\n========== 过短作文校验 ==========");
    let response = client
        .predict(&executor, "Too short.")
        .await
        .expect("评分请求失败");

    println!("服务端返回标记: {:?}", response.error);
    assert_eq!(response.error.as_deref(), Some("short"), "应返回 short 标记");
}

#[tokio::test]
#[ignore]
async fn test_upload_plain_text_rejected_live() {
    // 初始化日志
    let _ = tracing_subscriber::fmt::try_init();

    // 加载配置
    let config = Config::from_env();
    let executor = HttpExecutor::new(config.request_timeout_secs).expect("创建 HTTP 执行器失败");
    let client = GradingClient::new(&config);
    let service = UploadService::new();

    // 准备一个扩展名不合法的文件
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("essay.txt");
    std::fs::write(&path, b"plain text essay").expect("写入临时文件失败");

    println!("\n========== 非法扩展名上传 ==========");
    let mut draft = EssayDraft::new();
    let outcome = service
        .apply(&executor, &client, &mut draft, &path)
        .await
        .expect("上传请求失败");

    match outcome {
        UploadOutcome::Rejected(message) => {
            println!("✅ 服务端拒绝: {}", message);
            assert!(draft.is_empty(), "拒绝时草稿不应被改动");
        }
        UploadOutcome::Replaced { words, .. } => {
            panic!("❌ .txt 文件不应上传成功（{} 词）", words);
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_download_report_live() {
    // 初始化日志
    let _ = tracing_subscriber::fmt::try_init();

    // 加载配置
    let config = Config::from_env();
    let executor = HttpExecutor::new(config.request_timeout_secs).expect("创建 HTTP 执行器失败");
    let client = GradingClient::new(&config);
    let service = ReportService::new(&config);

    let bundle = ReportBundle {
        essay: LIVE_ESSAY.to_string(),
        score: "Predicted Score: 8/10".to_string(),
        feedback: "Feedback:\n- Clear thesis statement.".to_string(),
        ..ReportBundle::default()
    };

    println!("\n========== 报告导出 ==========");
    let outcome = service
        .export(&executor, &client, ReportFormat::Docx, &bundle)
        .await
        .expect("导出请求失败");

    match outcome {
        ExportOutcome::Saved(path) => {
            println!("✅ 报告已保存: {}", path.display());
            assert!(path.exists(), "报告文件应该存在");
        }
        ExportOutcome::EmptyEssay => {
            panic!("❌ 非空作文不应返回 EmptyEssay");
        }
    }
}
