/// 日志工具模块
///
/// 提供日志初始化与格式化辅助函数
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// 初始化全局日志订阅器
///
/// # 参数
/// - `verbose`: 是否输出 debug 级别日志
///
/// 环境变量 `RUST_LOG` 存在时优先生效
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "essay_score_client=debug"
    } else {
        "essay_score_client=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
