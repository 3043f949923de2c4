use anyhow::Result;
use essay_score_client::orchestrator::App;
use essay_score_client::utils::logging;
use essay_score_client::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
