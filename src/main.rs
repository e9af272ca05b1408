use anyhow::Result;
use daily_question_bot::utils::logging;
use daily_question_bot::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用，错误由 anyhow 打印并以非零状态码退出
    App::initialize(config).await?.run().await?;

    Ok(())
}
