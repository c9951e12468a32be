use anyhow::Result;
use discourse_topic_submit::utils::logging;
use discourse_topic_submit::{App, Config};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    // 读取 .env（不存在时忽略）
    let _ = dotenvy::dotenv();

    // 先初始化日志，配置错误也要写进日志文件
    logging::init(&Config::log_file_from_env())?;

    // 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ 配置加载失败: {}", e);
            return Err(e.into());
        }
    };

    // 初始化并运行应用
    App::initialize(config)?.run().await;

    Ok(())
}
