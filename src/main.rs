use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use vstep_scraper::orchestrator::{ctrl_c, dedup_only, run_until_interrupted};
use vstep_scraper::services::ExamStore;
use vstep_scraper::utils::logging;
use vstep_scraper::{App, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 存在 .env 时先载入，不存在则直接使用环境变量
    dotenvy::dotenv().ok();

    // 初始化日志
    logging::init();

    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env().with_headless(!cli.visible);

    if cli.dedup_only {
        let store = ExamStore::new(&config.output_dir);
        let removed = dedup_only(&store, &cli.exam_types()).await?;
        info!("✓ 重复清理完成，共删除 {} 份", removed);
        return Ok(());
    }

    // 初始化并运行应用，无论成功、失败还是被中断都关闭浏览器
    let app = App::initialize(config).await?;
    let request = cli.run_request();
    let result = run_until_interrupted(app.run(&request), ctrl_c()).await;
    app.shutdown().await;

    match result {
        Some(summary) => {
            summary?;
        }
        None => warn!("⚠️ 运行被中断，已保存的记录保留在输出目录"),
    }

    Ok(())
}
