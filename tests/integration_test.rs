use vstep_scraper::browser::launch_browser;
use vstep_scraper::config::Config;
use vstep_scraper::infrastructure::{JsExecutor, PageDriver};
use vstep_scraper::models::ExamType;
use vstep_scraper::services::{ExamStore, SessionController};
use vstep_scraper::utils::logging;
use vstep_scraper::workflow::{ExamCtx, ExamFlow, ProcessResult};

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_scrape_single_listening_exam() {
    // 初始化日志
    logging::init();

    // 加载配置（需要 VSTEP_USERNAME / VSTEP_PASSWORD）
    let config = Config::from_env();
    assert!(config.has_credentials(), "请先设置账号密码环境变量");

    // 启动浏览器
    let session = launch_browser(&config).await.expect("启动浏览器失败");
    let executor = JsExecutor::new(session.page.clone());

    SessionController::new(&config)
        .login(&executor)
        .await
        .expect("登录失败");

    let flow = ExamFlow::new(&config);
    let ctx = ExamCtx::new(ExamType::Listening, 1, &config.base_url);
    let result = flow.run(&executor, &ctx).await.expect("处理试卷失败");

    if let ProcessResult::Success(record) = result {
        let store = ExamStore::new(std::env::temp_dir().join("vstep_scraper_test"));
        store.save(&record).await.expect("保存失败");
    }

    session.close().await;
}

#[tokio::test]
#[ignore]
async fn test_browser_launch() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 测试浏览器启动
    let session = launch_browser(&config).await.expect("应该能够成功启动浏览器");
    let executor = JsExecutor::new(session.page.clone());

    executor.navigate("about:blank").await.expect("导航失败");
    let value = executor.eval("() => 1 + 1").await.expect("执行脚本失败");
    assert_eq!(value, serde_json::json!(2));

    session.close().await;
}
