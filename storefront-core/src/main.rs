use anyhow::Context;
use chrono::Utc;
use storefront_core::{InMemoryScheduleRepository, RestaurantService, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    tracing::info!(
        environment = %config.environment,
        timezone = config.timezone.name(),
        "Storefront core starting..."
    );

    // 2. 加载餐厅目录
    let repo = InMemoryScheduleRepository::load_catalog(&config.catalog_path)
        .with_context(|| {
            format!(
                "failed to load catalog {} (set CATALOG_PATH, see catalog.example.json)",
                config.catalog_path
            )
        })?;
    let service = RestaurantService::new(repo, config.timezone);

    // 3. 输出当前营业状态
    let now = Utc::now();
    for profile in service.profiles().await? {
        let status = service.status(&profile.id, now).await?;
        println!("{:<24} {:<32} {:?}", profile.id, profile.name, status);
    }

    Ok(())
}
