use avtouz_api::{config::AppConfig, db::run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    run_migrations(&config.database_url).await?;
    println!("Migrations applied");
    Ok(())
}
