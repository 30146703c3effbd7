use items_api::{config::Config, run_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    run_app(config).await
}
