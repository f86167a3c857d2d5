use std::sync::Arc;

use donki_datasets::config::Config;
use donki_datasets::download::run_downloads;
use reqwest::Client;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Arc::new(Config::from_constants());

    // HTTPセッションは実行全体で1つを共有する
    let client = Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    run_downloads(&client, config).await?;
    Ok(())
}
