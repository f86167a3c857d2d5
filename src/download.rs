use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use reqwest::Client;
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::error::AppError;
use crate::fetch::fetch_dataset;
use crate::output::{dataset_file_path, write_dataset};
use crate::params::{DownloadTask, download_parameters, month_date_range};

/// リクエストURLを組み立てる。
/// api_keyは設定されている場合のみクエリに付与する。
pub fn build_request_url(
    config: &Config,
    event: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> String {
    let mut url = format!(
        "{}{}?startDate={}&endDate={}",
        config.base_url, event, start, end
    );
    if let Some(api_key) = &config.api_key {
        url.push_str(&format!("&api_key={api_key}"));
    }
    url
}

/// 1タスクを最後まで処理する。
/// ネットワークとファイルI/Oの失敗はここでログに残して握りつぶし、
/// 他のタスクへ影響させない。それ以外のエラーはそのまま返す。
pub async fn download_task(
    client: &Client,
    config: &Config,
    semaphore: Arc<Semaphore>,
    task: &DownloadTask,
) -> Result<(), AppError> {
    let (start, end) = month_date_range(task.year, task.month)?;
    let url = build_request_url(config, &task.event, start, end);
    println!("url = {url}");

    // ネットワークフェーズはセマフォ保持中に限定する。
    // permitはブロック終端で返却されるため、ディスク書き込みが
    // リクエスト枠を占有することはない。
    let fetched = {
        let _permit = semaphore.acquire_owned().await?;
        fetch_dataset(client, &url).await
    };

    let body = match fetched {
        Ok(body) => body,
        Err(e) if e.is_expected() => {
            eprintln!("HTTP fetch error: {} (url={})", e, url);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    // 空ボディはファイルを作らず正常終了
    if body.is_empty() {
        return Ok(());
    }

    let path = dataset_file_path(config, task, start, end);
    if let Err(e) = write_dataset(&path, &body).await {
        if e.is_expected() {
            eprintln!("File write error: {} (path={})", e, path.display());
            return Ok(());
        }
        return Err(e);
    }

    Ok(())
}

/// 全タスクを起動し、完了まで待つ。
/// 想定内の失敗はタスク内で処理済みなので、ここまで届いたエラーは
/// プログラミングエラーとして即座に伝播させる。
pub async fn run_downloads(client: &Client, config: Arc<Config>) -> Result<(), AppError> {
    let semaphore = Arc::new(Semaphore::new(config.max_parallel_downloads));

    let handles = download_parameters(config.as_ref())
        .map(|task| {
            let client_clone = client.clone();
            let config_clone = Arc::clone(&config);
            let sem_clone = Arc::clone(&semaphore);

            tokio::spawn(async move {
                download_task(&client_clone, &config_clone, sem_clone, &task).await
            })
        })
        .collect::<Vec<_>>();

    // タスクの完了を待機
    for result in join_all(handles).await {
        result??;
    }

    Ok(())
}
