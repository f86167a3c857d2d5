use reqwest::Client;

use crate::error::AppError;

/// HTTP GETを1回だけ実行する。
/// 成功時はレスポンスボディをバイト列として返す。
/// 非2xxステータスは失敗として扱う。リトライはしない。
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<Vec<u8>, AppError> {
    let resp = client.get(url).send().await?.error_for_status()?;

    // レートリミットの残量ヘッダがあれば表示する (無くてもエラーではない)
    if let Some(remaining) = resp
        .headers()
        .get("X-RateLimit-Remaining")
        .and_then(|value| value.to_str().ok())
    {
        println!("X-RateLimit-Remaining: {remaining}");
    }

    let body = resp.bytes().await?;
    Ok(body.to_vec())
}
