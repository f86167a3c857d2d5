use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::fs;

use crate::config::Config;
use crate::constants::NOTIFICATIONS_EVENT;
use crate::error::AppError;
use crate::params::DownloadTask;

/// タスクと日付範囲から出力ファイルのパスを決める。
/// (year, month, event)に対して単射なので、並行するタスク同士が
/// 同じパスへ書き込むことはない。
pub fn dataset_file_path(
    config: &Config,
    task: &DownloadTask,
    start: NaiveDate,
    end: NaiveDate,
) -> PathBuf {
    if task.event == NOTIFICATIONS_EVENT {
        // 通知フィードはイベント名を付けず専用ディレクトリへ
        config
            .notifications_dir
            .join(format!("{start}_{end}.json"))
    } else {
        config
            .datasets_dir
            .join(format!("{}_{}_{}.json", task.event, start, end))
    }
}

/// レスポンスボディをまるごと書き込む。
/// 同名ファイルが既にあれば上書きする。親ディレクトリは作成しない。
pub async fn write_dataset<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), AppError> {
    fs::write(path, bytes).await?;
    Ok(())
}
