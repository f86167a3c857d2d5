use std::path::PathBuf;
use std::time::Duration;

use crate::constants;

/// 実行全体で共有する設定値。
/// 起動時に一度だけ構築し、以後は読み取り専用で参照する。
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub years: Vec<i32>,
    pub events: Vec<String>,
    pub datasets_dir: PathBuf,
    pub notifications_dir: PathBuf,
    pub max_parallel_downloads: usize,
    pub request_timeout: Duration,
}

impl Config {
    /// constants.rsの固定値から本番用のConfigを組み立てる
    pub fn from_constants() -> Self {
        Self {
            base_url: constants::DONKI_BASE_URL.to_string(),
            api_key: constants::API_KEY.map(str::to_string),
            years: constants::YEARS.to_vec(),
            events: constants::EVENTS.iter().map(|e| e.to_string()).collect(),
            datasets_dir: PathBuf::from(constants::DATASETS_DIR),
            notifications_dir: PathBuf::from(constants::NOTIFICATIONS_DIR),
            max_parallel_downloads: constants::MAX_PARALLEL_DOWNLOADS,
            request_timeout: constants::REQUEST_TIMEOUT,
        }
    }
}
