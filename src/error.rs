use std::io;
use thiserror::Error;
use tokio::sync::AcquireError;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum AppError {
    // ファイルI/Oまわりのエラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ネットワーク関係のエラー (reqwest 等)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // 特定の入力が不正だった場合など
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // acquire_owned().await? のエラー
    #[error("Semaphore acquire error: {0}")]
    SemaphoreError(#[from] AcquireError),

    // tokio::spawn(…).await? のエラー
    #[error("Task join error: {0}")]
    JoinError(#[from] JoinError),
}

impl AppError {
    /// ネットワークとファイルI/Oの失敗だけを想定内として扱う。
    /// タスク単位でログに残して打ち切り、それ以外は上位へ伝播させる。
    pub fn is_expected(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Network(_))
    }
}
