//! 定数の共通化

use std::time::Duration;

/// DONKI Webサービスの既定ベースURL
pub const DONKI_BASE_URL: &str = "https://kauai.ccmc.gsfc.nasa.gov/DONKI/WS/get/";

/// api.nasa.gov経由のミラー。切り替えはコード上の固定選択で、実行時には変更しない。
pub const NASA_API_BASE_URL: &str = "https://api.nasa.gov/DONKI/";

pub const YEARS: &[i32] = &[2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023];

/// 通知フィードのエンドポイント名。
/// このエンドポイントだけは専用ディレクトリへ保存する。
pub const NOTIFICATIONS_EVENT: &str = "notifications";

pub const EVENTS: &[&str] = &[
    "CME",
    "IPS",
    "RBE",
    "HSS",
    "GST",
    "FLR",
    "SEP",
    "MPC",
    NOTIFICATIONS_EVENT,
];

/// 同時に実行するリクエスト数の上限
pub const MAX_PARALLEL_DOWNLOADS: usize = 5;

/// リクエスト1回あたりのタイムアウト
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// api.nasa.gov利用時のみ設定する
pub const API_KEY: Option<&str> = None;

pub const DATASETS_DIR: &str = "resources/datasets";

pub const NOTIFICATIONS_DIR: &str = "resources/notifications";
