use chrono::NaiveDate;

use crate::config::Config;
use crate::error::AppError;

/// 1回のダウンロードに対応する(年, 月, イベント種別)の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub year: i32,
    pub month: u32,
    pub event: String,
}

/// 年→月→イベントの入れ子順で全組み合わせを列挙する。
/// 遅延イテレータで副作用を持たないため、何度呼んでも同じ列が得られる。
pub fn download_parameters(config: &Config) -> impl Iterator<Item = DownloadTask> + '_ {
    let events = &config.events;
    config.years.iter().flat_map(move |&year| {
        (1..=12u32).flat_map(move |month| {
            events.iter().map(move |event| DownloadTask {
                year,
                month,
                event: event.clone(),
            })
        })
    })
}

/// 指定した(年, 月)の月初日と月末日を返す。
/// 月末は翌月1日の前日として求めるので、月ごとの日数差やうるう年を
/// テーブルなしで正しく扱える。
pub fn month_date_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), AppError> {
    let invalid = || AppError::InvalidInput(format!("invalid year/month: {year}-{month}"));

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;
    let end = next_month_start.pred_opt().ok_or_else(invalid)?;

    Ok((start, end))
}
