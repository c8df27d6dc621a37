use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::error::ValidationError;

#[cfg(not(test))]
/// 現在のローカル時刻を取得する。
///
/// タイムゾーン情報は扱わないため、naiveな壁時計時刻を返す。
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// 現在のローカル日付を取得する。
pub fn today() -> NaiveDate {
    now().date()
}

/// "HH:MM"形式の文字列をその日の0時からの通算分に変換する。
///
/// `:`で区切られた2つの数値であることのみを検証し、時(0-23)や分(0-59)の
/// 範囲チェックは行わない。"25:99"のような入力もそのまま計算される。
///
/// # Arguments
///
/// * `hhmm` - "HH:MM"形式の時刻文字列
pub fn time_to_minutes(hhmm: &str) -> Result<i64, ValidationError> {
    let parts: Vec<&str> = hhmm.split(':').collect();
    if parts.len() != 2 {
        return Err(ValidationError::InvalidTime(hhmm.to_string()));
    }

    let hours: i64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidTime(hhmm.to_string()))?;
    let minutes: i64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidTime(hhmm.to_string()))?;

    Ok(hours * 60 + minutes)
}

/// "DD/MM/YYYY"形式の文字列を日付としてパースする。
///
/// 実在するカレンダー日付であることも検証する("31/02/2023"は失敗する)。
pub fn parse_date(date: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date, "%d/%m/%Y")
        .map_err(|_| ValidationError::InvalidDate(date.to_string()))
}


#[cfg(test)]
pub use mock_datetime::now;
