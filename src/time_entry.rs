use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 勤務分数から表示用の時間数(小数第2位で丸め)を導出する。
pub fn hours_from_minutes(minutes: i64) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

/// 1回分の勤務時間の記録。
///
/// `minutes`が正となる記録のみが作成される。`minutes`が`None`になるのは、
/// `hours`のみを持つ過去形式の記録をファイルから読み込んだ場合だけであり、
/// 集計時には`worked_minutes`で分数を復元する。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(with = "date_string")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
    pub hours: f64,
    #[serde(rename = "descricao", default)]
    pub description: String,
    pub timestamp: NaiveDateTime,
}

impl TimeEntry {
    /// 新しい`TimeEntry`を返す。`hours`は`minutes`から導出する。
    pub fn new(date: NaiveDate, minutes: i64, description: &str, timestamp: NaiveDateTime) -> Self {
        Self {
            date,
            minutes: Some(minutes),
            hours: hours_from_minutes(minutes),
            description: description.to_string(),
            timestamp,
        }
    }

    /// 集計に使う勤務分数を返す。
    ///
    /// 過去形式の記録では`hours`から`round(hours * 60)`で復元する。
    pub fn worked_minutes(&self) -> i64 {
        self.minutes
            .unwrap_or_else(|| (self.hours * 60.0).round() as i64)
    }
}

/// 日付を"DD/MM/YYYY"形式の文字列として読み書きするためのserdeモジュール。
mod date_string {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }
}
