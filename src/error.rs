use thiserror::Error;

/// 入力値の検証に失敗したときのエラー。
///
/// 検証はすべて台帳の更新よりも前に行われるため、
/// このエラーが返った場合は記録も保存も発生していない。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("invalid date: {0} (expected DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("invalid time: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("minutes must be positive: {0}")]
    NonPositiveMinutes(i64),

    #[error("exit time must be after entry time")]
    ExitNotAfterEntry,
}
