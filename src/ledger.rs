use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use log::info;

use crate::datetime;
use crate::error::ValidationError;
use crate::report::{AnnualReport, MonthTotal, MonthlyReport, UserAnnual, UserMonthly};
use crate::storage::{LedgerDocument, Storage};
use crate::time_entry::{hours_from_minutes, TimeEntry};

/// 名簿と全ユーザーの勤務記録を保持する台帳。
///
/// すべての検証・記録・集計はこの型を経由する。更新系の操作は検証が
/// すべて通った後にのみ記録を追加し、戻る前に必ずドキュメント全体を
/// 保存する。検証エラー時には一切の更新も保存も行わない。
///
/// # Examples
///
/// ```ignore
/// let storage = JsonStorage::new("horas_estagio.json");
/// let mut ledger = Ledger::open(roster, storage)?;
/// let entry = ledger.register_by_times("Samuel", "08:30", "17:45")?;
/// ```
pub struct Ledger<S: Storage> {
    roster: Vec<String>,
    document: LedgerDocument,
    storage: S,
}

impl<S: Storage> Ledger<S> {
    /// 保存済みのドキュメントから台帳を開く。
    ///
    /// ファイルがない場合は空の台帳から始める。読み込んだドキュメントに
    /// 存在しない名簿ユーザーは空の記録列で補われる。ドキュメント側にしか
    /// いないユーザーの記録は破棄せずそのまま保持する。
    ///
    /// # Arguments
    ///
    /// * `roster` - 記録対象となるユーザー名の一覧
    /// * `storage` - ドキュメントの読み書きに使うストレージ
    pub fn open(roster: Vec<String>, storage: S) -> Result<Self> {
        let mut document = storage
            .load()
            .context("Failed to load ledger document")?
            .unwrap_or_default();

        for name in &roster {
            document.users.entry(name.clone()).or_default();
        }
        info!("Ledger opened with {} roster users.", roster.len());

        Ok(Self {
            roster,
            document,
            storage,
        })
    }

    /// 出勤・退勤時刻から今日の勤務を記録する。
    ///
    /// 日付は呼び出し時点の今日になる。退勤時刻は出勤時刻より後で
    /// なければならない。日をまたぐ勤務は扱えず、検証エラーになる。
    ///
    /// # Arguments
    ///
    /// * `name` - 名簿上のユーザー名
    /// * `entry_time` - 出勤時刻("HH:MM")
    /// * `exit_time` - 退勤時刻("HH:MM")
    pub fn register_by_times(
        &mut self,
        name: &str,
        entry_time: &str,
        exit_time: &str,
    ) -> Result<TimeEntry> {
        self.validate_user(name)?;
        let entry_minutes = datetime::time_to_minutes(entry_time)?;
        let exit_minutes = datetime::time_to_minutes(exit_time)?;
        if exit_minutes <= entry_minutes {
            return Err(ValidationError::ExitNotAfterEntry.into());
        }

        self.record(name, datetime::today(), exit_minutes - entry_minutes, "")
    }

    /// 指定した日付に勤務分数を直接記録する。
    ///
    /// 過去の日付の後追い入力に使う。日付の上限・下限は確認しない。
    ///
    /// # Arguments
    ///
    /// * `name` - 名簿上のユーザー名
    /// * `date` - 勤務日("DD/MM/YYYY")
    /// * `minutes` - 勤務分数(正の整数)
    /// * `description` - 活動内容(空文字列で省略可)
    pub fn record_minutes(
        &mut self,
        name: &str,
        date: &str,
        minutes: i64,
        description: &str,
    ) -> Result<TimeEntry> {
        self.validate_user(name)?;
        let date = datetime::parse_date(date)?;
        if minutes <= 0 {
            return Err(ValidationError::NonPositiveMinutes(minutes).into());
        }

        self.record(name, date, minutes, description)
    }

    /// 指定した日付に出勤・退勤時刻から勤務を記録する。
    ///
    /// 勤務分数は2つの時刻の通算分の差として計算する。退勤時刻の通算分は
    /// 出勤時刻の通算分より大きくなければならない(日またぎ不可)。
    ///
    /// # Arguments
    ///
    /// * `name` - 名簿上のユーザー名
    /// * `date` - 勤務日("DD/MM/YYYY")
    /// * `entry_time` - 出勤時刻("HH:MM")
    /// * `exit_time` - 退勤時刻("HH:MM")
    /// * `description` - 活動内容(空文字列で省略可)
    pub fn record_manual(
        &mut self,
        name: &str,
        date: &str,
        entry_time: &str,
        exit_time: &str,
        description: &str,
    ) -> Result<TimeEntry> {
        self.validate_user(name)?;
        let date = datetime::parse_date(date)?;
        let entry_minutes = datetime::time_to_minutes(entry_time)?;
        let exit_minutes = datetime::time_to_minutes(exit_time)?;
        if exit_minutes <= entry_minutes {
            return Err(ValidationError::ExitNotAfterEntry.into());
        }

        self.record(name, date, exit_minutes - entry_minutes, description)
    }

    /// 記録の共通処理。
    ///
    /// 検証済みの値から記録を組み立てて追記し、更新時刻を刻んでから
    /// ドキュメント全体を保存する。1回の呼び出しにつき保存も1回行う。
    fn record(
        &mut self,
        name: &str,
        date: NaiveDate,
        minutes: i64,
        description: &str,
    ) -> Result<TimeEntry> {
        let entry = TimeEntry::new(date, minutes, description, datetime::now());

        self.document
            .users
            .entry(name.to_string())
            .or_default()
            .entries
            .push(entry.clone());
        self.document.updated_at = Some(datetime::now());
        self.storage
            .save(&self.document)
            .context("Failed to save ledger document")?;
        info!("Recorded {} minutes for {}.", minutes, name);

        Ok(entry)
    }

    /// 指定した日の勤務分数の合計を返す。
    ///
    /// 日付を省略した場合は今日を使う。同じ日の複数の記録は合算される。
    pub fn minutes_for_day(
        &self,
        name: &str,
        date: Option<NaiveDate>,
    ) -> Result<i64, ValidationError> {
        self.validate_user(name)?;
        let date = date.unwrap_or_else(datetime::today);

        Ok(self
            .user_entries(name)
            .iter()
            .filter(|entry| entry.date == date)
            .map(TimeEntry::worked_minutes)
            .sum())
    }

    /// 指定した月の勤務分数の合計を返す。
    ///
    /// 月・年を省略した場合は今月・今年を使う。
    pub fn minutes_for_month(
        &self,
        name: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<i64, ValidationError> {
        self.validate_user(name)?;
        let today = datetime::today();
        let month = month.unwrap_or_else(|| today.month());
        let year = year.unwrap_or_else(|| today.year());

        Ok(self.sum_minutes(name, month, year))
    }

    /// 指定した日の勤務時間数(小数第2位で丸め)を返す。
    pub fn hours_for_day(
        &self,
        name: &str,
        date: Option<NaiveDate>,
    ) -> Result<f64, ValidationError> {
        Ok(hours_from_minutes(self.minutes_for_day(name, date)?))
    }

    /// 指定した月の勤務時間数(小数第2位で丸め)を返す。
    pub fn hours_for_month(
        &self,
        name: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<f64, ValidationError> {
        Ok(hours_from_minutes(self.minutes_for_month(
            name, month, year,
        )?))
    }

    /// ユーザーの全記録を登録順で返す。
    pub fn entries_for_user(&self, name: &str) -> Result<&[TimeEntry], ValidationError> {
        self.validate_user(name)?;
        Ok(self.user_entries(name))
    }

    /// 指定した月の全ユーザーの集計スナップショットを生成する。
    ///
    /// 名簿の全ユーザーを必ず含む。総計の時間数は分の総計から導出し、
    /// ユーザーごとに丸めた時間数の合算はしない。台帳は変更しない。
    pub fn monthly_report(&self, month: Option<u32>, year: Option<i32>) -> MonthlyReport {
        let today = datetime::today();
        let month = month.unwrap_or_else(|| today.month());
        let year = year.unwrap_or_else(|| today.year());

        let mut users = Vec::with_capacity(self.roster.len());
        let mut total_minutes = 0;
        for name in &self.roster {
            let minutes = self.sum_minutes(name, month, year);
            total_minutes += minutes;
            users.push(UserMonthly {
                name: name.clone(),
                minutes,
                hours: hours_from_minutes(minutes),
            });
        }

        MonthlyReport {
            month,
            year,
            users,
            total_minutes,
            total_hours: hours_from_minutes(total_minutes),
        }
    }

    /// 指定した年の全ユーザー・全12ヶ月の集計スナップショットを生成する。
    ///
    /// 記録のない月も0値で必ず現れるため、呼び出し側は存在チェックなしに
    /// そのまま表示できる。すべての時間数は分の合算から導出する。
    pub fn annual_report(&self, year: Option<i32>) -> AnnualReport {
        let year = year.unwrap_or_else(|| datetime::today().year());

        let mut users = Vec::with_capacity(self.roster.len());
        let mut month_totals = [MonthTotal::default(); 12];
        let mut total_minutes = 0;
        for name in &self.roster {
            let mut months = [MonthTotal::default(); 12];
            let mut user_minutes = 0;
            for month in 1..=12u32 {
                let minutes = self.sum_minutes(name, month, year);
                months[(month - 1) as usize] = MonthTotal {
                    minutes,
                    hours: hours_from_minutes(minutes),
                };
                month_totals[(month - 1) as usize].minutes += minutes;
                user_minutes += minutes;
            }

            total_minutes += user_minutes;
            users.push(UserAnnual {
                name: name.clone(),
                minutes: user_minutes,
                hours: hours_from_minutes(user_minutes),
                months,
            });
        }
        for total in &mut month_totals {
            total.hours = hours_from_minutes(total.minutes);
        }

        AnnualReport {
            year,
            users,
            months: month_totals,
            total_minutes,
            total_hours: hours_from_minutes(total_minutes),
        }
    }

    /// 名簿に存在するユーザーであることを検証する。
    fn validate_user(&self, name: &str) -> Result<(), ValidationError> {
        if self.roster.iter().any(|user| user == name) {
            Ok(())
        } else {
            Err(ValidationError::UnknownUser(name.to_string()))
        }
    }

    /// ユーザーの記録列を返す。未知のユーザーは空列として扱う。
    fn user_entries(&self, name: &str) -> &[TimeEntry] {
        self.document
            .users
            .get(name)
            .map(|records| records.entries.as_slice())
            .unwrap_or(&[])
    }

    /// 指定した月・年の勤務分数を合算する。過去形式の記録は分数を復元して数える。
    fn sum_minutes(&self, name: &str, month: u32, year: i32) -> i64 {
        self.user_entries(name)
            .iter()
            .filter(|entry| entry.date.month() == month && entry.date.year() == year)
            .map(TimeEntry::worked_minutes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::Ledger;
    use crate::datetime::mock_datetime;
    use crate::error::ValidationError;
    use crate::storage::{LedgerDocument, MockStorage, UserRecords};
    use crate::time_entry::TimeEntry;

    fn roster() -> Vec<String> {
        ["Márcio", "Samuel", "Caio", "Robson"]
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn empty_storage() -> MockStorage {
        let mut storage = MockStorage::new();
        storage.expect_load().times(1).returning(|| Ok(None));
        storage
    }

    fn set_time(datetime: &str) {
        mock_datetime::set_mock_time(datetime.parse().unwrap());
    }

    /// 保存ファイルがない場合、全ユーザーが空の記録で初期化されることを確認する。
    #[test]
    fn test_open_without_document() {
        let ledger = Ledger::open(roster(), empty_storage()).unwrap();

        for name in roster() {
            assert_eq!(ledger.entries_for_user(&name).unwrap(), &[]);
        }
    }

    /// 読み込んだドキュメントにいない名簿ユーザーが補われることを確認する。
    #[test]
    fn test_open_backfills_missing_roster_user() {
        let mut document = LedgerDocument::default();
        document.users.insert(
            "Samuel".to_string(),
            UserRecords {
                entries: vec![TimeEntry::new(
                    NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
                    480,
                    "",
                    "2023-03-15T17:00:00".parse().unwrap(),
                )],
            },
        );
        let mut storage = MockStorage::new();
        storage
            .expect_load()
            .times(1)
            .returning(move || Ok(Some(document.clone())));

        let ledger = Ledger::open(roster(), storage).unwrap();

        assert_eq!(ledger.entries_for_user("Samuel").unwrap().len(), 1);
        assert_eq!(ledger.entries_for_user("Caio").unwrap(), &[]);
    }

    /// 名簿にいないユーザーの既存記録が破棄されないことを確認する。
    #[test]
    fn test_open_keeps_unknown_users_from_document() {
        let mut document = LedgerDocument::default();
        document.users.insert(
            "Antiga".to_string(),
            UserRecords {
                entries: vec![TimeEntry::new(
                    NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
                    60,
                    "",
                    "2022-01-10T12:00:00".parse().unwrap(),
                )],
            },
        );
        let mut storage = MockStorage::new();
        storage
            .expect_load()
            .times(1)
            .returning(move || Ok(Some(document.clone())));
        storage
            .expect_save()
            .times(1)
            .withf(|document| document.users.contains_key("Antiga"))
            .returning(|_| Ok(()));

        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 480, "").unwrap();
    }

    /// 出退勤時刻から今日の日付で記録されることを確認する。
    #[test]
    fn test_register_by_times() {
        set_time("2023-03-15T17:45:00");
        let mut storage = empty_storage();
        storage.expect_save().times(1).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();

        let entry = ledger.register_by_times("Samuel", "08:30", "17:45").unwrap();

        assert_eq!(entry.minutes, Some(555));
        assert_eq!(entry.hours, 9.25);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
        assert_eq!(entry.description, "");
        assert_eq!(ledger.entries_for_user("Samuel").unwrap().len(), 1);
    }

    /// 退勤時刻が出勤時刻以前の場合、記録も保存もされないことを確認する。
    #[rstest::rstest]
    #[case::exit_before_entry("17:45", "08:30")]
    #[case::exit_equals_entry("08:30", "08:30")]
    fn test_register_by_times_exit_not_after_entry(#[case] entry: &str, #[case] exit: &str) {
        let mut ledger = Ledger::open(roster(), empty_storage()).unwrap();

        let error = ledger.register_by_times("Samuel", entry, exit).unwrap_err();

        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::ExitNotAfterEntry)
        );
        assert_eq!(ledger.entries_for_user("Samuel").unwrap(), &[]);
    }

    /// 不正な時刻では記録も保存もされないことを確認する。
    #[test]
    fn test_register_by_times_invalid_time() {
        let mut ledger = Ledger::open(roster(), empty_storage()).unwrap();

        let error = ledger.register_by_times("Samuel", "0830", "17:45").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::InvalidTime("0830".to_string()))
        );
    }

    /// 名簿にいないユーザーが拒否されることを確認する。
    #[test]
    fn test_register_by_times_unknown_user() {
        let mut ledger = Ledger::open(roster(), empty_storage()).unwrap();

        let error = ledger.register_by_times("Desconhecido", "08:30", "17:45").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::UnknownUser("Desconhecido".to_string()))
        );
    }

    /// 指定日付への分数記録と月次集計への反映を確認する。
    #[test]
    fn test_record_minutes() {
        let mut storage = empty_storage();
        storage.expect_save().times(1).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();

        let entry = ledger.record_minutes("Caio", "15/03/2023", 480, "").unwrap();

        assert_eq!(entry.minutes, Some(480));
        assert_eq!(entry.hours, 8.0);

        let report = ledger.monthly_report(Some(3), Some(2023));
        let caio = report.users.iter().find(|row| row.name == "Caio").unwrap();
        assert_eq!(caio.minutes, 480);
        assert_eq!(caio.hours, 8.0);
    }

    /// 0以下の分数が拒否されることを確認する。
    #[rstest::rstest]
    #[case::zero(0)]
    #[case::negative(-30)]
    fn test_record_minutes_non_positive(#[case] minutes: i64) {
        let mut ledger = Ledger::open(roster(), empty_storage()).unwrap();

        let error = ledger
            .record_minutes("Caio", "15/03/2023", minutes, "")
            .unwrap_err();

        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::NonPositiveMinutes(minutes))
        );
    }

    /// 不正な日付が拒否されることを確認する。
    #[test]
    fn test_record_minutes_invalid_date() {
        let mut ledger = Ledger::open(roster(), empty_storage()).unwrap();

        let error = ledger
            .record_minutes("Caio", "31/02/2023", 480, "")
            .unwrap_err();

        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::InvalidDate("31/02/2023".to_string()))
        );
    }

    /// 日付と出退勤時刻からの記録を確認する。
    #[test]
    fn test_record_manual() {
        let mut storage = empty_storage();
        storage.expect_save().times(1).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();

        let entry = ledger
            .record_manual("Robson", "10/03/2023", "08:00", "12:30", "triagem")
            .unwrap();

        assert_eq!(entry.minutes, Some(270));
        assert_eq!(entry.hours, 4.5);
        assert_eq!(entry.description, "triagem");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2023, 3, 10).unwrap());
    }

    /// 日をまたぐ勤務が拒否されることを確認する。
    #[test]
    fn test_record_manual_overnight_rejected() {
        let mut ledger = Ledger::open(roster(), empty_storage()).unwrap();

        let error = ledger
            .record_manual("Robson", "10/03/2023", "22:00", "06:00", "")
            .unwrap_err();

        assert_eq!(
            error.downcast_ref::<ValidationError>(),
            Some(&ValidationError::ExitNotAfterEntry)
        );
        assert_eq!(ledger.entries_for_user("Robson").unwrap(), &[]);
    }

    /// 同じ日の複数の記録が合算されることを確認する。
    #[test]
    fn test_minutes_for_day_sums_same_date() {
        let mut storage = empty_storage();
        storage.expect_save().times(3).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 240, "manhã").unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 180, "tarde").unwrap();
        ledger.record_minutes("Caio", "16/03/2023", 60, "").unwrap();

        let minutes = ledger
            .minutes_for_day("Caio", Some(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()))
            .unwrap();

        assert_eq!(minutes, 420);
        assert_eq!(
            ledger
                .hours_for_day("Caio", Some(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()))
                .unwrap(),
            7.0
        );
    }

    /// 日付を省略すると今日の合計になることを確認する。
    #[test]
    fn test_minutes_for_day_defaults_to_today() {
        set_time("2023-03-15T12:00:00");
        let mut storage = empty_storage();
        storage.expect_save().times(2).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 300, "").unwrap();
        ledger.record_minutes("Caio", "14/03/2023", 120, "").unwrap();

        assert_eq!(ledger.minutes_for_day("Caio", None).unwrap(), 300);
    }

    /// 過去形式の記録が分数に復元されて集計されることを確認する。
    #[test]
    fn test_aggregation_with_legacy_entries() {
        let mut document = LedgerDocument::default();
        document.users.insert(
            "Samuel".to_string(),
            UserRecords {
                entries: vec![
                    TimeEntry {
                        date: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
                        minutes: None,
                        hours: 9.25,
                        description: String::new(),
                        timestamp: "2023-03-15T18:00:00".parse().unwrap(),
                    },
                    TimeEntry::new(
                        NaiveDate::from_ymd_opt(2023, 3, 16).unwrap(),
                        45,
                        "",
                        "2023-03-16T18:00:00".parse().unwrap(),
                    ),
                ],
            },
        );
        let mut storage = MockStorage::new();
        storage
            .expect_load()
            .times(1)
            .returning(move || Ok(Some(document.clone())));

        let ledger = Ledger::open(roster(), storage).unwrap();

        assert_eq!(
            ledger.minutes_for_month("Samuel", Some(3), Some(2023)).unwrap(),
            600
        );
        assert_eq!(
            ledger.hours_for_month("Samuel", Some(3), Some(2023)).unwrap(),
            10.0
        );
    }

    /// 月次レポートに記録のないユーザーも0値で含まれることを確認する。
    #[test]
    fn test_monthly_report_includes_zero_users() {
        let mut storage = empty_storage();
        storage.expect_save().times(1).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 480, "").unwrap();

        let report = ledger.monthly_report(Some(3), Some(2023));

        assert_eq!(report.users.len(), 4);
        let marcio = report.users.iter().find(|row| row.name == "Márcio").unwrap();
        assert_eq!(marcio.minutes, 0);
        assert_eq!(marcio.hours, 0.0);
        assert_eq!(report.total_minutes, 480);
        assert_eq!(report.total_hours, 8.0);
    }

    /// 総計の時間数が分の総計から導出されることを確認する。
    ///
    ///  - ユーザーごとに丸めた時間数を合算すると0.66になる入力で、
    ///    0.67(=round(40 / 60, 2))が得られることを確認している。
    #[test]
    fn test_monthly_report_total_hours_from_total_minutes() {
        let mut storage = empty_storage();
        storage.expect_save().times(2).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 20, "").unwrap();
        ledger.record_minutes("Samuel", "15/03/2023", 20, "").unwrap();

        let report = ledger.monthly_report(Some(3), Some(2023));

        assert_eq!(report.total_minutes, 40);
        assert_eq!(report.total_hours, 0.67);
        let rounded_sum: f64 = report.users.iter().map(|row| row.hours).sum();
        assert_eq!((rounded_sum * 100.0).round() / 100.0, 0.66);
    }

    /// 月・年を省略した月次レポートが今月になることを確認する。
    #[test]
    fn test_monthly_report_defaults_to_current_month() {
        set_time("2023-03-15T12:00:00");
        let mut storage = empty_storage();
        storage.expect_save().times(1).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 90, "").unwrap();

        let report = ledger.monthly_report(None, None);

        assert_eq!(report.month, 3);
        assert_eq!(report.year, 2023);
        assert_eq!(report.total_minutes, 90);
    }

    /// 年次レポートの3段階の集計と12ヶ月の稠密な構造を確認する。
    #[test]
    fn test_annual_report() {
        let mut storage = empty_storage();
        storage.expect_save().times(3).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 480, "").unwrap();
        ledger.record_minutes("Caio", "20/11/2023", 120, "").unwrap();
        ledger.record_minutes("Samuel", "01/03/2023", 60, "").unwrap();

        let report = ledger.annual_report(Some(2023));

        let caio = report.users.iter().find(|row| row.name == "Caio").unwrap();
        assert_eq!(caio.minutes, 600);
        assert_eq!(caio.hours, 10.0);
        assert_eq!(caio.months[2].minutes, 480);
        assert_eq!(caio.months[10].minutes, 120);
        for month in [1, 2, 4, 5, 6, 7, 8, 9, 10, 12] {
            assert_eq!(caio.months[month - 1].minutes, 0);
            assert_eq!(caio.months[month - 1].hours, 0.0);
        }

        assert_eq!(report.months[2].minutes, 540);
        assert_eq!(report.months[2].hours, 9.0);
        assert_eq!(report.months[10].minutes, 120);
        assert_eq!(report.total_minutes, 660);
        assert_eq!(report.total_hours, 11.0);
    }

    /// 対象年以外の記録が年次レポートに含まれないことを確認する。
    #[test]
    fn test_annual_report_filters_year() {
        let mut storage = empty_storage();
        storage.expect_save().times(2).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 480, "").unwrap();
        ledger.record_minutes("Caio", "15/03/2022", 999, "").unwrap();

        let report = ledger.annual_report(Some(2023));

        assert_eq!(report.total_minutes, 480);
    }

    /// 記録が登録順で取得できることを確認する。
    #[test]
    fn test_entries_for_user_keeps_insertion_order() {
        let mut storage = empty_storage();
        storage.expect_save().times(2).returning(|_| Ok(()));
        let mut ledger = Ledger::open(roster(), storage).unwrap();
        ledger.record_minutes("Caio", "16/03/2023", 60, "segundo dia").unwrap();
        ledger.record_minutes("Caio", "15/03/2023", 60, "primeiro dia").unwrap();

        let entries = ledger.entries_for_user("Caio").unwrap();

        assert_eq!(entries[0].description, "segundo dia");
        assert_eq!(entries[1].description, "primeiro dia");
    }
}
