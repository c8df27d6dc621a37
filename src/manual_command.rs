use anyhow::Result;
use chrono::Datelike;
use log::info;

use crate::ledger::Ledger;
use crate::storage::Storage;
use crate::time_entry::TimeEntry;

/// 指定した日付に出勤・退勤時刻で勤務を記録するサブコマンドの引数。
#[derive(Debug, clap::Args)]
pub struct ManualArgs {
    #[clap(help = "User name from the roster")]
    name: String,

    #[clap(help = "Work date in the format DD/MM/YYYY")]
    date: String,

    #[clap(help = "Entry time in the format HH:MM")]
    entry: String,

    #[clap(help = "Exit time in the format HH:MM")]
    exit: String,

    #[clap(
        short = 'd',
        long = "description",
        default_value = "",
        help = "Free-text description of the activities"
    )]
    description: String,
}

pub struct ManualCommand<'a, S: Storage> {
    ledger: &'a mut Ledger<S>,
}

impl<'a, S: Storage> ManualCommand<'a, S> {
    /// 新しい`ManualCommand`を返す。
    pub fn new(ledger: &'a mut Ledger<S>) -> Self {
        Self { ledger }
    }

    /// `manual`サブコマンドの処理を行う。
    ///
    /// 過去の日付にも記録できる。勤務分数は出勤・退勤時刻の通算分の差になる。
    ///
    /// # Arguments
    ///
    /// * `manual` - `manual`サブコマンドの引数
    pub fn run(&mut self, manual: ManualArgs) -> Result<TimeEntry> {
        info!(
            "Manual entry on {} ({} ~ {}) for {}.",
            manual.date, manual.entry, manual.exit, manual.name
        );

        let entry = self.ledger.record_manual(
            &manual.name,
            &manual.date,
            &manual.entry,
            &manual.exit,
            &manual.description,
        )?;
        let total_month = self.ledger.hours_for_month(
            &manual.name,
            Some(entry.date.month()),
            Some(entry.date.year()),
        )?;

        info!(
            "Entry recorded successfully. Total in {:02}/{} for {}: {:.2} h.",
            entry.date.month(),
            entry.date.year(),
            manual.name,
            total_month
        );

        Ok(entry)
    }
}
