use anyhow::Result;
use chrono::Datelike;
use log::info;

use crate::ledger::Ledger;
use crate::storage::Storage;
use crate::time_entry::TimeEntry;

/// 指定した日付に勤務分数を直接記録するサブコマンドの引数。
#[derive(Debug, clap::Args)]
pub struct MinutesArgs {
    #[clap(help = "User name from the roster")]
    name: String,

    #[clap(help = "Work date in the format DD/MM/YYYY")]
    date: String,

    #[clap(help = "Worked minutes (positive integer)")]
    minutes: i64,

    #[clap(
        short = 'd',
        long = "description",
        default_value = "",
        help = "Free-text description of the activities"
    )]
    description: String,
}

pub struct MinutesCommand<'a, S: Storage> {
    ledger: &'a mut Ledger<S>,
}

impl<'a, S: Storage> MinutesCommand<'a, S> {
    /// 新しい`MinutesCommand`を返す。
    pub fn new(ledger: &'a mut Ledger<S>) -> Self {
        Self { ledger }
    }

    /// `minutes`サブコマンドの処理を行う。
    ///
    /// # Arguments
    ///
    /// * `minutes` - `minutes`サブコマンドの引数
    pub fn run(&mut self, minutes: MinutesArgs) -> Result<TimeEntry> {
        info!(
            "Recording {} minutes on {} for {}.",
            minutes.minutes, minutes.date, minutes.name
        );

        let entry = self.ledger.record_minutes(
            &minutes.name,
            &minutes.date,
            minutes.minutes,
            &minutes.description,
        )?;
        let total_month = self.ledger.hours_for_month(
            &minutes.name,
            Some(entry.date.month()),
            Some(entry.date.year()),
        )?;

        info!(
            "Entry recorded successfully. Total in {:02}/{} for {}: {:.2} h.",
            entry.date.month(),
            entry.date.year(),
            minutes.name,
            total_month
        );

        Ok(entry)
    }
}
