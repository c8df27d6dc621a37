use anyhow::Result;
use log::info;

use crate::ledger::Ledger;
use crate::storage::Storage;
use crate::time_entry::TimeEntry;

/// 出勤・退勤時刻から今日の勤務を記録するサブコマンドの引数。
#[derive(Debug, clap::Args)]
pub struct ClockArgs {
    #[clap(help = "User name from the roster")]
    name: String,

    #[clap(help = "Entry time in the format HH:MM")]
    entry: String,

    #[clap(help = "Exit time in the format HH:MM")]
    exit: String,
}

pub struct ClockCommand<'a, S: Storage> {
    ledger: &'a mut Ledger<S>,
}

impl<'a, S: Storage> ClockCommand<'a, S> {
    /// 新しい`ClockCommand`を返す。
    ///
    /// # Arguments
    /// * `ledger` - 記録先の台帳
    pub fn new(ledger: &'a mut Ledger<S>) -> Self {
        Self { ledger }
    }

    /// `clock`サブコマンドの処理を行う。
    ///
    /// 今日の日付で出勤・退勤時刻の差分を勤務として記録する。
    ///
    /// # Arguments
    ///
    /// * `clock` - `clock`サブコマンドの引数
    pub fn run(&mut self, clock: ClockArgs) -> Result<TimeEntry> {
        info!(
            "Clock {} ~ {} for {}.",
            clock.entry, clock.exit, clock.name
        );

        let entry = self
            .ledger
            .register_by_times(&clock.name, &clock.entry, &clock.exit)?;
        let total_today = self.ledger.hours_for_day(&clock.name, None)?;

        info!(
            "Entry recorded successfully. Total today for {}: {:.2} h.",
            clock.name, total_today
        );

        Ok(entry)
    }
}
