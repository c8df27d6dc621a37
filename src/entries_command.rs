use anyhow::Result;
use log::info;

use crate::ledger::Ledger;
use crate::storage::Storage;
use crate::time_entry::TimeEntry;

/// ユーザーの全記録を表示するサブコマンドの引数。
#[derive(Debug, clap::Args)]
pub struct EntriesArgs {
    #[clap(help = "User name from the roster")]
    name: String,
}

pub struct EntriesCommand<'a, S: Storage> {
    ledger: &'a Ledger<S>,
}

impl<'a, S: Storage> EntriesCommand<'a, S> {
    /// 新しい`EntriesCommand`を返す。
    pub fn new(ledger: &'a Ledger<S>) -> Self {
        Self { ledger }
    }

    /// `entries`サブコマンドの処理を行う。
    ///
    /// # Arguments
    ///
    /// * `entries` - `entries`サブコマンドの引数
    pub fn run(&self, entries: EntriesArgs) -> Result<Vec<TimeEntry>> {
        let records = self.ledger.entries_for_user(&entries.name)?.to_vec();
        info!("Found {} entries for {}.", records.len(), entries.name);

        Ok(records)
    }
}
